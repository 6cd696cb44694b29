//! # Core Type Definitions
//!
//! This module contains all core types for the catalog:
//! - Identifiers (`SupplierCode`, `ProductId`)
//! - Entities (`Supplier`, `Product`, `Relation`)
//! - Text normalization (`normalize`)
//! - Error types (`CatalogError`)
//!
//! ## Normalization
//!
//! Names and state codes are stored trimmed and upper-cased. Every
//! constructor and every mutation goes through [`normalize`], so two
//! entities that compare equal by name always compare equal byte-for-byte.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Numeric code of a supplier, as found in the first column of the
/// suppliers file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SupplierCode(pub u64);

/// Numeric identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl fmt::Display for SupplierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Trim surrounding whitespace and convert to upper case.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

/// Case-insensitive comparison used by every name lookup.
#[must_use]
pub fn names_match(stored: &str, wanted: &str) -> bool {
    stored.to_lowercase() == wanted.to_lowercase()
}

// =============================================================================
// ENTITIES
// =============================================================================

/// A supplier. The code never changes after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    code: SupplierCode,
    /// Normalized display name.
    pub name: String,
    /// Normalized state code.
    pub state: String,
}

impl Supplier {
    /// Create a supplier, normalizing name and state.
    #[must_use]
    pub fn new(code: SupplierCode, name: &str, state: &str) -> Self {
        Self {
            code,
            name: normalize(name),
            state: normalize(state),
        }
    }

    /// The supplier's immutable code.
    #[must_use]
    pub const fn code(&self) -> SupplierCode {
        self.code
    }
}

/// A catalog product. Name and state are rewritten by `Catalog::modify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Normalized display name.
    pub name: String,
    /// Normalized state code.
    pub state: String,
}

impl Product {
    /// Create a product, normalizing name and state.
    #[must_use]
    pub fn new(id: ProductId, name: &str, state: &str) -> Self {
        Self {
            id,
            name: normalize(name),
            state: normalize(state),
        }
    }

    /// Replace name and state, normalizing both.
    pub fn rename(&mut self, name: &str, state: &str) {
        self.name = normalize(name);
        self.state = normalize(state);
    }
}

/// A link recording that a supplier carries a product.
///
/// Holds keys, not references. The state is independent of the
/// product's own state field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Foreign key into the suppliers map.
    pub supplier_code: SupplierCode,
    /// Foreign key into the products map.
    pub product_id: ProductId,
    /// Normalized state code of the link itself.
    pub state: String,
}

impl Relation {
    /// Create a relation, normalizing its state.
    #[must_use]
    pub fn new(supplier_code: SupplierCode, product_id: ProductId, state: &str) -> Self {
        Self {
            supplier_code,
            product_id,
            state: normalize(state),
        }
    }

    /// Replace the link state, normalizing it.
    pub fn set_state(&mut self, state: &str) {
        self.state = normalize(state);
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the catalog.
///
/// None of them is fatal: lookups fail without touching state, and I/O
/// failures are reported to the caller.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No supplier carries the requested name.
    #[error("Supplier \"{0}\" not found.")]
    SupplierNotFound(String),

    /// None of the supplier's relations points at a product with that name.
    #[error("Product \"{0}\" not found.")]
    ProductNotFound(String),

    /// An I/O error occurred while writing a backing file.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================
