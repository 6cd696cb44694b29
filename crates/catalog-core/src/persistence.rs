//! # Persistence Writer
//!
//! Serializes products and relations back to their backing files in the
//! same line format the loader reads.
//!
//! ## Format
//!
//! ```text
//! ID PRODUCTO ESTADO          PRV_COD PRO_COD ESTADO
//! 10 BLUE WIDGET A            1 10 A
//! ```
//!
//! Writes are full-file replacements (truncate + rewrite). There is no
//! atomic rename and no backup; a crash mid-write can leave a truncated file.

use crate::primitives::{PRODUCTS_HEADER, RELATIONS_HEADER};
use crate::{CatalogError, Product, Relation};
use std::path::Path;

// =============================================================================
// RENDERING (pure)
// =============================================================================

/// Render products as file text, header first.
pub fn render_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> String {
    let mut out = String::from(PRODUCTS_HEADER);
    out.push('\n');
    for product in products {
        out.push_str(&format!(
            "{} {} {}\n",
            product.id, product.name, product.state
        ));
    }
    out
}

/// Render relations as file text, header first.
pub fn render_relations<'a>(relations: impl IntoIterator<Item = &'a Relation>) -> String {
    let mut out = String::from(RELATIONS_HEADER);
    out.push('\n');
    for relation in relations {
        out.push_str(&format!(
            "{} {} {}\n",
            relation.supplier_code, relation.product_id, relation.state
        ));
    }
    out
}

// =============================================================================
// FILE I/O
// =============================================================================

fn write_text(path: &Path, text: &str) -> Result<(), CatalogError> {
    std::fs::write(path, text)
        .map_err(|e| CatalogError::Io(format!("Cannot write '{}': {}", path.display(), e)))
}

/// Overwrite the products file.
pub fn write_products<'a>(
    path: &Path,
    products: impl IntoIterator<Item = &'a Product>,
) -> Result<(), CatalogError> {
    write_text(path, &render_products(products))
}

/// Overwrite the relations file.
pub fn write_relations<'a>(
    path: &Path,
    relations: impl IntoIterator<Item = &'a Relation>,
) -> Result<(), CatalogError> {
    write_text(path, &render_relations(relations))
}

// =============================================================================
// TESTS
// =============================================================================
