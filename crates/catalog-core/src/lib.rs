//! # catalog-core
//!
//! The in-memory data layer of the supplier/product catalog - THE LOGIC.
//!
//! Suppliers, products and the links between them live in three flat,
//! whitespace-delimited text files. This crate loads them into typed
//! entities, answers name-based queries, applies product modifications and
//! writes the changed files back.
//!
//! ## Components
//!
//! - `parser`: one raw line to one typed record, or nothing
//! - `store`: insertion-ordered maps plus the relation list
//! - `loader`: header skipping, first-wins or append loading, load reports
//! - `catalog`: supplier lookup, product query, product modification
//! - `persistence`: full-file rewrite of products and relations
//!
//! ## Architectural Constraints
//!
//! - Synchronous and single-owner; `modify` takes `&mut self`
//! - No terminal I/O and no logging: conditions come back as
//!   [`LoadReport`]s or [`CatalogError`]s and the app decides what to print

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod loader;
pub mod parser;
pub mod persistence;
pub mod primitives;
pub mod store;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{CatalogError, Product, ProductId, Relation, Supplier, SupplierCode, normalize};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use catalog::{
    Catalog, CatalogPaths, ModifiedProduct, ModifyRequest, ProductLine, SupplierReport,
};
pub use loader::{LoadReport, LoadStatus, Loaded, load_keyed, load_sequence};
pub use primitives::is_selectable_state;
pub use store::{Keyed, Store};
