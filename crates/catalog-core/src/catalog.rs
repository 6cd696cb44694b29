//! # Query/Mutation Engine
//!
//! The [`Catalog`] owns the [`Store`] and the paths of its backing files.
//!
//! Operations offered to the menu layer:
//! - [`Catalog::query`]: list the products a supplier carries
//! - [`Catalog::modify`]: rename a product and restate its supplier link
//!
//! Every lookup is a linear scan in insertion order; the first match wins.
//! A product is only searched for among the named supplier's own relations,
//! so a product that exists elsewhere in the catalog is still "not found".

use crate::loader::{LoadReport, load_keyed, load_sequence};
use crate::parser::{parse_product_line, parse_relation_line, parse_supplier_line};
use crate::persistence::{write_products, write_relations};
use crate::primitives::{
    DEFAULT_PRODUCTS_FILE, DEFAULT_RELATIONS_FILE, DEFAULT_SUPPLIERS_FILE, PRODUCTS_HEADER,
};
use crate::store::Store;
use crate::types::names_match;
use crate::{CatalogError, Product, ProductId, Supplier, SupplierCode};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// BACKING FILES
// =============================================================================

/// Locations of the three backing files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    /// Suppliers source (never rewritten).
    pub suppliers: PathBuf,
    /// Products source and target.
    pub products: PathBuf,
    /// Relations source and target.
    pub relations: PathBuf,
}

impl CatalogPaths {
    /// The default file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            suppliers: dir.join(DEFAULT_SUPPLIERS_FILE),
            products: dir.join(DEFAULT_PRODUCTS_FILE),
            relations: dir.join(DEFAULT_RELATIONS_FILE),
        }
    }
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

// =============================================================================
// REQUEST / RESULT TYPES
// =============================================================================

/// Inputs of a single modification.
///
/// The caller validates the values (non-empty names, state in `A`/`I`)
/// before handing the request over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyRequest {
    /// Current name of the product to change.
    pub product_name: String,
    /// Name to assign.
    pub new_name: String,
    /// State to assign to both the product and the link.
    pub new_state: String,
    /// Name of the supplier whose relations are searched.
    pub supplier_name: String,
}

/// The product after a successful modification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifiedProduct {
    /// Product as it is now stored.
    pub product: Product,
    /// Position of the updated relation in the relation list.
    pub relation_index: usize,
}

/// One row of a supplier report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductLine {
    /// Product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// State of the supplier link (not the product's own state).
    pub state: String,
}

/// Products carried by one supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierReport {
    /// The supplier.
    pub supplier: Supplier,
    /// Linked products in relation order.
    pub lines: Vec<ProductLine>,
}

impl SupplierReport {
    /// Number of product lines.
    #[must_use]
    pub fn total(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for SupplierReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Supplier: {}", self.supplier.name)?;
        writeln!(f, "State: {}", self.supplier.state)?;
        writeln!(f, "{}", PRODUCTS_HEADER)?;
        for line in &self.lines {
            writeln!(f, "{} {} {}", line.id, line.name, line.state)?;
        }
        writeln!(f)?;
        write!(f, "Total products: {}", self.total())
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// The catalog: store, backing files and the reports of the initial load.
#[derive(Debug, Clone)]
pub struct Catalog {
    store: Store,
    paths: CatalogPaths,
    load_reports: Vec<LoadReport>,
}

impl Catalog {
    /// Load all three backing files.
    ///
    /// Never fails: an unreadable file leaves its collection empty and is
    /// described in [`Catalog::load_reports`].
    #[must_use]
    pub fn open(paths: CatalogPaths) -> Self {
        let suppliers = load_keyed(&paths.suppliers, parse_supplier_line);
        let products = load_keyed(&paths.products, parse_product_line);
        let relations = load_sequence(&paths.relations, parse_relation_line);

        let load_reports = vec![suppliers.report, products.report, relations.report];
        let store = Store::from_parts(suppliers.data, products.data, relations.data);

        Self {
            store,
            paths,
            load_reports,
        }
    }

    /// Wrap an already populated store.
    #[must_use]
    pub fn with_store(store: Store, paths: CatalogPaths) -> Self {
        Self {
            store,
            paths,
            load_reports: Vec::new(),
        }
    }

    /// Read access to the store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The backing file locations.
    #[must_use]
    pub fn paths(&self) -> &CatalogPaths {
        &self.paths
    }

    /// Reports of the initial load (suppliers, products, relations).
    #[must_use]
    pub fn load_reports(&self) -> &[LoadReport] {
        &self.load_reports
    }

    /// Code of the first supplier whose name matches, ignoring case.
    #[must_use]
    pub fn find_supplier(&self, name: &str) -> Option<SupplierCode> {
        self.store
            .suppliers()
            .find(|supplier| names_match(&supplier.name, name))
            .map(Supplier::code)
    }

    fn resolve_supplier(&self, name: &str) -> Result<&Supplier, CatalogError> {
        self.find_supplier(name)
            .and_then(|code| self.store.supplier(code))
            .ok_or_else(|| CatalogError::SupplierNotFound(name.to_string()))
    }

    /// List the products linked to the named supplier.
    ///
    /// Relations pointing at unknown products are skipped.
    pub fn query(&self, supplier_name: &str) -> Result<SupplierReport, CatalogError> {
        let supplier = self.resolve_supplier(supplier_name)?;
        let code = supplier.code();

        let lines = self
            .store
            .relations()
            .iter()
            .filter(|relation| relation.supplier_code == code)
            .filter_map(|relation| {
                self.store.product(relation.product_id).map(|product| ProductLine {
                    id: product.id,
                    name: product.name.clone(),
                    state: relation.state.clone(),
                })
            })
            .collect();

        Ok(SupplierReport {
            supplier: supplier.clone(),
            lines,
        })
    }

    /// Rename a product carried by the named supplier and restate the link.
    ///
    /// Only the first matching relation is touched. On success both the
    /// products and the relations file are rewritten. On any not-found
    /// outcome nothing changes and nothing is written. If a write fails the
    /// in-memory change is undone before the error is returned.
    pub fn modify(&mut self, request: &ModifyRequest) -> Result<ModifiedProduct, CatalogError> {
        let code = self.resolve_supplier(&request.supplier_name)?.code();

        let relation_index = self
            .store
            .relations()
            .iter()
            .position(|relation| {
                relation.supplier_code == code
                    && self
                        .store
                        .product(relation.product_id)
                        .is_some_and(|product| names_match(&product.name, &request.product_name))
            })
            .ok_or_else(|| CatalogError::ProductNotFound(request.product_name.clone()))?;

        let (product, relation) = self
            .store
            .product_and_relation_mut(relation_index)
            .ok_or_else(|| CatalogError::ProductNotFound(request.product_name.clone()))?;
        let previous_product = product.clone();
        let previous_state = relation.state.clone();
        product.rename(&request.new_name, &request.new_state);
        relation.set_state(&request.new_state);
        let product = product.clone();

        if let Err(e) = self.save() {
            self.restore(relation_index, previous_product, previous_state);
            return Err(e);
        }

        Ok(ModifiedProduct {
            product,
            relation_index,
        })
    }

    /// Put back the product and link state a failed [`Catalog::modify`]
    /// changed. Files already rewritten before the failure are left as is.
    fn restore(&mut self, relation_index: usize, product: Product, state: String) {
        if let Some((current, relation)) = self.store.product_and_relation_mut(relation_index) {
            *current = product;
            relation.state = state;
        }
    }

    /// Rewrite the products and relations files from the store.
    pub fn save(&self) -> Result<(), CatalogError> {
        write_products(&self.paths.products, self.store.products())?;
        write_relations(&self.paths.relations, self.store.relations())
    }
}

// =============================================================================
// TESTS
// =============================================================================
