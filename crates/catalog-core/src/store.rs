//! # Store
//!
//! In-memory home of every entity.
//!
//! - Suppliers keyed by code, products keyed by id. Both maps keep
//!   insertion order, which is the file order of first occurrences.
//! - Relations kept as an ordered sequence, duplicates included.
//!
//! The store exclusively owns all entities; relations refer to suppliers
//! and products by key only.

use crate::{Product, ProductId, Relation, Supplier, SupplierCode};
use indexmap::IndexMap;
use std::hash::Hash;

/// An entity that lives in a keyed, first-wins collection.
pub trait Keyed {
    /// The key type derived from the entity.
    type Key: Copy + Eq + Hash;

    /// Key under which the entity is stored.
    fn key(&self) -> Self::Key;
}

impl Keyed for Supplier {
    type Key = SupplierCode;

    fn key(&self) -> SupplierCode {
        self.code()
    }
}

impl Keyed for Product {
    type Key = ProductId;

    fn key(&self) -> ProductId {
        self.id
    }
}

/// Insertion-ordered keyed collection.
pub type KeyedMap<T> = IndexMap<<T as Keyed>::Key, T>;

/// Insert `value` unless its key is already present.
///
/// Returns `false` when the value was dropped as a duplicate.
pub fn insert_first_wins<T: Keyed>(map: &mut KeyedMap<T>, value: T) -> bool {
    let key = value.key();
    if map.contains_key(&key) {
        return false;
    }
    map.insert(key, value);
    true
}

/// The three catalog collections.
#[derive(Debug, Clone, Default)]
pub struct Store {
    suppliers: KeyedMap<Supplier>,
    products: KeyedMap<Product>,
    relations: Vec<Relation>,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a store from already loaded collections.
    #[must_use]
    pub fn from_parts(
        suppliers: KeyedMap<Supplier>,
        products: KeyedMap<Product>,
        relations: Vec<Relation>,
    ) -> Self {
        Self {
            suppliers,
            products,
            relations,
        }
    }

    /// Add a supplier (first-wins). Returns `false` on duplicate code.
    pub fn add_supplier(&mut self, supplier: Supplier) -> bool {
        insert_first_wins(&mut self.suppliers, supplier)
    }

    /// Add a product (first-wins). Returns `false` on duplicate id.
    pub fn add_product(&mut self, product: Product) -> bool {
        insert_first_wins(&mut self.products, product)
    }

    /// Append a relation. Duplicates are kept.
    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    /// Suppliers in insertion order.
    pub fn suppliers(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers.values()
    }

    /// Products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Relations in insertion order.
    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Look up a supplier by code.
    #[must_use]
    pub fn supplier(&self, code: SupplierCode) -> Option<&Supplier> {
        self.suppliers.get(&code)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Mutable access to a product and a relation at the same time.
    ///
    /// Returns `None` if either the index or the product is missing.
    pub fn product_and_relation_mut(
        &mut self,
        relation_index: usize,
    ) -> Option<(&mut Product, &mut Relation)> {
        let relation = self.relations.get_mut(relation_index)?;
        let product = self.products.get_mut(&relation.product_id)?;
        Some((product, relation))
    }

    /// Number of suppliers.
    #[must_use]
    pub fn supplier_count(&self) -> usize {
        self.suppliers.len()
    }

    /// Number of products.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Number of relations.
    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_supplier_wins() {
        let mut store = Store::new();
        assert!(store.add_supplier(Supplier::new(SupplierCode(1), "ACME", "A")));
        assert!(!store.add_supplier(Supplier::new(SupplierCode(1), "OTHER", "I")));

        assert_eq!(store.supplier_count(), 1);
        let supplier = store.supplier(SupplierCode(1)).expect("present");
        assert_eq!(supplier.name, "ACME");
    }

    #[test]
    fn keyed_iteration_follows_insertion_order() {
        let mut store = Store::new();
        store.add_product(Product::new(ProductId(30), "C", "A"));
        store.add_product(Product::new(ProductId(10), "A", "A"));
        store.add_product(Product::new(ProductId(20), "B", "A"));

        let ids: Vec<_> = store.products().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId(30), ProductId(10), ProductId(20)]);
    }

    #[test]
    fn relations_keep_duplicates() {
        let mut store = Store::new();
        store.add_relation(Relation::new(SupplierCode(1), ProductId(10), "A"));
        store.add_relation(Relation::new(SupplierCode(1), ProductId(10), "I"));

        assert_eq!(store.relation_count(), 2);
        assert_eq!(store.relations()[1].state, "I");
    }

    #[test]
    fn product_and_relation_mut_requires_existing_product() {
        let mut store = Store::new();
        store.add_relation(Relation::new(SupplierCode(1), ProductId(10), "A"));
        assert!(store.product_and_relation_mut(0).is_none());
        assert!(store.product_and_relation_mut(5).is_none());

        store.add_product(Product::new(ProductId(10), "WIDGET", "A"));
        let (product, relation) = store.product_and_relation_mut(0).expect("both");
        product.rename("gadget", "i");
        relation.set_state("i");

        assert_eq!(store.product(ProductId(10)).expect("product").name, "GADGET");
        assert_eq!(store.relations()[0].state, "I");
    }
}
