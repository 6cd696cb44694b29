//! Integration tests driving the interactive menu against real files.

use catalog::menu::Menu;
use catalog_core::{Catalog, CatalogPaths, ProductId};
use std::io::Cursor;
use tempfile::TempDir;

// =============================================================================
// HELPERS
// =============================================================================

fn seeded() -> (TempDir, CatalogPaths) {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = CatalogPaths::in_dir(dir.path());
    std::fs::write(&paths.suppliers, "COD NOMBRE ESTADO\n1 ACME A\n2 GLOBEX I\n")
        .expect("suppliers");
    std::fs::write(&paths.products, "ID PRODUCTO ESTADO\n10 WIDGET A\n20 BOLT A\n")
        .expect("products");
    std::fs::write(&paths.relations, "PRV_COD PRO_COD ESTADO\n1 10 A\n2 20 A\n")
        .expect("relations");
    (dir, paths)
}

fn run(catalog: &mut Catalog, script: &str) -> String {
    let mut output = Vec::new();
    Menu::new(catalog, Cursor::new(script.to_string()), &mut output)
        .run()
        .expect("menu run");
    String::from_utf8(output).expect("utf8 output")
}

// =============================================================================
// QUERY
// =============================================================================

#[test]
fn test_query_prints_report() {
    let (_dir, paths) = seeded();
    let mut catalog = Catalog::open(paths);

    let out = run(&mut catalog, "2\nAcme\n3\n");
    assert!(out.contains("Supplier: ACME\nState: A\nID PRODUCTO ESTADO\n10 WIDGET A\n\nTotal products: 1\n"));
}

// =============================================================================
// MODIFY
// =============================================================================

#[test]
fn test_modify_then_query() {
    let (_dir, paths) = seeded();
    let mut catalog = Catalog::open(paths.clone());

    let out = run(&mut catalog, "1\nacme\nwidget\ngadget\ni\n2\nacme\n3\n");
    assert!(out.contains("Product \"widget\" modified successfully."));
    assert!(out.contains("10 GADGET I\n"));

    assert_eq!(
        std::fs::read_to_string(&paths.products).expect("read"),
        "ID PRODUCTO ESTADO\n10 GADGET I\n20 BOLT A\n"
    );
    assert_eq!(
        std::fs::read_to_string(&paths.relations).expect("read"),
        "PRV_COD PRO_COD ESTADO\n1 10 I\n2 20 A\n"
    );
}

#[test]
fn test_modify_validation_restarts_prompts() {
    let (_dir, paths) = seeded();
    let mut catalog = Catalog::open(paths);

    // Empty product name, then empty new name, then a bad state, then valid.
    let script = "1\nacme\n\nwidget\n  \nwidget\ngadget\nx\nwidget\ngadget\na\n3\n";
    let out = run(&mut catalog, script);

    assert!(out.contains("Product name cannot be empty."));
    assert!(out.contains("New product name cannot be empty."));
    assert!(out.contains("Invalid state. Enter \"A\" for active or \"I\" for inactive."));
    assert!(out.contains("modified successfully"));
    assert_eq!(
        catalog.store().product(ProductId(10)).expect("product").name,
        "GADGET"
    );
}

#[test]
fn test_modify_unknown_supplier() {
    let (_dir, paths) = seeded();
    let mut catalog = Catalog::open(paths.clone());

    let out = run(&mut catalog, "1\ninitech\nwidget\ngadget\nA\n3\n");
    assert!(out.contains("Supplier \"initech\" not found."));
    assert_eq!(
        std::fs::read_to_string(&paths.products).expect("read"),
        "ID PRODUCTO ESTADO\n10 WIDGET A\n20 BOLT A\n"
    );
}

#[test]
fn test_modify_product_of_other_supplier() {
    let (_dir, paths) = seeded();
    let mut catalog = Catalog::open(paths);

    let out = run(&mut catalog, "1\nacme\nbolt\nnut\nA\n3\n");
    assert!(out.contains("Product \"bolt\" not found."));
    assert_eq!(
        catalog.store().product(ProductId(20)).expect("bolt").name,
        "BOLT"
    );
}

#[test]
fn test_input_ends_mid_modify() {
    let (_dir, paths) = seeded();
    let mut catalog = Catalog::open(paths);

    let out = run(&mut catalog, "1\nacme\nwidget\n");
    assert!(out.ends_with("Goodbye!\n"));
    assert_eq!(
        catalog.store().product(ProductId(10)).expect("widget").name,
        "WIDGET"
    );
}

#[test]
fn test_failed_write_is_not_kept_in_memory() {
    let (dir, paths) = seeded();
    let mut catalog = Catalog::open(paths);
    std::fs::remove_dir_all(dir.path()).expect("remove data dir");

    let out = run(&mut catalog, "1\nacme\nwidget\ngadget\ni\n2\nacme\n3\n");
    assert!(out.contains("I/O error: Cannot write"));
    assert!(!out.contains("modified successfully"));
    assert!(out.contains("10 WIDGET A\n"));
    assert!(!out.contains("GADGET"));
}

// =============================================================================
// MISSING FILES
// =============================================================================

#[test]
fn test_menu_runs_without_backing_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut catalog = Catalog::open(CatalogPaths::in_dir(dir.path()));
    assert_eq!(catalog.load_reports().len(), 3);
    assert!(catalog.load_reports().iter().all(|r| r.is_unavailable()));

    let out = run(&mut catalog, "2\nacme\n3\n");
    assert!(out.contains("Supplier \"acme\" not found."));
}
