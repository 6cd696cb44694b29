//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::config::Config;
use crate::error::AppError;
use crate::menu::Menu;
use catalog_core::{
    Catalog, LoadStatus, ModifyRequest, is_selectable_state, normalize,
};

// =============================================================================
// CATALOG LOADING
// =============================================================================

/// Load the catalog described by `config` and log every load report.
///
/// Unavailable files are also announced on stdout unless `json_mode` is
/// set, so the operator sees them before the menu starts.
pub fn open_catalog(config: &Config, json_mode: bool) -> Catalog {
    let paths = config.paths();
    tracing::debug!(
        suppliers = %paths.suppliers.display(),
        products = %paths.products.display(),
        relations = %paths.relations.display(),
        "Loading catalog"
    );

    let catalog = Catalog::open(paths);
    for report in catalog.load_reports() {
        match &report.status {
            LoadStatus::Loaded {
                records,
                skipped,
                duplicates,
            } => {
                tracing::info!(
                    file = %report.path.display(),
                    records,
                    "Loaded backing file"
                );
                if *skipped > 0 || *duplicates > 0 {
                    tracing::warn!(
                        file = %report.path.display(),
                        skipped,
                        duplicates,
                        "Backing file had lines that were not loaded"
                    );
                }
            }
            LoadStatus::Unavailable { reason, .. } => {
                tracing::warn!(file = %report.path.display(), %reason, "Backing file unavailable");
                if !json_mode {
                    println!("{}", report);
                }
            }
        }
    }
    catalog
}

// =============================================================================
// MENU COMMAND
// =============================================================================

/// Run the interactive menu on stdin/stdout.
pub fn cmd_menu(config: &Config) -> Result<(), AppError> {
    let mut catalog = open_catalog(config, false);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    Menu::new(&mut catalog, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

// =============================================================================
// QUERY COMMAND
// =============================================================================

/// List the products of one supplier.
pub fn cmd_query(config: &Config, json_mode: bool, supplier: &str) -> Result<(), AppError> {
    let catalog = open_catalog(config, json_mode);
    let report = catalog.query(supplier)?;

    if json_mode {
        let output = serde_json::json!({
            "total": report.total(),
            "supplier": &report.supplier,
            "products": &report.lines,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{}", report);
    Ok(())
}

// =============================================================================
// MODIFY COMMAND
// =============================================================================

/// Apply the menu's validation rules to one-shot modify arguments.
///
/// Returns the trimmed product name, trimmed new name and normalized state.
pub fn validate_modify_args(
    product: &str,
    new_name: &str,
    state: &str,
) -> Result<(String, String, String), AppError> {
    let product = product.trim();
    if product.is_empty() {
        return Err(AppError::InvalidInput(
            "product name cannot be empty".to_string(),
        ));
    }

    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(AppError::InvalidInput(
            "new product name cannot be empty".to_string(),
        ));
    }

    let state = normalize(state);
    if !is_selectable_state(&state) {
        return Err(AppError::InvalidInput(format!(
            "state must be \"A\" or \"I\", got \"{}\"",
            state
        )));
    }

    Ok((product.to_string(), new_name.to_string(), state))
}

/// Rename a product and restate its supplier link.
pub fn cmd_modify(
    config: &Config,
    json_mode: bool,
    supplier: &str,
    product: &str,
    new_name: &str,
    state: &str,
) -> Result<(), AppError> {
    let (product_name, new_name, new_state) = validate_modify_args(product, new_name, state)?;
    let mut catalog = open_catalog(config, json_mode);

    let request = ModifyRequest {
        product_name,
        new_name,
        new_state,
        supplier_name: supplier.to_string(),
    };
    let modified = catalog.modify(&request)?;
    tracing::info!(
        product = %modified.product.id,
        relation = modified.relation_index,
        "Product modified"
    );

    if json_mode {
        let output = serde_json::json!({
            "product": modified.product,
            "relation_index": modified.relation_index,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!(
        "Product \"{}\" modified successfully.",
        request.product_name
    );
    Ok(())
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show what was loaded from each backing file.
pub fn cmd_status(config: &Config, json_mode: bool) -> Result<(), AppError> {
    let catalog = open_catalog(config, true);
    let store = catalog.store();

    if json_mode {
        let files: Vec<_> = catalog
            .load_reports()
            .iter()
            .map(|report| match &report.status {
                LoadStatus::Loaded {
                    records,
                    skipped,
                    duplicates,
                } => serde_json::json!({
                    "path": report.path.to_string_lossy(),
                    "available": true,
                    "records": records,
                    "skipped": skipped,
                    "duplicates": duplicates,
                }),
                LoadStatus::Unavailable { reason, .. } => serde_json::json!({
                    "path": report.path.to_string_lossy(),
                    "available": false,
                    "reason": reason,
                }),
            })
            .collect();

        let output = serde_json::json!({
            "suppliers": store.supplier_count(),
            "products": store.product_count(),
            "relations": store.relation_count(),
            "files": files,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Catalog Status");
    println!("==============");
    println!("Suppliers: {}", store.supplier_count());
    println!("Products:  {}", store.product_count());
    println!("Relations: {}", store.relation_count());
    println!();
    for report in catalog.load_reports() {
        println!("  {}", report);
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
