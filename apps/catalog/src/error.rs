//! # Application Errors
//!
//! Failures the binary can hit on top of the catalog's own errors.

use catalog_core::CatalogError;
use thiserror::Error;

/// Errors returned by CLI commands and configuration loading.
#[derive(Debug, Error)]
pub enum AppError {
    /// A lookup or write inside the catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// One-shot arguments failed the menu's validation rules.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The configuration file could not be read or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_keep_their_message() {
        let err = AppError::from(CatalogError::SupplierNotFound("acme".to_string()));
        assert_eq!(err.to_string(), "Supplier \"acme\" not found.");
    }
}
