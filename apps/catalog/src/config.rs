//! # Configuration
//!
//! Where the backing files live.
//!
//! Resolution order, later wins:
//! 1. Built-in defaults (current directory, standard file names)
//! 2. A TOML file: `--config <PATH>`, or `catalog.toml` if present
//! 3. Command-line overrides
//!
//! ```toml
//! data_dir = "data"
//! suppliers_file = "Proveedor.txt"
//! products_file = "Productos.txt"
//! relations_file = "Prod_Proveedor.txt"
//! ```

use crate::error::AppError;
use catalog_core::CatalogPaths;
use catalog_core::primitives::{
    DEFAULT_PRODUCTS_FILE, DEFAULT_RELATIONS_FILE, DEFAULT_SUPPLIERS_FILE,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no `--config`
/// flag is given.
pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

/// Catalog file configuration.
///
/// Relative file names are resolved against `data_dir`; absolute ones are
/// used as they are.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the backing files.
    pub data_dir: PathBuf,
    /// Suppliers file name.
    pub suppliers_file: PathBuf,
    /// Products file name.
    pub products_file: PathBuf,
    /// Relations file name.
    pub relations_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            suppliers_file: PathBuf::from(DEFAULT_SUPPLIERS_FILE),
            products_file: PathBuf::from(DEFAULT_PRODUCTS_FILE),
            relations_file: PathBuf::from(DEFAULT_RELATIONS_FILE),
        }
    }
}

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub suppliers_file: Option<PathBuf>,
    pub products_file: Option<PathBuf>,
    pub relations_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Self::parse(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse '{}': {}", path.display(), e)))
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the explicit file, or the default file if it exists, or defaults.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, AppError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(dir) = overrides.data_dir {
            self.data_dir = dir;
        }
        if let Some(file) = overrides.suppliers_file {
            self.suppliers_file = file;
        }
        if let Some(file) = overrides.products_file {
            self.products_file = file;
        }
        if let Some(file) = overrides.relations_file {
            self.relations_file = file;
        }
        self
    }

    /// Resolve the three backing file paths.
    #[must_use]
    pub fn paths(&self) -> CatalogPaths {
        CatalogPaths {
            suppliers: self.data_dir.join(&self.suppliers_file),
            products: self.data_dir.join(&self.products_file),
            relations: self.data_dir.join(&self.relations_file),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
