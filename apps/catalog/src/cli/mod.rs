//! # Catalog CLI Module
//!
//! This module implements the CLI interface for the catalog.
//!
//! ## Available Commands
//!
//! - `menu` - Interactive menu (default)
//! - `query` - List the products of one supplier
//! - `modify` - Rename a product and restate its supplier link
//! - `status` - Show what was loaded from the backing files

mod commands;

use crate::config::{Config, Overrides};
use crate::error::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Catalog - supplier/product manager
///
/// Queries and updates a catalog kept in three plain-text files.
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file (default: ./catalog.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the backing files
    #[arg(short = 'd', long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Suppliers file (relative to the data directory)
    #[arg(long, global = true)]
    pub suppliers: Option<PathBuf>,

    /// Products file (relative to the data directory)
    #[arg(long, global = true)]
    pub products: Option<PathBuf>,

    /// Relations file (relative to the data directory)
    #[arg(long, global = true)]
    pub relations: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu
    Menu,

    /// List the products linked to a supplier
    Query {
        /// Supplier name (case-insensitive)
        #[arg(short, long)]
        supplier: String,
    },

    /// Rename a product and set its state
    Modify {
        /// Supplier name (case-insensitive)
        #[arg(short, long)]
        supplier: String,

        /// Current product name (case-insensitive)
        #[arg(short, long)]
        product: String,

        /// New product name
        #[arg(short, long)]
        new_name: String,

        /// New state: A (active) or I (inactive)
        #[arg(short = 't', long)]
        state: String,
    },

    /// Show load results for the backing files
    Status,
}

impl Cli {
    /// Resolve configuration: file (explicit or discovered), then flags.
    pub fn resolve_config(&self) -> Result<Config, AppError> {
        let config = Config::discover(self.config.as_deref())?;
        Ok(config.with_overrides(Overrides {
            data_dir: self.data_dir.clone(),
            suppliers_file: self.suppliers.clone(),
            products_file: self.products.clone(),
            relations_file: self.relations.clone(),
        }))
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), AppError> {
    let config = cli.resolve_config()?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Query { supplier }) => cmd_query(&config, json_mode, &supplier),
        Some(Commands::Modify {
            supplier,
            product,
            new_name,
            state,
        }) => cmd_modify(&config, json_mode, &supplier, &product, &new_name, &state),
        Some(Commands::Status) => cmd_status(&config, json_mode),
        Some(Commands::Menu) | None => cmd_menu(&config),
    }
}

// =============================================================================
// TESTS
// =============================================================================
