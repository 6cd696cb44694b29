//! # Catalog - Supplier/Product Manager
//!
//! The main binary for the plain-text supplier/product catalog.
//!
//! This application provides:
//! - Interactive menu (modify product, query products, exit)
//! - One-shot CLI commands for scripting
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            apps/catalog (THE BINARY)         │
//! │                                              │
//! │   ┌─────────────┐        ┌──────────────┐    │
//! │   │    CLI      │        │     Menu     │    │
//! │   │   (clap)    │        │ (stdin/out)  │    │
//! │   └──────┬──────┘        └──────┬───────┘    │
//! │          └───────────┬──────────┘            │
//! │                      ▼                       │
//! │             ┌────────────────┐               │
//! │             │  catalog-core  │               │
//! │             │  (THE LOGIC)   │               │
//! │             └────────────────┘               │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive menu over ./Proveedor.txt, ./Productos.txt, ./Prod_Proveedor.txt
//! catalog
//!
//! # One-shot operations
//! catalog --data-dir data query --supplier acme
//! catalog modify -s acme -p widget -n gadget -t I
//! ```

use catalog::cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout belongs to the menu and command output.
    // CATALOG_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("CATALOG_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "catalog=debug"
    } else {
        "catalog=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  Catalog v{}
  Suppliers • Products • Relations
"#,
        env!("CARGO_PKG_VERSION")
    );
}
