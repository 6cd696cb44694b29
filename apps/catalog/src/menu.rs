//! # Interactive Menu
//!
//! The operator-facing loop: modify a product, query a supplier, exit.
//!
//! The menu collects and validates raw input (non-empty names, state in
//! `A`/`I`) before calling the catalog. Lookup failures are printed and the
//! loop continues. End of input ends the session like option 3.

use catalog_core::{Catalog, CatalogError, ModifyRequest, is_selectable_state};
use std::io::{BufRead, Write};

/// A menu session over any line-oriented input and any output.
pub struct Menu<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    output: W,
}

/// What one menu selection led to.
enum Step {
    Continue,
    Exit,
}

fn io_error(e: std::io::Error) -> CatalogError {
    CatalogError::Io(e.to_string())
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu bound to a catalog.
    pub fn new(catalog: &'a mut Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Run until the operator exits or input ends.
    pub fn run(&mut self) -> Result<(), CatalogError> {
        self.say("Welcome to the Product Manager")?;
        self.say("You can modify or query the products linked to each supplier.")?;

        loop {
            self.say("")?;
            self.say("__ Options Menu __")?;
            self.say("1. Modify product")?;
            self.say("2. Query products")?;
            self.say("3. Exit")?;

            let step = match self.prompt("Select an option: ")? {
                None => Step::Exit,
                Some(choice) => match choice.as_str() {
                    "1" => self.modify_product()?,
                    "2" => self.query_products()?,
                    "3" => Step::Exit,
                    _ => {
                        self.say("Invalid option. Try again.")?;
                        Step::Continue
                    }
                },
            };

            if let Step::Exit = step {
                self.say("Leaving the product manager. Goodbye!")?;
                return Ok(());
            }
        }
    }

    fn say(&mut self, text: &str) -> Result<(), CatalogError> {
        writeln!(self.output, "{}", text).map_err(io_error)
    }

    /// Print `label` and read one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, CatalogError> {
        write!(self.output, "{}", label).map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    /// Collect product name, new name and new state until all three are
    /// valid. An invalid answer restarts from the product name.
    fn collect_changes(&mut self) -> Result<Option<(String, String, String)>, CatalogError> {
        loop {
            let Some(product) = self.prompt("Enter the name of the product to modify: ")? else {
                return Ok(None);
            };
            let product = product.trim().to_string();
            if product.is_empty() {
                self.say("Product name cannot be empty.")?;
                continue;
            }

            let Some(new_name) = self.prompt("Enter the new product name: ")? else {
                return Ok(None);
            };
            let new_name = new_name.trim().to_string();
            if new_name.is_empty() {
                self.say("New product name cannot be empty.")?;
                continue;
            }

            let Some(state) = self.prompt("Select the new product state (A/I): ")? else {
                return Ok(None);
            };
            let state = state.trim().to_uppercase();
            if !is_selectable_state(&state) {
                self.say("Invalid state. Enter \"A\" for active or \"I\" for inactive.")?;
                continue;
            }

            return Ok(Some((product, new_name, state)));
        }
    }

    fn modify_product(&mut self) -> Result<Step, CatalogError> {
        let Some(supplier_name) = self.prompt("Enter the supplier name: ")? else {
            return Ok(Step::Exit);
        };
        let Some((product_name, new_name, new_state)) = self.collect_changes()? else {
            return Ok(Step::Exit);
        };

        let request = ModifyRequest {
            product_name,
            new_name,
            new_state,
            supplier_name,
        };
        match self.catalog.modify(&request) {
            Ok(modified) => {
                tracing::info!(
                    product = %modified.product.id,
                    relation = modified.relation_index,
                    "Product modified"
                );
                self.say(&format!(
                    "Product \"{}\" modified successfully.",
                    request.product_name
                ))?;
            }
            Err(e @ (CatalogError::SupplierNotFound(_) | CatalogError::ProductNotFound(_))) => {
                tracing::debug!("Modify rejected: {}", e);
                self.say(&e.to_string())?;
            }
            Err(e) => {
                tracing::error!("Modify failed: {}", e);
                self.say(&e.to_string())?;
            }
        }
        Ok(Step::Continue)
    }

    fn query_products(&mut self) -> Result<Step, CatalogError> {
        let Some(supplier_name) = self.prompt("Enter the supplier name: ")? else {
            return Ok(Step::Exit);
        };

        match self.catalog.query(&supplier_name) {
            Ok(report) => self.say(&report.to_string())?,
            Err(e) => {
                tracing::debug!("Query rejected: {}", e);
                self.say(&e.to_string())?;
            }
        }
        Ok(Step::Continue)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::CatalogPaths;
    use std::io::Cursor;

    fn run_script(catalog: &mut Catalog, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(catalog, Cursor::new(script.to_string()), &mut output)
            .run()
            .expect("menu");
        String::from_utf8(output).expect("utf8")
    }

    #[test]
    fn exit_immediately() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut catalog = Catalog::open(CatalogPaths::in_dir(dir.path()));

        let out = run_script(&mut catalog, "3\n");
        assert!(out.starts_with("Welcome to the Product Manager\n"));
        assert!(out.ends_with("Leaving the product manager. Goodbye!\n"));
    }

    #[test]
    fn end_of_input_exits() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut catalog = Catalog::open(CatalogPaths::in_dir(dir.path()));

        let out = run_script(&mut catalog, "");
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn invalid_option_loops() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut catalog = Catalog::open(CatalogPaths::in_dir(dir.path()));

        let out = run_script(&mut catalog, "9\n3\n");
        assert!(out.contains("Invalid option. Try again."));
        assert_eq!(out.matches("__ Options Menu __").count(), 2);
    }

    #[test]
    fn query_unknown_supplier() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut catalog = Catalog::open(CatalogPaths::in_dir(dir.path()));

        let out = run_script(&mut catalog, "2\nacme\n3\n");
        assert!(out.contains("Supplier \"acme\" not found."));
    }
}
