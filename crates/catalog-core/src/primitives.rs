//! # File Format Primitives
//!
//! Fixed constants of the plain-text backing files.
//!
//! Every backing file starts with one header line. The header is always
//! discarded on read and always rewritten verbatim on write.

/// Header line written at the top of the products file.
pub const PRODUCTS_HEADER: &str = "ID PRODUCTO ESTADO";

/// Header line written at the top of the relations file.
pub const RELATIONS_HEADER: &str = "PRV_COD PRO_COD ESTADO";

/// Default file name of the suppliers source (read-only).
pub const DEFAULT_SUPPLIERS_FILE: &str = "Proveedor.txt";

/// Default file name of the products source/target.
pub const DEFAULT_PRODUCTS_FILE: &str = "Productos.txt";

/// Default file name of the relations source/target.
pub const DEFAULT_RELATIONS_FILE: &str = "Prod_Proveedor.txt";

/// Minimum token count of a supplier or product line: code, name, state.
pub const MIN_ENTITY_TOKENS: usize = 3;

/// Exact token count of a relation line.
pub const RELATION_TOKENS: usize = 3;

/// State code of an active product or relation.
pub const STATE_ACTIVE: &str = "A";

/// State code of an inactive product or relation.
pub const STATE_INACTIVE: &str = "I";

/// State codes an operator may assign through a modification.
///
/// The parser accepts any token as a state; only mutations are restricted,
/// and the restriction is enforced by the caller.
pub const SELECTABLE_STATES: [&str; 2] = [STATE_ACTIVE, STATE_INACTIVE];

/// Check whether `state` (already trimmed and upper-cased) may be assigned.
#[must_use]
pub fn is_selectable_state(state: &str) -> bool {
    SELECTABLE_STATES.contains(&state)
}
