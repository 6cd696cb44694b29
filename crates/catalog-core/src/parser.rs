//! # Record Parser
//!
//! Turns one raw line of a backing file into a typed entity.
//!
//! Parsing is total-or-nothing: a line either yields a complete record or
//! `None`. Malformed lines are never partially applied.
//!
//! ## Line shapes
//!
//! - Supplier / product: `<code> <name tokens...> <state>`, at least three
//!   whitespace tokens, first token all ASCII digits. Names may span
//!   several tokens and are re-joined with single spaces.
//! - Relation: `<supplier_code> <product_code> <state>`, exactly three
//!   tokens, first two all ASCII digits.

use crate::primitives::{MIN_ENTITY_TOKENS, RELATION_TOKENS};
use crate::{Product, ProductId, Relation, Supplier, SupplierCode};

/// Parse a numeric key column.
///
/// Only plain ASCII digits are accepted (no sign, no separators). A value
/// that does not fit in `u64` is treated as malformed.
fn parse_code(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Split a `<code> <name...> <state>` line into its three parts.
fn split_entity_line(line: &str) -> Option<(u64, String, &str)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_ENTITY_TOKENS {
        return None;
    }

    let code = parse_code(tokens[0])?;
    let (state, middle) = tokens[1..].split_last()?;
    Some((code, middle.join(" "), *state))
}

/// Parse one line of the suppliers file.
#[must_use]
pub fn parse_supplier_line(line: &str) -> Option<Supplier> {
    let (code, name, state) = split_entity_line(line)?;
    Some(Supplier::new(SupplierCode(code), &name, state))
}

/// Parse one line of the products file.
#[must_use]
pub fn parse_product_line(line: &str) -> Option<Product> {
    let (id, name, state) = split_entity_line(line)?;
    Some(Product::new(ProductId(id), &name, state))
}

/// Parse one line of the relations file.
///
/// Unlike the entity parsers this requires exactly three tokens.
#[must_use]
pub fn parse_relation_line(line: &str) -> Option<Relation> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != RELATION_TOKENS {
        return None;
    }

    let supplier_code = parse_code(tokens[0])?;
    let product_id = parse_code(tokens[1])?;
    Some(Relation::new(
        SupplierCode(supplier_code),
        ProductId(product_id),
        tokens[2],
    ))
}

// =============================================================================
// TESTS
// =============================================================================
