//! Redaction rule table
//!
//! Maps an entity type and the exact text it covers to a masked replacement.
//! Rules are pure and total; see [`MaskRule`] for the individual strategies.

pub mod rules;

use lazy_static::lazy_static;

pub use rules::{ADDRESS_TOKEN, BLOCK_GLYPH, MaskRule, RuleTable};

lazy_static! {
    static ref DEFAULT_RULES: RuleTable = RuleTable::new();
}

/// Mask `value` with the built-in rule for `entity_type`.
pub fn mask(entity_type: &str, value: &str) -> String {
    DEFAULT_RULES.mask(entity_type, value)
}
