//! Per-entity redaction rules

use std::collections::HashMap;

use piimask_core::entity;

/// Glyph used by the fallback rule, one per masked char.
pub const BLOCK_GLYPH: char = '█';

/// Replacement used for locations.
pub const ADDRESS_TOKEN: &str = "[ADDRESS]";

/// How one entity type is masked.
///
/// Every rule is total: any input, including the empty string, produces a
/// defined output. Lengths are counted in chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskRule {
    /// ASCII digits become `X`, except within the trailing `keep` chars.
    DigitsExceptTail { keep: usize },
    /// ASCII letters among the first `count` chars become `X`.
    LettersInHead { count: usize },
    /// Keep `prefix` and `suffix` chars, fill the middle with `fill`.
    /// Values shorter than `prefix + suffix` are filled entirely.
    KeepEnds {
        prefix: usize,
        suffix: usize,
        fill: char,
    },
    /// First char of the local part kept, the rest of it becomes `X`;
    /// everything after the first `@` is kept.
    Email,
    /// The whole value is replaced by a fixed token.
    Replace(&'static str),
    /// Every char becomes [`BLOCK_GLYPH`].
    Block,
}

impl MaskRule {
    pub fn apply(&self, value: &str) -> String {
        match self {
            MaskRule::DigitsExceptTail { keep } => digits_except_tail(value, *keep),
            MaskRule::LettersInHead { count } => letters_in_head(value, *count),
            MaskRule::KeepEnds {
                prefix,
                suffix,
                fill,
            } => keep_ends(value, *prefix, *suffix, *fill),
            MaskRule::Email => mask_email(value),
            MaskRule::Replace(token) => (*token).to_string(),
            MaskRule::Block => fill(BLOCK_GLYPH, value.chars().count()),
        }
    }

    /// True when the output always has as many chars as the input.
    pub fn preserves_length(&self) -> bool {
        !matches!(self, MaskRule::Replace(_))
    }
}

/// Lookup from entity type to [`MaskRule`], falling back to [`MaskRule::Block`].
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: HashMap<String, MaskRule>,
}

impl RuleTable {
    /// Table with the built-in rules for the supported entity types.
    pub fn new() -> Self {
        let mut rules = HashMap::new();

        rules.insert(
            entity::AADHAAR_NUMBER.to_string(),
            MaskRule::DigitsExceptTail { keep: 4 },
        );
        rules.insert(
            entity::PAN_NUMBER.to_string(),
            MaskRule::LettersInHead { count: 5 },
        );
        rules.insert(
            entity::PHONE_NUMBER.to_string(),
            MaskRule::KeepEnds {
                prefix: 2,
                suffix: 2,
                fill: '*',
            },
        );
        rules.insert(
            entity::CREDIT_CARD.to_string(),
            MaskRule::DigitsExceptTail { keep: 4 },
        );
        rules.insert(
            entity::IBAN_CODE.to_string(),
            MaskRule::KeepEnds {
                prefix: 4,
                suffix: 4,
                fill: 'X',
            },
        );
        rules.insert(
            entity::VOTER_ID.to_string(),
            MaskRule::KeepEnds {
                prefix: 3,
                suffix: 3,
                fill: 'X',
            },
        );
        rules.insert(entity::EMAIL_ADDRESS.to_string(), MaskRule::Email);
        rules.insert(
            entity::LOCATION.to_string(),
            MaskRule::Replace(ADDRESS_TOKEN),
        );

        Self { rules }
    }

    /// Override or add the rule for an entity type.
    pub fn with_rule(mut self, entity_type: impl Into<String>, rule: MaskRule) -> Self {
        self.rules.insert(entity_type.into(), rule);
        self
    }

    pub fn rule_for(&self, entity_type: &str) -> &MaskRule {
        self.rules.get(entity_type).unwrap_or(&MaskRule::Block)
    }

    /// Mask `value`, the exact text covered by a span of `entity_type`.
    pub fn mask(&self, entity_type: &str, value: &str) -> String {
        self.rule_for(entity_type).apply(value)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

fn fill(glyph: char, count: usize) -> String {
    std::iter::repeat_n(glyph, count).collect()
}

fn digits_except_tail(value: &str, keep: usize) -> String {
    let len = value.chars().count();
    let cut = len.saturating_sub(keep);

    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < cut && c.is_ascii_digit() { 'X' } else { c })
        .collect()
}

fn letters_in_head(value: &str, count: usize) -> String {
    value
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i < count && c.is_ascii_alphabetic() {
                'X'
            } else {
                c
            }
        })
        .collect()
}

fn keep_ends(value: &str, prefix: usize, suffix: usize, glyph: char) -> String {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();

    if len < prefix + suffix {
        return fill(glyph, len);
    }

    let mut out = String::with_capacity(value.len());
    out.extend(&chars[..prefix]);
    out.push_str(&fill(glyph, len - prefix - suffix));
    out.extend(&chars[len - suffix..]);
    out
}

fn mask_email(value: &str) -> String {
    let (local, domain) = match value.split_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (value, None),
    };

    let mut out: String = local
        .chars()
        .enumerate()
        .map(|(i, c)| if i == 0 { c } else { 'X' })
        .collect();

    if let Some(domain) = domain {
        out.push('@');
        out.push_str(domain);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(entity_type: &str, value: &str) -> String {
        RuleTable::new().mask(entity_type, value)
    }

    #[test]
    fn test_aadhaar_keeps_last_four() {
        assert_eq!(mask(entity::AADHAAR_NUMBER, "2345 6789 1234"), "XXXX XXXX 1234");
        assert_eq!(mask(entity::AADHAAR_NUMBER, "234567891234"), "XXXXXXXX1234");
    }

    #[test]
    fn test_aadhaar_short_values_unchanged() {
        assert_eq!(mask(entity::AADHAAR_NUMBER, "123"), "123");
        assert_eq!(mask(entity::AADHAAR_NUMBER, ""), "");
    }

    #[test]
    fn test_credit_card_matches_aadhaar_pattern() {
        assert_eq!(
            mask(entity::CREDIT_CARD, "4111-1111-1111-1234"),
            "XXXX-XXXX-XXXX-1234"
        );
    }

    #[test]
    fn test_pan_masks_leading_letters() {
        assert_eq!(mask(entity::PAN_NUMBER, "ABCDE1234F"), "XXXXX1234F");
        assert_eq!(mask(entity::PAN_NUMBER, "AB"), "XX");
    }

    #[test]
    fn test_phone_keeps_ends() {
        assert_eq!(mask(entity::PHONE_NUMBER, "9876543210"), "98******10");
        assert_eq!(mask(entity::PHONE_NUMBER, "1234"), "1234");
    }

    #[test]
    fn test_short_values_fully_masked() {
        assert_eq!(mask(entity::PHONE_NUMBER, "987"), "***");
        assert_eq!(mask(entity::IBAN_CODE, "GB82WEST"), "GB82WEST");
        assert_eq!(mask(entity::IBAN_CODE, "GB82WES"), "XXXXXXX");
        assert_eq!(mask(entity::VOTER_ID, "ZYX12"), "XXXXX");
        assert_eq!(mask(entity::PHONE_NUMBER, ""), "");
    }

    #[test]
    fn test_iban_and_voter() {
        assert_eq!(
            mask(entity::IBAN_CODE, "GB82WEST12345698765432"),
            "GB82XXXXXXXXXXXXXX5432"
        );
        assert_eq!(mask(entity::VOTER_ID, "ZYX1234567"), "ZYXXXXX567");
    }

    #[test]
    fn test_email() {
        assert_eq!(
            mask(entity::EMAIL_ADDRESS, "test@example.com"),
            "tXXX@example.com"
        );
        assert_eq!(mask(entity::EMAIL_ADDRESS, "a@b.in"), "a@b.in");
        assert_eq!(mask(entity::EMAIL_ADDRESS, "@b.in"), "@b.in");
        assert_eq!(mask(entity::EMAIL_ADDRESS, "nodomain"), "nXXXXXXX");
        assert_eq!(mask(entity::EMAIL_ADDRESS, "a@b@c"), "a@b@c");
    }

    #[test]
    fn test_location_token() {
        assert_eq!(mask(entity::LOCATION, "Bengaluru"), ADDRESS_TOKEN);
        assert_eq!(mask(entity::LOCATION, ""), ADDRESS_TOKEN);
    }

    #[test]
    fn test_unknown_types_block_masked() {
        assert_eq!(mask(entity::PERSON, "John"), "████");
        assert_eq!(mask("SOMETHING_NEW", "ab c"), "████");
        assert_eq!(mask(entity::PERSON, "रवि"), "███");
    }

    #[test]
    fn test_with_rule_override() {
        let table = RuleTable::new().with_rule(entity::PERSON, MaskRule::Replace("[NAME]"));
        assert_eq!(table.mask(entity::PERSON, "John"), "[NAME]");
        assert_eq!(table.mask(entity::PHONE_NUMBER, "9876543210"), "98******10");
    }

    #[test]
    fn test_preserves_length_flag() {
        let table = RuleTable::new();
        assert!(!table.rule_for(entity::LOCATION).preserves_length());
        assert!(table.rule_for(entity::PHONE_NUMBER).preserves_length());
        assert!(table.rule_for("UNKNOWN").preserves_length());
    }
}
