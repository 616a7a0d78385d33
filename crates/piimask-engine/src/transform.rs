//! Transformer - applies the rule table to build a redacted snapshot

use piimask_core::{Error, Result, Snapshot, Span, sorted_by_start};
use piimask_security::RuleTable;
use tracing::debug;

/// Redact every span of `original`.
///
/// The returned snapshot carries one span per input span, re-expressed in the
/// coordinates of the redacted text. Offsets follow the running length of the
/// output, so rules that change length (LOCATION) keep later spans aligned.
pub fn mask(original: &Snapshot, rules: &RuleTable) -> Result<Snapshot> {
    if !original.has_spans() {
        return Err(Error::NoEntities);
    }

    let mut new_text = String::with_capacity(original.text().len());
    let mut new_len = 0;
    let mut new_spans = Vec::with_capacity(original.spans().len());
    let mut last_index = 0;

    for span in sorted_by_start(original.spans()) {
        let before = original.slice(last_index, span.start);
        new_text.push_str(before);
        new_len += before.chars().count();

        let masked = rules.mask(&span.entity_type, original.value_of(&span));
        let new_start = new_len;
        new_text.push_str(&masked);
        new_len += masked.chars().count();

        new_spans.push(Span::new(
            span.entity_type,
            new_start,
            new_len,
            span.confidence,
        ));
        last_index = span.end;
    }

    new_text.push_str(original.slice(last_index, usize::MAX));

    debug!(spans = new_spans.len(), "Masked snapshot built");
    Snapshot::new(new_text, new_spans)
}
