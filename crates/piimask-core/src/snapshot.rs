//! Document snapshot: a text paired with the spans that annotate it

use serde::Serialize;

use crate::span::{Span, sorted_by_start};
use crate::{Error, Result};

/// One coherent view of a document (original or redacted).
///
/// Construction validates every span against the text, so code that holds a
/// `Snapshot` can slice it by span offsets without further checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    text: String,
    spans: Vec<Span>,
    /// Byte offset of every char boundary, including the end of the text.
    #[serde(skip)]
    boundaries: Vec<usize>,
}

impl Snapshot {
    /// Build a snapshot, rejecting spans that are empty, out of range,
    /// overlapping, or carry a confidence outside `[0, 1]`.
    pub fn new(text: impl Into<String>, spans: Vec<Span>) -> Result<Self> {
        let text = text.into();
        let boundaries = char_boundaries(&text);
        check_spans(boundaries.len() - 1, &spans)?;
        Ok(Self {
            text,
            spans,
            boundaries,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Spans in the order they were supplied.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn has_spans(&self) -> bool {
        !self.spans.is_empty()
    }

    /// Length of the text in chars, the unit span offsets are expressed in.
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Slice the text by char offsets. Offsets past the end clamp to the end.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let from = self.byte_offset(start);
        let to = self.byte_offset(end.max(start));
        &self.text[from..to]
    }

    /// The covered text `text[start..end]` of a span, in char offsets.
    pub fn value_of(&self, span: &Span) -> &str {
        self.slice(span.start, span.end)
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.boundaries
            .get(char_idx)
            .copied()
            .unwrap_or(self.text.len())
    }
}

fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// Check spans against `text`: each must satisfy `start < end <= len(text)`
/// with a finite confidence in `[0, 1]`, and no two may overlap.
pub fn validate_spans(text: &str, spans: &[Span]) -> Result<()> {
    check_spans(text.chars().count(), spans)
}

fn check_spans(len: usize, spans: &[Span]) -> Result<()> {
    for (index, span) in spans.iter().enumerate() {
        if span.start >= span.end {
            return Err(Error::EmptySpan {
                index,
                entity: span.entity_type.clone(),
                start: span.start,
                end: span.end,
            });
        }
        if span.end > len {
            return Err(Error::SpanOutOfBounds {
                index,
                entity: span.entity_type.clone(),
                end: span.end,
                len,
            });
        }
        if !span.confidence.is_finite() || !(0.0..=1.0).contains(&span.confidence) {
            return Err(Error::InvalidConfidence {
                index,
                entity: span.entity_type.clone(),
                confidence: span.confidence,
            });
        }
    }

    // With starts sorted, any overlap shows up between neighbours.
    let sorted = sorted_by_start(spans);
    for pair in sorted.windows(2) {
        let (first, second) = (&pair[0], &pair[1]);
        if first.overlaps(second) {
            return Err(Error::OverlappingSpans {
                first_start: first.start,
                first_end: first.end,
                second_start: second.start,
                second_end: second.end,
            });
        }
    }

    Ok(())
}
