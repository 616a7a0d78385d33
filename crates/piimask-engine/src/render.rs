//! Span renderer - turns a snapshot into display segments and a table

use piimask_core::{Snapshot, sorted_by_start};
use serde::Serialize;

/// Presentation class for an entity type. Exact-name lookup; anything not
/// listed renders as `default`.
pub fn display_class(entity_type: &str) -> &'static str {
    match entity_type {
        "PERSON" => "person",
        "LOCATION" => "location",
        "PHONE_NUMBER" => "phone",
        "PAN" => "pan",
        "AADHAAR" => "aadhaar",
        "CREDIT_CARD" => "credit_card",
        "VOTER_ID" => "voter_id",
        "IBANK" => "ibank",
        "EMAIL" => "email",
        _ => "default",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Plain {
        text: String,
    },
    Tagged {
        text: String,
        entity_type: String,
        class: &'static str,
    },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } | Segment::Tagged { text, .. } => text,
        }
    }
}

/// Ordered plain and tagged slices of one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkedUpText {
    pub segments: Vec<Segment>,
}

impl MarkedUpText {
    /// Concatenation of every segment with tags stripped.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// `<mark class="…">` markup with text escaped for HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain { text } => out.push_str(&escape_html(text)),
                Segment::Tagged { text, class, .. } => {
                    out.push_str(&format!(
                        "<mark class=\"{}\">{}</mark>",
                        class,
                        escape_html(text)
                    ));
                }
            }
        }
        out
    }

    /// Tagged slices wrapped as `[class: text]`, for terminals.
    pub fn to_bracketed(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain { text } => out.push_str(text),
                Segment::Tagged { text, class, .. } => {
                    out.push_str(&format!("[{}: {}]", class, text));
                }
            }
        }
        out
    }
}

/// One row of the entity table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub entity_type: String,
    pub value: String,
    pub start: usize,
    pub end: usize,
    pub confidence_percent: u8,
}

/// Split the snapshot text into plain and tagged segments.
///
/// Spans are visited by start (stable on ties), so any input order works.
/// Empty plain slices are not emitted.
pub fn render(snapshot: &Snapshot) -> MarkedUpText {
    let mut segments = Vec::with_capacity(snapshot.spans().len() * 2 + 1);
    let mut last_index = 0;

    for span in sorted_by_start(snapshot.spans()) {
        let before = snapshot.slice(last_index, span.start);
        if !before.is_empty() {
            segments.push(Segment::Plain {
                text: before.to_string(),
            });
        }

        segments.push(Segment::Tagged {
            text: snapshot.value_of(&span).to_string(),
            class: display_class(&span.entity_type),
            entity_type: span.entity_type,
        });
        last_index = span.end;
    }

    let rest = snapshot.slice(last_index, usize::MAX);
    if !rest.is_empty() {
        segments.push(Segment::Plain {
            text: rest.to_string(),
        });
    }

    MarkedUpText { segments }
}

/// Entity table rows in the order the spans were supplied.
pub fn table(snapshot: &Snapshot) -> Vec<TableRow> {
    snapshot
        .spans()
        .iter()
        .map(|span| TableRow {
            entity_type: span.entity_type.clone(),
            value: snapshot.value_of(span).to_string(),
            start: span.start,
            end: span.end,
            confidence_percent: confidence_percent(span.confidence),
        })
        .collect()
}

/// `confidence * 100` rounded half-up to a whole percent.
///
/// The product is first snapped to 9 decimal places so binary noise such as
/// `0.995 * 100 = 99.49999999999999` still rounds up.
pub fn confidence_percent(confidence: f64) -> u8 {
    let scaled = confidence.clamp(0.0, 1.0) * 100.0;
    let snapped = (scaled * 1e9).round() / 1e9;
    (snapped + 0.5).floor() as u8
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use piimask_core::{Span, entity};

    fn sample() -> Snapshot {
        Snapshot::new(
            "Call John at 9876543210",
            vec![
                Span::new(entity::PHONE_NUMBER, 13, 23, 0.95),
                Span::new(entity::PERSON, 5, 9, 0.9),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_render_sorts_spans() {
        let marked = render(&sample());
        assert_eq!(
            marked.segments,
            vec![
                Segment::Plain {
                    text: "Call ".to_string()
                },
                Segment::Tagged {
                    text: "John".to_string(),
                    entity_type: entity::PERSON.to_string(),
                    class: "person",
                },
                Segment::Plain {
                    text: " at ".to_string()
                },
                Segment::Tagged {
                    text: "9876543210".to_string(),
                    entity_type: entity::PHONE_NUMBER.to_string(),
                    class: "phone",
                },
            ]
        );
        assert_eq!(marked.plain_text(), "Call John at 9876543210");
    }

    #[test]
    fn test_render_without_spans() {
        let snapshot = Snapshot::new("nothing here", vec![]).unwrap();
        let marked = render(&snapshot);
        assert_eq!(marked.segments.len(), 1);
        assert_eq!(marked.plain_text(), "nothing here");
    }

    #[test]
    fn test_render_adjacent_spans() {
        let snapshot = Snapshot::new(
            "RaviDelhi!",
            vec![
                Span::new(entity::LOCATION, 4, 9, 0.85),
                Span::new(entity::PERSON, 0, 4, 0.9),
            ],
        )
        .unwrap();
        let marked = render(&snapshot);
        assert_eq!(marked.to_bracketed(), "[person: Ravi][location: Delhi]!");
    }

    #[test]
    fn test_display_class_is_exact_lookup() {
        assert_eq!(display_class("PHONE_NUMBER"), "phone");
        assert_eq!(display_class("PAN"), "pan");
        assert_eq!(display_class("PAN_NUMBER"), "default");
        assert_eq!(display_class("EMAIL_ADDRESS"), "default");
        assert_eq!(display_class("IBANK"), "ibank");
    }

    #[test]
    fn test_html_escapes_text() {
        let snapshot =
            Snapshot::new("<b>Ravi</b>", vec![Span::new(entity::PERSON, 3, 7, 0.9)]).unwrap();
        assert_eq!(
            render(&snapshot).to_html(),
            "&lt;b&gt;<mark class=\"person\">Ravi</mark>&lt;/b&gt;"
        );
    }

    #[test]
    fn test_table_keeps_caller_order() {
        let rows = table(&sample());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].entity_type, entity::PHONE_NUMBER);
        assert_eq!(rows[0].value, "9876543210");
        assert_eq!(rows[0].confidence_percent, 95);
        assert_eq!(rows[1].value, "John");
        assert_eq!(rows[1].confidence_percent, 90);
    }

    #[test]
    fn test_confidence_rounding_half_up() {
        assert_eq!(confidence_percent(0.005), 1);
        assert_eq!(confidence_percent(0.004), 0);
        assert_eq!(confidence_percent(0.995), 100);
        assert_eq!(confidence_percent(0.994), 99);
        assert_eq!(confidence_percent(0.125), 13);
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(1.0), 100);
        assert_eq!(confidence_percent(0.85), 85);
    }
}
