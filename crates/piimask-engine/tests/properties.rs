use piimask_core::{Snapshot, Span, entity};
use piimask_engine::{Session, render, transform};
use piimask_security::{RuleTable, mask};
use proptest::prelude::*;

const ENTITIES: &[&str] = &[
    entity::PERSON,
    entity::LOCATION,
    entity::PHONE_NUMBER,
    entity::PAN_NUMBER,
    entity::AADHAAR_NUMBER,
    entity::CREDIT_CARD,
    entity::IBAN_CODE,
    entity::VOTER_ID,
    entity::EMAIL_ADDRESS,
    entity::UPI_ID,
];

/// A text assembled from gap/value pieces plus one span per value, listed
/// in reverse so the engine has to sort. Also returns the gaps and values.
#[derive(Debug, Clone)]
struct Doc {
    text: String,
    spans: Vec<Span>,
    gaps: Vec<String>,
    values: Vec<String>,
}

fn doc(min_spans: usize) -> impl Strategy<Value = Doc> {
    (
        prop::collection::vec(
            (
                "[a-z ,.]{0,6}",
                "\\PC{1,14}",
                0..ENTITIES.len(),
                0.0f64..=1.0,
            ),
            min_spans..6,
        ),
        "[a-z .]{0,6}",
    )
        .prop_map(|(parts, tail)| {
            let mut text = String::new();
            let mut len = 0;
            let mut spans = Vec::new();
            let mut gaps = Vec::new();
            let mut values = Vec::new();

            for (gap, value, kind, confidence) in parts {
                text.push_str(&gap);
                len += gap.chars().count();
                let start = len;
                text.push_str(&value);
                len += value.chars().count();
                spans.push(Span::new(ENTITIES[kind], start, len, confidence));
                gaps.push(gap);
                values.push(value);
            }
            text.push_str(&tail);
            gaps.push(tail);
            spans.reverse();

            Doc {
                text,
                spans,
                gaps,
                values,
            }
        })
}

proptest! {
    #[test]
    fn rendering_reconstructs_text(doc in doc(0)) {
        let snapshot = Snapshot::new(doc.text.clone(), doc.spans.clone()).unwrap();
        let marked = render(&snapshot);
        prop_assert_eq!(marked.plain_text(), doc.text);
    }

    #[test]
    fn masked_offsets_are_consistent(doc in doc(1)) {
        let original = Snapshot::new(doc.text.clone(), doc.spans.clone()).unwrap();
        let masked = transform::mask(&original, &RuleTable::new()).unwrap();
        let len = masked.char_len();

        for span in masked.spans() {
            prop_assert!(span.start < span.end);
            prop_assert!(span.end <= len);
        }
        for pair in masked.spans().windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn masked_text_is_gaps_and_masked_values(doc in doc(1)) {
        let original = Snapshot::new(doc.text.clone(), doc.spans.clone()).unwrap();
        let masked = transform::mask(&original, &RuleTable::new()).unwrap();

        // spans were listed in reverse; restore text order for comparison
        let mut in_order = doc.spans.clone();
        in_order.reverse();

        let mut expected = String::new();
        for (i, value) in doc.values.iter().enumerate() {
            expected.push_str(&doc.gaps[i]);
            expected.push_str(&mask(&in_order[i].entity_type, value));
        }
        expected.push_str(doc.gaps.last().unwrap());

        prop_assert_eq!(masked.text(), expected.as_str());
        for (span, original_span) in masked.spans().iter().zip(&in_order) {
            prop_assert_eq!(&span.entity_type, &original_span.entity_type);
            prop_assert_eq!(
                masked.value_of(span),
                mask(&original_span.entity_type, original.value_of(original_span))
            );
        }
    }

    #[test]
    fn restore_returns_untouched_original(doc in doc(1)) {
        let mut session = Session::new();
        let ticket = session.begin_analysis(doc.text.clone());
        prop_assume!(ticket.is_ok());
        session.commit_analysis(ticket.unwrap(), doc.spans.clone()).unwrap();

        session.mask().unwrap();
        let restored = session.restore().unwrap();
        prop_assert_eq!(restored.text(), doc.text.as_str());
        prop_assert_eq!(restored.spans(), doc.spans.as_slice());
    }
}
