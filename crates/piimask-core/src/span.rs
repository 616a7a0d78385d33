use serde::{Deserialize, Serialize};

/// Entity type names produced by the classifier.
pub mod entity {
    pub const PERSON: &str = "PERSON";
    pub const LOCATION: &str = "LOCATION";
    pub const PHONE_NUMBER: &str = "PHONE_NUMBER";
    pub const PAN_NUMBER: &str = "PAN_NUMBER";
    pub const AADHAAR_NUMBER: &str = "AADHAAR_NUMBER";
    pub const CREDIT_CARD: &str = "CREDIT_CARD";
    pub const IBAN_CODE: &str = "IBAN_CODE";
    pub const VOTER_ID: &str = "VOTER_ID";
    pub const EMAIL_ADDRESS: &str = "EMAIL_ADDRESS";
    pub const EMPLOYEE_ID: &str = "EMPLOYEE_ID";
    pub const PASSPORT_NUMBER: &str = "PASSPORT_NUMBER";
    pub const DRIVING_LICENSE: &str = "DRIVING_LICENSE";
    pub const VEHICLE_REGISTRATION: &str = "VEHICLE_REGISTRATION";
    pub const PINCODE: &str = "PINCODE";
    pub const UPI_ID: &str = "UPI_ID";
}

/// A labeled half-open range `[start, end)` over a text.
///
/// Offsets count chars (Unicode scalar values), not bytes. The wire form
/// uses the classifier's field names: `{entity, start, end, score}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "entity")]
    pub entity_type: String,
    pub start: usize,
    pub end: usize,
    #[serde(rename = "score")]
    pub confidence: f64,
}

impl Span {
    pub fn new(entity_type: impl Into<String>, start: usize, end: usize, confidence: f64) -> Self {
        Self {
            entity_type: entity_type.into(),
            start,
            end,
            confidence,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the two ranges share at least one char. Adjacent spans do not overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Copy of `spans` ordered by `start`. Ties keep their input order.
pub fn sorted_by_start(spans: &[Span]) -> Vec<Span> {
    let mut sorted = spans.to_vec();
    sorted.sort_by_key(|span| span.start);
    sorted
}
