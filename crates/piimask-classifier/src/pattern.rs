//! Offline regex recognizers for Indian and common identifiers

use async_trait::async_trait;
use lazy_static::lazy_static;
use piimask_core::{Result, Span, entity};
use regex::Regex;
use tracing::debug;

use crate::classifier::Classifier;
use crate::overlap::resolve_overlaps;

struct Recognizer {
    entity: &'static str,
    regex: Regex,
    score: f64,
    /// Capture group holding the entity; 0 is the whole match.
    group: usize,
}

impl Recognizer {
    fn new(entity: &'static str, pattern: &str, score: f64) -> Self {
        Self::with_group(entity, pattern, score, 0)
    }

    fn with_group(entity: &'static str, pattern: &str, score: f64, group: usize) -> Self {
        Self {
            entity,
            regex: Regex::new(pattern).unwrap(),
            score,
            group,
        }
    }
}

lazy_static! {
    // Order matters only for readability; overlaps are settled by score and length.
    static ref RECOGNIZERS: Vec<Recognizer> = vec![
        Recognizer::with_group(
            entity::PERSON,
            r"(?i)\b(?:full name|name)\s*:\s*([a-zA-Z]+(?:[ \t]+[a-zA-Z]+)*)",
            1.0,
            1,
        ),
        Recognizer::new(entity::AADHAAR_NUMBER, r"\b[1-9]\d{3}(?:\s?\d{4}){2}\b", 0.95),
        Recognizer::new(entity::CREDIT_CARD, r"\b(?:\d[ -]*?){16}\b", 0.9),
        Recognizer::new(entity::PAN_NUMBER, r"\b[A-Z]{5}[0-9]{4}[A-Z]\b", 1.0),
        Recognizer::new(entity::PHONE_NUMBER, r"\b[6-9]\d{9}\b", 0.95),
        Recognizer::new(entity::IBAN_CODE, r"\b[A-Z]{2}\d{2}[A-Z0-9]{10,30}\b", 0.95),
        Recognizer::new(entity::EMPLOYEE_ID, r"\b(?:EMP-?\d{4,6}|ORG-?\d{4,6})\b", 0.95),
        Recognizer::new(entity::VOTER_ID, r"\b[A-Z]{3}[0-9]{7}\b", 0.95),
        Recognizer::new(entity::PASSPORT_NUMBER, r"\b[A-Z][0-9]{7}\b", 0.9),
        Recognizer::new(entity::DRIVING_LICENSE, r"\b[A-Z]{2}[0-9]{2}[0-9]{11}\b", 0.9),
        Recognizer::new(
            entity::VEHICLE_REGISTRATION,
            r"\b[A-Z]{2}[0-9]{2}[A-Z]{1,2}[0-9]{4}\b",
            0.95,
        ),
        Recognizer::new(entity::PINCODE, r"\b[1-9][0-9]{5}\b", 0.9),
        Recognizer::new(
            entity::EMAIL_ADDRESS,
            r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
            1.0,
        ),
        Recognizer::new(entity::UPI_ID, r"\b[\w.-]+@[a-zA-Z]+\b", 0.85),
        Recognizer::new(
            entity::LOCATION,
            r"\b(?:Bangalore|Bengaluru|Mumbai|Delhi|Chennai|Hyderabad|Kolkata|Pune|Karnataka|Tamil Nadu|Maharashtra|India)\b",
            0.85,
        ),
    ];
}

/// Classifier that runs a fixed set of regex recognizers locally.
///
/// Matches scoring below `threshold` are dropped and the rest are reduced to
/// a non-overlapping set with [`resolve_overlaps`].
pub struct PatternClassifier {
    threshold: f64,
}

impl PatternClassifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Synchronous detection; [`Classifier::classify`] delegates here.
    pub fn detect(&self, text: &str) -> Vec<Span> {
        let mut found = Vec::new();

        for recognizer in RECOGNIZERS.iter() {
            if recognizer.score < self.threshold {
                continue;
            }
            let mut cursor = CharCursor::new(text);
            for captures in recognizer.regex.captures_iter(text) {
                if let Some(m) = captures.get(recognizer.group) {
                    let start = cursor.advance_to(m.start());
                    let end = cursor.advance_to(m.end());
                    found.push(Span::new(recognizer.entity, start, end, recognizer.score));
                }
            }
        }

        let resolved = resolve_overlaps(found);
        debug!(entities = resolved.len(), "Pattern recognizers finished");
        resolved
    }
}

impl Default for PatternClassifier {
    fn default() -> Self {
        Self::new(0.6)
    }
}

#[async_trait]
impl Classifier for PatternClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<Span>> {
        Ok(self.detect(text))
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

/// Converts ascending byte offsets into char offsets in one pass over the text.
struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn advance_to(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
