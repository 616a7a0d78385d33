use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter text first")]
    EmptyText,

    #[error("Analyze text first")]
    NotAnalyzed,

    #[error("No entities to mask; analyze text first")]
    NoEntities,

    #[error("No results to export")]
    NothingToExport,

    #[error("Span {index} ({entity}) is empty or reversed: start {start} >= end {end}")]
    EmptySpan {
        index: usize,
        entity: String,
        start: usize,
        end: usize,
    },

    #[error("Span {index} ({entity}) ends at {end}, past the text length {len}")]
    SpanOutOfBounds {
        index: usize,
        entity: String,
        end: usize,
        len: usize,
    },

    #[error("Spans overlap: [{first_start}, {first_end}) and [{second_start}, {second_end})")]
    OverlappingSpans {
        first_start: usize,
        first_end: usize,
        second_start: usize,
        second_end: usize,
    },

    #[error("Span {index} ({entity}) has confidence {confidence}, expected a value in [0, 1]")]
    InvalidConfidence {
        index: usize,
        entity: String,
        confidence: f64,
    },

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Analysis result discarded: session changed while the classifier was running")]
    StaleAnalysis,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Broad category of an [`Error`], used to decide how it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing input from the user; state is left untouched.
    UserInput,
    /// The classifier failed or answered with something unusable.
    Collaborator,
    /// Spans violate offset or ordering assumptions.
    DataAssumption,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyText | Error::NotAnalyzed | Error::NoEntities | Error::NothingToExport => {
                ErrorKind::UserInput
            }
            Error::Classifier(_) | Error::StaleAnalysis => ErrorKind::Collaborator,
            Error::EmptySpan { .. }
            | Error::SpanOutOfBounds { .. }
            | Error::OverlappingSpans { .. }
            | Error::InvalidConfidence { .. } => ErrorKind::DataAssumption,
            Error::Io(_) | Error::Serialization(_) | Error::Other(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::EmptyText.kind(), ErrorKind::UserInput);
        assert_eq!(Error::NothingToExport.kind(), ErrorKind::UserInput);
        assert_eq!(
            Error::Classifier("timeout".to_string()).kind(),
            ErrorKind::Collaborator
        );
        assert_eq!(
            Error::OverlappingSpans {
                first_start: 0,
                first_end: 4,
                second_start: 2,
                second_end: 6,
            }
            .kind(),
            ErrorKind::DataAssumption
        );
    }

    #[test]
    fn test_not_analyzed_message() {
        assert_eq!(Error::NotAnalyzed.to_string(), "Analyze text first");
    }
}
