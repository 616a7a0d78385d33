//! Entity classifiers for piimask
//!
//! The engine never detects entities itself; it asks a [`Classifier`]. Two
//! implementations ship here:
//! - [`HttpClassifier`] posts the text to a remote `/analyze` endpoint
//! - [`PatternClassifier`] runs regex recognizers locally

pub mod classifier;
pub mod http;
pub mod overlap;
pub mod pattern;

pub use classifier::Classifier;
pub use http::HttpClassifier;
pub use overlap::resolve_overlaps;
pub use pattern::PatternClassifier;
