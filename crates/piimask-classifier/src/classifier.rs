//! Classifier trait

use async_trait::async_trait;
use piimask_core::{Result, Span};

/// Detects sensitive entities in a text.
///
/// Implementations return spans in char offsets over `text`. A failure of
/// any kind is reported as [`piimask_core::Error::Classifier`].
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Vec<Span>>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
