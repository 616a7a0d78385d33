//! Source handler trait and registry

use async_trait::async_trait;
use piimask_core::{Error, Result};

use crate::file::FileHandler;
use crate::text::TextHandler;

/// Supplies raw input text for analysis.
///
/// Handlers never interpret the text; whatever string they return is what
/// gets analyzed, including placeholder messages for unsupported files.
#[async_trait]
pub trait SourceHandler: Send + Sync {
    /// Load the text behind `uri`.
    async fn load(&self, uri: &str) -> Result<String>;

    /// Check if this handler can handle the given URI
    fn can_handle(&self, uri: &str) -> bool;
}

/// Dispatches a source URI to the first handler that accepts it.
pub struct SourceHandlerRegistry {
    handlers: Vec<Box<dyn SourceHandler>>,
}

impl SourceHandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: vec![Box::new(TextHandler), Box::new(FileHandler)],
        }
    }

    pub async fn load(&self, uri: &str) -> Result<String> {
        let handler = self
            .handlers
            .iter()
            .find(|h| h.can_handle(uri))
            .ok_or_else(|| Error::Other(anyhow::anyhow!("No handler for source: {}", uri)))?;

        handler.load(uri).await
    }
}

impl Default for SourceHandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
