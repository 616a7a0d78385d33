use async_trait::async_trait;
use piimask_core::{Error, Result};

use crate::handler::SourceHandler;

/// Inline text: `text:<content>`.
pub struct TextHandler;

#[async_trait]
impl SourceHandler for TextHandler {
    async fn load(&self, uri: &str) -> Result<String> {
        uri.strip_prefix("text:")
            .map(str::to_string)
            .ok_or_else(|| Error::Other(anyhow::anyhow!("Invalid text URI: {}", uri)))
    }

    fn can_handle(&self, uri: &str) -> bool {
        uri.starts_with("text:")
    }
}
