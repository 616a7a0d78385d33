use std::path::Path;

use async_trait::async_trait;
use piimask_core::{Error, Result};
use tracing::debug;

use crate::handler::SourceHandler;

/// Extensions read verbatim as UTF-8 text.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "csv", "log", "json"];

/// Local files: `file:<path>` or a bare path.
///
/// Plain-text files are read as-is. Any other file yields a placeholder
/// message naming the file, since no format extraction happens here.
pub struct FileHandler;

impl FileHandler {
    fn is_text_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                TEXT_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false)
    }

    /// Message analyzed in place of the contents of an unsupported file.
    pub fn placeholder(file_name: &str) -> String {
        format!(
            "File \"{}\" uploaded successfully.\n\n\
             Text extraction is not supported for this file type.\n\
             Send this file to the backend for processing.",
            file_name
        )
    }
}

#[async_trait]
impl SourceHandler for FileHandler {
    async fn load(&self, uri: &str) -> Result<String> {
        let path = Path::new(uri.strip_prefix("file:").unwrap_or(uri));

        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            Error::Other(anyhow::anyhow!(
                "Failed to read file {}: {}",
                path.display(),
                e
            ))
        })?;
        if !metadata.is_file() {
            return Err(Error::Other(anyhow::anyhow!(
                "Not a file: {}",
                path.display()
            )));
        }

        if Self::is_text_file(path) {
            debug!(path = %path.display(), bytes = metadata.len(), "Reading text file");
            return tokio::fs::read_to_string(path).await.map_err(|e| {
                Error::Other(anyhow::anyhow!(
                    "Failed to read file {}: {}",
                    path.display(),
                    e
                ))
            });
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        debug!(path = %path.display(), "Unsupported file type, using placeholder");
        Ok(Self::placeholder(&name))
    }

    /// Anything that is not inline text is a path, colons included
    /// (`C:\notes.txt`, `notes:v2.txt`).
    fn can_handle(&self, uri: &str) -> bool {
        !uri.starts_with("text:")
    }
}
