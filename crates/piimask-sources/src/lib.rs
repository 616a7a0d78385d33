//! Input text sources (`text:` and `file:` URIs)

pub mod file;
pub mod handler;
pub mod text;

pub use file::FileHandler;
pub use handler::{SourceHandler, SourceHandlerRegistry};
pub use text::TextHandler;
