//! Annotation and redaction engine
//!
//! - [`render`]: snapshot to display segments and entity table
//! - [`transform`]: snapshot to masked snapshot with recomputed spans
//! - [`session`]: the original/masked pair and the active view
//! - [`export`]: active spans as JSON

pub mod export;
pub mod render;
pub mod session;
pub mod transform;

pub use export::{DEFAULT_EXPORT_FILE, EntityExport};
pub use render::{MarkedUpText, Segment, TableRow, confidence_percent, display_class, render, table};
pub use session::{AnalysisTicket, Session, SessionState, View};
