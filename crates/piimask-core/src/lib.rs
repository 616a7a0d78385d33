//! Core domain models for piimask
//!
//! This crate contains:
//! - Domain models (Span, Snapshot)
//! - Span validation at the engine boundary
//! - The shared error type

pub mod error;
pub mod snapshot;
pub mod span;

pub use error::{Error, ErrorKind, Result};
pub use snapshot::{Snapshot, validate_spans};
pub use span::{Span, entity, sorted_by_start};
