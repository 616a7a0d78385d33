//! Entity export as `{"entities": [...]}` JSON

use std::path::Path;

use piimask_core::{Error, Result, Span};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::session::Session;

/// File name used when the caller does not pick one.
pub const DEFAULT_EXPORT_FILE: &str = "pii_results.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityExport {
    pub entities: Vec<Span>,
}

/// Spans to export: the masked set when one exists, else the original set.
pub fn collect(session: &Session) -> Result<EntityExport> {
    let masked = session.masked().map(|s| s.spans()).unwrap_or_default();
    let original = session.original().map(|s| s.spans()).unwrap_or_default();

    let entities = if !masked.is_empty() {
        masked
    } else if !original.is_empty() {
        original
    } else {
        return Err(Error::NothingToExport);
    };

    Ok(EntityExport {
        entities: entities.to_vec(),
    })
}

/// Pretty-printed JSON for [`collect`].
pub fn to_json(session: &Session) -> Result<String> {
    let export = collect(session)?;
    Ok(serde_json::to_string_pretty(&export)?)
}

/// Write the export to `path`. Nothing is written when there is nothing to export.
pub fn write(session: &Session, path: &Path) -> Result<()> {
    let json = to_json(session)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "Entities exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use piimask_core::entity;

    fn analyzed() -> Session {
        let mut session = Session::new();
        let ticket = session.begin_analysis("From Pune call 9876543210").unwrap();
        session
            .commit_analysis(
                ticket,
                vec![
                    Span::new(entity::PHONE_NUMBER, 15, 25, 0.95),
                    Span::new(entity::LOCATION, 5, 9, 0.85),
                ],
            )
            .unwrap();
        session
    }

    #[test]
    fn test_nothing_to_export() {
        let session = Session::new();
        assert!(matches!(collect(&session), Err(Error::NothingToExport)));
    }

    #[test]
    fn test_exports_original_spans_in_caller_order() {
        let export = collect(&analyzed()).unwrap();
        assert_eq!(export.entities[0].entity_type, entity::PHONE_NUMBER);
        assert_eq!(export.entities[0].start, 15);
    }

    #[test]
    fn test_prefers_masked_spans() {
        let mut session = analyzed();
        session.mask().unwrap();
        session.restore().unwrap();

        let export = collect(&session).unwrap();
        assert_eq!(export.entities[0], Span::new(entity::LOCATION, 5, 14, 0.85));
        assert_eq!(export.entities[1].start, 20);
    }

    #[test]
    fn test_json_shape() {
        let json = to_json(&analyzed()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entities"][0]["entity"], "PHONE_NUMBER");
        assert_eq!(value["entities"][0]["score"], 0.95);
        assert_eq!(value["entities"][1]["end"], 9);
        assert!(json.contains("\n  \"entities\""));
    }

    #[test]
    fn test_write_skips_file_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);

        assert!(write(&Session::new(), &path).is_err());
        assert!(!path.exists());

        write(&analyzed(), &path).unwrap();
        let parsed: EntityExport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.entities.len(), 2);
    }
}
