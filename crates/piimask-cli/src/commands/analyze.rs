use anyhow::Result;
use piimask_config::Config;
use piimask_engine::Session;

use super::{build_classifier, print_snapshot, read_source};
use crate::cli::OutputFormat;

pub async fn analyze(
    config: &Config,
    source: &str,
    format: OutputFormat,
    show_table: bool,
) -> Result<()> {
    let session = analyzed_session(config, source).await?;
    if let Some(original) = session.original() {
        print_snapshot(original, format, show_table)?;
    }
    Ok(())
}

pub async fn mask(config: &Config, source: &str, format: OutputFormat, show_table: bool) -> Result<()> {
    let mut session = analyzed_session(config, source).await?;
    let masked = session.mask()?;
    print_snapshot(masked, format, show_table)
}

/// Fresh session holding the analysis of `source`.
pub async fn analyzed_session(config: &Config, source: &str) -> Result<Session> {
    let text = read_source(source).await?;
    let classifier = build_classifier(&config.classifier)?;

    let mut session = Session::new();
    session.analyze(text, classifier.as_ref()).await?;
    Ok(session)
}
