use std::path::PathBuf;

use anyhow::Result;
use piimask_config::Config;
use piimask_engine::export;

use super::analyze::analyzed_session;

pub async fn handle(
    config: &Config,
    source: &str,
    masked: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut session = analyzed_session(config, source).await?;
    if masked {
        session.mask()?;
    }

    let path = output.unwrap_or_else(|| PathBuf::from(&config.export.file_name));
    let entities = export::collect(&session)?.entities.len();
    export::write(&session, &path)?;

    println!("✓ Exported {} entities to {}", entities, path.display());
    Ok(())
}
