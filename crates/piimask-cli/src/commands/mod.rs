pub mod analyze;
pub mod export;
pub mod shell;

use std::time::Duration;

use anyhow::Result;
use piimask_classifier::{Classifier, HttpClassifier, PatternClassifier};
use piimask_config::{Backend, ClassifierConfig};
use piimask_core::Snapshot;
use piimask_engine::{render, table};
use piimask_sources::SourceHandlerRegistry;
use tokio::io::AsyncReadExt;

use crate::cli::OutputFormat;

/// Build the classifier selected in the config.
pub fn build_classifier(config: &ClassifierConfig) -> Result<Box<dyn Classifier>> {
    let classifier: Box<dyn Classifier> = match config.backend {
        Backend::Http => {
            let http = HttpClassifier::new(
                config.endpoint.clone(),
                config.threshold,
                Duration::from_secs(config.timeout_secs),
            )?;
            tracing::debug!(endpoint = http.endpoint(), "Using remote classifier");
            Box::new(http)
        }
        Backend::Pattern => Box::new(PatternClassifier::new(config.threshold)),
    };
    tracing::debug!(backend = classifier.name(), "Classifier ready");
    Ok(classifier)
}

/// Load input text from a source URI, or stdin for `-`. Surrounding
/// whitespace is trimmed.
pub async fn read_source(source: &str) -> Result<String> {
    let text = if source == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        SourceHandlerRegistry::new().load(source).await?
    };

    Ok(text.trim().to_string())
}

/// Print a snapshot and, optionally, its entity table.
pub fn print_snapshot(snapshot: &Snapshot, format: OutputFormat, show_table: bool) -> Result<()> {
    let marked = render(snapshot);

    match format {
        OutputFormat::Text => {
            println!("{}", marked.to_bracketed());
            if show_table {
                print_table(snapshot);
            }
        }
        OutputFormat::Html => {
            println!("{}", marked.to_html());
        }
        OutputFormat::Json => {
            let mut value = serde_json::json!({
                "text": snapshot.text(),
                "segments": marked.segments,
            });
            if show_table {
                value["entities"] = serde_json::to_value(table(snapshot))?;
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

fn print_table(snapshot: &Snapshot) {
    let rows = table(snapshot);
    if rows.is_empty() {
        println!("\nNo entities found.");
        return;
    }

    println!("\nEntities ({}):", rows.len());
    println!(
        "  {:<22} {:<28} {:>6} {:>6} {:>6}",
        "TYPE", "VALUE", "START", "END", "CONF"
    );
    for row in rows {
        println!(
            "  {:<22} {:<28} {:>6} {:>6} {:>5}%",
            row.entity_type,
            row.value.replace('\n', " "),
            row.start,
            row.end,
            row.confidence_percent
        );
    }
}
