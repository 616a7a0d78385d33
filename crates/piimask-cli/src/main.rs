mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use piimask_config::{Backend, Config};

use crate::cli::{BackendArg, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "piimask", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Analyze {
            source,
            format,
            no_table,
        } => commands::analyze::analyze(&config, &source, format, !no_table).await,
        Commands::Mask {
            source,
            format,
            no_table,
        } => commands::analyze::mask(&config, &source, format, !no_table).await,
        Commands::Export {
            source,
            masked,
            output,
        } => commands::export::handle(&config, &source, masked, output).await,
        Commands::Shell { format } => commands::shell::run(&config, format).await,
        Commands::Completions { .. } => Ok(()),
    }
}

/// Config file plus command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(backend) = cli.backend {
        config.classifier.backend = match backend {
            BackendArg::Http => Backend::Http,
            BackendArg::Pattern => Backend::Pattern,
        };
    }
    if let Some(endpoint) = &cli.endpoint {
        config.classifier.endpoint = endpoint.clone();
    }
    if let Some(threshold) = cli.threshold {
        config.classifier.threshold = threshold;
    }

    config.validate()?;
    Ok(config)
}
