use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "piimask")]
#[command(about = "Highlight and mask sensitive data in text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config directory)
    #[arg(long, global = true, env = "PIIMASK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Classifier backend, overriding the config file
    #[arg(long, global = true, value_enum)]
    pub backend: Option<BackendArg>,

    /// Classifier endpoint for the http backend
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Minimum detection score (0-1)
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Http,
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bracketed tags for terminals
    Text,
    /// `<mark>` markup
    Html,
    /// Segments and entity table as JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect entities and show them highlighted
    Analyze {
        /// Source: text:<content>, file:<path>, a bare path, or - for stdin
        source: String,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Skip the entity table
        #[arg(long)]
        no_table: bool,
    },

    /// Detect entities and show the masked text
    Mask {
        /// Source: text:<content>, file:<path>, a bare path, or - for stdin
        source: String,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Skip the entity table
        #[arg(long)]
        no_table: bool,
    },

    /// Detect entities and write them as JSON
    Export {
        /// Source: text:<content>, file:<path>, a bare path, or - for stdin
        source: String,

        /// Export spans of the masked text instead of the original
        #[arg(long)]
        masked: bool,

        /// Output file (default from config: pii_results.json)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Interactive session: analyze, mask, restore, reset, export
    Shell {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
