use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use piimask_classifier::Classifier;
use piimask_config::Config;
use piimask_engine::{Session, SessionState, export};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{build_classifier, print_snapshot, read_source};
use crate::cli::OutputFormat;

const HELP: &str = "\
Commands:
  analyze <SOURCE>   classify text:<content>, file:<path> or a path
  mask               show the masked text
  restore            show the original text
  reset              clear the session
  show               print the current view
  export [PATH]      write the current entities as JSON
  help               this message
  quit               leave the shell";

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Analyze(String),
    Mask,
    Restore,
    Reset,
    Show,
    Export(Option<PathBuf>),
    Help,
    Quit,
    Empty,
}

impl ShellCommand {
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => ShellCommand::Empty,
            "analyze" if rest.is_empty() => return Err("usage: analyze <SOURCE>".to_string()),
            "analyze" if rest == "-" => {
                return Err("stdin is not available inside the shell".to_string());
            }
            "analyze" => ShellCommand::Analyze(rest.to_string()),
            "mask" => ShellCommand::Mask,
            "restore" | "unmask" => ShellCommand::Restore,
            "reset" => ShellCommand::Reset,
            "show" => ShellCommand::Show,
            "export" if rest.is_empty() => ShellCommand::Export(None),
            "export" => ShellCommand::Export(Some(PathBuf::from(rest))),
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(format!("unknown command '{}', try 'help'", other)),
        };

        Ok(command)
    }
}

pub async fn run(config: &Config, format: OutputFormat) -> Result<()> {
    let classifier = build_classifier(&config.classifier)?;
    let mut session = Session::new();

    println!("piimask shell ({} classifier). Type 'help' for commands.", classifier.name());
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match ShellCommand::parse(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                if let Err(e) =
                    execute(&mut session, classifier.as_ref(), command, config, format).await
                {
                    eprintln!("Error: {}", e);
                }
            }
            Err(message) => eprintln!("{}", message),
        }
        prompt()?;
    }

    Ok(())
}

async fn execute(
    session: &mut Session,
    classifier: &dyn Classifier,
    command: ShellCommand,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    match command {
        ShellCommand::Analyze(source) => {
            let text = read_source(&source).await?;
            let original = session.analyze(text, classifier).await?;
            print_snapshot(original, format, true)?;
        }
        ShellCommand::Mask => {
            let masked = session.mask()?;
            print_snapshot(masked, format, true)?;
        }
        ShellCommand::Restore => {
            let original = session.restore()?;
            print_snapshot(original, format, true)?;
        }
        ShellCommand::Reset => {
            session.reset();
            println!("Session cleared.");
        }
        ShellCommand::Show => match session.active() {
            Some(snapshot) => print_snapshot(snapshot, format, true)?,
            None => println!("Nothing analyzed yet."),
        },
        ShellCommand::Export(path) => {
            let path = path.unwrap_or_else(|| PathBuf::from(&config.export.file_name));
            export::write(session, &path)?;
            let view = match session.state() {
                SessionState::Masked => "masked",
                _ => "original",
            };
            println!("✓ Exported entities to {} (viewing {})", path.display(), view);
        }
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit | ShellCommand::Empty => {}
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("piimask> ");
    std::io::stdout().flush()?;
    Ok(())
}
