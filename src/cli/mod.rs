//! CLI adapter for ctxbundle
//!
//! Provides the command-line interface over the core bundling pipeline.
//! The CLI depends on `core/`; `core/` never depends on the CLI.
//!
//! # Architecture
//!
//! ```text
//! +------------------+      +------------------+
//! |      cli/        | ---> |     core/        |
//! | (clap adapter)   |      |  (domain logic)  |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

/// ctxbundle - keyword-driven context bundler
///
/// Expands a few keywords into related terms, finds the source files
/// that mention them and writes a compressed, categorized JSON digest.
#[derive(Parser, Debug)]
#[command(name = "ctxbundle")]
#[command(version)]
#[command(about = "Keyword-driven context bundler", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand keywords, select relevant files and write the JSON bundle
    Bundle(commands::BundleArgs),

    /// Print the expanded keyword set without scanning
    Expand(commands::ExpandArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  ctxbundle completions bash > ~/.local/share/bash-completion/completions/ctxbundle
    ///   zsh:   ctxbundle completions zsh > ~/.zfunc/_ctxbundle
    ///   fish:  ctxbundle completions fish > ~/.config/fish/completions/ctxbundle.fish
    Completions(commands::CompletionsArgs),
}

impl Commands {
    /// Whether remote related-term providers should be skipped
    pub fn offline(&self) -> bool {
        match self {
            Commands::Bundle(args) => args.offline,
            Commands::Expand(args) => args.offline,
            Commands::ShowConfig(_) | Commands::Completions(_) => false,
        }
    }
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let mut config = Config::load_with_xdg(&XdgDirs::new())?;
    if cli.command.offline() {
        tracing::info!("Offline mode: remote providers disabled");
        config.disable_remote_providers();
    }
    config.log_config();

    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Bundle(args) => commands::bundle::execute(args, &services, cli.format).await,
        Commands::Expand(args) => commands::expand::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}

/// Use the given words, or prompt for a line on stdin when there are none
pub fn resolve_keywords(words: Vec<String>) -> io::Result<Vec<String>> {
    if !words.is_empty() {
        return Ok(words);
    }
    let stdin = io::stdin();
    let line = prompt_keywords(&mut stdin.lock(), &mut io::stderr())?;
    Ok(vec![line])
}

/// Print the keyword prompt and read one line
pub fn prompt_keywords<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> io::Result<String> {
    write!(prompt, "Enter keywords (e.g., 'image server'): ")?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
