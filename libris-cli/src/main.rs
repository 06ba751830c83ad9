//! Libris CLI - interactive shell for the in-memory library catalog

mod commands;
mod config;
mod prompt;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use config::ShellConfig;
use shell::Shell;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "libris")]
#[command(author, version, about = "Manage an in-memory library catalog", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Read menu answers from a file instead of standard input
    #[arg(long)]
    input: Option<PathBuf>,

    /// Render listings and return outcomes as JSON
    #[arg(long)]
    json: bool,

    /// Do not print the banner and menu
    #[arg(long)]
    no_menu: bool,
}

impl Cli {
    fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            show_menu: !self.no_menu,
            json: self.json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so they never mix with the menu
    let filter = if cli.verbose {
        EnvFilter::new("libris_cli=debug,libris_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("libris_cli=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    tracing::debug!(input = ?cli.input, "starting session");

    let mut shell = Shell::new(input, io::stdout().lock(), cli.shell_config());
    shell.run().context("Session aborted")?;

    Ok(())
}
