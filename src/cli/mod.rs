//! Command-line interface for llm-dump
//!
//! Provides `git` (directory dump) and `markdown` (link-graph dump) subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod git;
mod markdown;
mod utils;

/// Process various content sources for LLM context
#[derive(Parser)]
#[command(name = "llm-dump")]
#[command(author, version, long_about = None)]
#[command(about = "Process various content sources for LLM context")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (llm-dump.toml or .llm-dump.yml)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the contents of a git repository
    Git(git::GitArgs),

    /// Process Obsidian/markdown files
    Markdown(markdown::MarkdownArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Git(args) => git::run(args, config_path),
        Commands::Markdown(args) => markdown::run(args, config_path),
    }
}
