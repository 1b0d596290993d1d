//! `markdown` command: dump a note and the notes it links to

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use super::utils::resolve_config;
use crate::config::CliOverrides;
use crate::domain::TraversalRequest;
use crate::dump::dump_markdown;
use crate::fs::LocalFs;

#[derive(Args)]
pub struct MarkdownArgs {
    /// Path to the starting markdown file (.md suffix optional)
    #[arg(value_name = "START_FILE")]
    pub start_file: String,

    /// Path to the output text file
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Maximum depth to traverse [default: 2]
    #[arg(long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Base folder for resolving links (default: start file's folder)
    #[arg(long, value_name = "DIR")]
    pub base_folder: Option<PathBuf>,
}

pub fn run(args: MarkdownArgs, config_path: Option<&Path>) -> Result<()> {
    if let Some(base) = &args.base_folder {
        if !base.is_dir() {
            anyhow::bail!("Base folder is not a directory: {}", base.display());
        }
    }

    let config = resolve_config(
        config_path,
        CliOverrides { max_depth: args.max_depth, ..CliOverrides::default() },
    )?;

    let mut request = TraversalRequest::new(args.start_file.clone(), args.output_file)
        .max_depth(config.max_depth);
    request.base_directory = args.base_folder;

    let summary = dump_markdown(&LocalFs, &request)
        .with_context(|| format!("Failed dumping notes from {}", args.start_file))?;
    println!("Wrote {} notes to {}", summary.documents, summary.output_file.display());
    Ok(())
}
