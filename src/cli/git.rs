//! `git` command: dump a directory as a file tree plus file contents

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use super::utils::{parse_csv, resolve_config};
use crate::config::CliOverrides;
use crate::domain::FolderDumpRequest;
use crate::dump::dump_repository;
use crate::fs::LocalFs;

#[derive(Args)]
pub struct GitArgs {
    /// Path to the repository to process
    #[arg(value_name = "FOLDER_PATH")]
    pub folder_path: PathBuf,

    /// Path to the output text file
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Extra ignore patterns (comma-separated, gitignore syntax)
    #[arg(long, value_name = "PATTERNS")]
    pub ignore: Option<String>,

    /// Ignore file read from the repository root
    #[arg(long, value_name = "NAME")]
    pub ignore_file: Option<String>,
}

pub fn run(args: GitArgs, config_path: Option<&Path>) -> Result<()> {
    if !args.folder_path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", args.folder_path.display());
    }

    let config = resolve_config(
        config_path,
        CliOverrides {
            max_depth: None,
            ignore_file: args.ignore_file,
            extra_ignores: parse_csv(&args.ignore).unwrap_or_default(),
        },
    )?;

    let request = FolderDumpRequest {
        root_directory: args.folder_path.clone(),
        output_file: args.output_file,
        ignore_file: config.ignore_file,
        extra_ignores: config.extra_ignores,
    };

    let summary = dump_repository(&LocalFs, &request)
        .with_context(|| format!("Failed dumping {}", args.folder_path.display()))?;
    println!("Wrote {} files to {}", summary.documents, summary.output_file.display());
    Ok(())
}
