//! Shared CLI utilities.

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::Config;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}

/// Load the config file (explicit or discovered in the working directory)
/// and apply CLI overrides.
pub fn resolve_config(config_path: Option<&Path>, overrides: CliOverrides) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed reading current directory")?;
    let config = load_config(&cwd, config_path)?;
    Ok(merge_cli_with_config(config, overrides))
}
