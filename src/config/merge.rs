//! CLI overrides on top of file config

use crate::domain::Config;

/// Values given on the command line; `None`/empty means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub max_depth: Option<usize>,
    pub ignore_file: Option<String>,
    pub extra_ignores: Vec<String>,
}

/// Apply CLI values over `config`. Extra ignore patterns accumulate, file
/// patterns first.
pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(depth) = cli.max_depth {
        config.max_depth = depth;
    }
    if let Some(ignore_file) = cli.ignore_file {
        config.ignore_file = ignore_file;
    }
    config.extra_ignores.extend(cli.extra_ignores);
    config
}
