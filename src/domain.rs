//! Core domain types shared by both dump pipelines.

use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// Default link-following depth for markdown dumps.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Default name of the ignore file read at the dump root.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// A file that was read into memory during a dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedDocument {
    pub location: PathBuf,
    pub content: String,
}

impl CapturedDocument {
    pub fn new(location: PathBuf, content: String) -> Self {
        Self { location, content }
    }
}

/// Parameters of a directory dump.
#[derive(Debug, Clone)]
pub struct FolderDumpRequest {
    pub root_directory: PathBuf,
    pub output_file: PathBuf,
    pub ignore_file: String,
    pub extra_ignores: Vec<String>,
}

impl FolderDumpRequest {
    pub fn new(root_directory: PathBuf, output_file: PathBuf) -> Self {
        Self {
            root_directory,
            output_file,
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
            extra_ignores: Vec::new(),
        }
    }
}

/// Parameters of a link-graph walk.
#[derive(Debug, Clone)]
pub struct TraversalRequest {
    /// Start document; `.md` is appended when missing.
    pub start_reference: String,
    pub output_target: PathBuf,
    /// Depth 0 captures only the start document.
    pub max_depth: usize,
    /// Directory links fall back to. Defaults to the start document's folder.
    pub base_directory: Option<PathBuf>,
}

impl TraversalRequest {
    pub fn new(start_reference: impl Into<String>, output_target: impl Into<PathBuf>) -> Self {
        Self {
            start_reference: start_reference.into(),
            output_target: output_target.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            base_directory: None,
        }
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn base_directory(mut self, base_directory: impl Into<PathBuf>) -> Self {
        self.base_directory = Some(base_directory.into());
        self
    }
}

/// Settings read from an optional config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_depth: usize,
    pub ignore_file: String,
    #[serde(deserialize_with = "deserialize_string_list")]
    pub extra_ignores: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
            extra_ignores: Vec::new(),
        }
    }
}

/// Accept either a list of strings or one comma-separated string.
fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    let items = match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => s.split(',').map(str::to_string).collect(),
        StringOrList::Many(list) => list,
    };
    Ok(items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}
