//! Library error type

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = DumpError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DumpError {
    /// The start document of a link-graph traversal is missing.
    #[error("Document not found: {}", .path.display())]
    DocumentNotFound { path: PathBuf },

    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed listing directory {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed writing output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed building ignore rules: {0}")]
    IgnoreRules(#[from] ignore::Error),
}
