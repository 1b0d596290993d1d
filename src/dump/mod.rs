//! Dump writers: one artifact per request

pub mod markdown;
pub mod repository;

pub use markdown::dump_markdown;
pub use repository::dump_repository;

use std::path::PathBuf;

/// What a dump wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSummary {
    pub output_file: PathBuf,
    pub documents: usize,
    pub bytes: usize,
}
