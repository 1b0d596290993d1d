//! llm-dump: concatenate related files into one document for LLM context windows.
//!
//! Two pipelines share one data model ([`domain::CapturedDocument`]):
//! - a directory dump that honors ignore rules and prints a file tree
//!   ([`dump::dump_repository`]);
//! - a link-graph dump that follows `[[wiki]]` and `[markdown](links)` out of
//!   one note up to a depth bound ([`dump::dump_markdown`]).

pub mod cli;
pub mod config;
pub mod domain;
pub mod dump;
pub mod error;
pub mod fs;
pub mod links;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::{CapturedDocument, Config, FolderDumpRequest, TraversalRequest};
pub use error::{DumpError, Result};
