//! Shared path helpers

pub mod paths;

pub use paths::{display_relative, ensure_md_extension, normalize_lexically, normalize_path};
