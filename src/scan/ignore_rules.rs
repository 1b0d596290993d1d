//! Ignore rule set for directory dumps.
//!
//! Rules come from the ignore file at the dump root (if any), then any extra
//! patterns supplied by the caller, then the built-in version-control rules.
//! Pattern semantics are gitignore's, delegated to the `ignore` crate.

use crate::error::Result;
use crate::fs::FileSystem;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Path, PathBuf};

/// Always applied, even when no ignore file exists.
pub const VCS_RULES: &[&str] = &[".git/", ".git/**/*"];

/// Compiled ignore rules, queried with paths relative to the dump root.
pub struct IgnoreRules {
    matcher: Gitignore,
}

impl IgnoreRules {
    /// Build the rule set for `root`.
    ///
    /// Invalid patterns are logged and skipped rather than failing the dump.
    pub fn load(
        fs: &dyn FileSystem,
        root: &Path,
        ignore_file: &str,
        extra_patterns: &[String],
    ) -> Result<Self> {
        let mut builder = GitignoreBuilder::new(root);

        let ignore_path = root.join(ignore_file);
        if fs.exists(&ignore_path) {
            match fs.read_text(&ignore_path).into_text() {
                Some(text) => {
                    let mut count = 0usize;
                    for line in text.lines() {
                        if add_rule(&mut builder, Some(ignore_path.as_path()), line) {
                            count += 1;
                        }
                    }
                    tracing::debug!("Loaded {} rules from {}", count, ignore_path.display());
                }
                None => {
                    tracing::warn!("Could not read ignore file {}", ignore_path.display());
                }
            }
        }

        for pattern in extra_patterns {
            add_rule(&mut builder, None, pattern);
        }
        for pattern in VCS_RULES {
            add_rule(&mut builder, None, pattern);
        }

        Ok(Self { matcher: builder.build()? })
    }

    /// Only the built-in version-control rules.
    pub fn builtin(root: &Path) -> Result<Self> {
        let mut builder = GitignoreBuilder::new(root);
        for pattern in VCS_RULES {
            add_rule(&mut builder, None, pattern);
        }
        Ok(Self { matcher: builder.build()? })
    }

    /// True if `relative_path` (or one of its parent directories) is ignored.
    pub fn is_ignored(&self, relative_path: &Path, is_dir: bool) -> bool {
        self.matcher.matched_path_or_any_parents(relative_path, is_dir).is_ignore()
    }

    pub fn len(&self) -> usize {
        self.matcher.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }
}

fn add_rule(builder: &mut GitignoreBuilder, source: Option<&Path>, line: &str) -> bool {
    let trimmed = line.trim_end();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }
    match builder.add_line(source.map(PathBuf::from), trimmed) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Skipping invalid ignore pattern \"{}\": {}", trimmed, e);
            false
        }
    }
}
