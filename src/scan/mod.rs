//! Directory scanning with ignore-rule support

use crate::error::{DumpError, Result};
use crate::fs::{DirEntry, FileSystem};
use std::path::Path;

pub mod collector;
pub mod ignore_rules;
pub mod tree;

pub use collector::collect_folder;
pub use ignore_rules::IgnoreRules;
pub use tree::render_tree;

/// List `dir`, drop ignored entries, and sort directories before files,
/// each group by name.
///
/// Only a failure to list `root` itself is an error. A subdirectory that
/// cannot be listed is logged and treated as empty.
pub(crate) fn list_visible(
    fs: &dyn FileSystem,
    root: &Path,
    dir: &Path,
    rules: &IgnoreRules,
) -> Result<Vec<DirEntry>> {
    let listing = match fs.list_dir(dir) {
        Ok(listing) => listing,
        Err(source) if dir == root => {
            return Err(DumpError::ListDir { path: dir.to_path_buf(), source });
        }
        Err(err) => {
            tracing::warn!("Error listing {}: {}", dir.display(), err);
            return Ok(Vec::new());
        }
    };

    let mut entries: Vec<DirEntry> = listing
        .into_iter()
        .filter(|entry| {
            let relative = entry.path.strip_prefix(root).unwrap_or(&entry.path);
            if rules.is_ignored(relative, entry.is_dir) {
                tracing::trace!("Ignoring {}", relative.display());
                return false;
            }
            true
        })
        .collect();

    entries.sort_by(|a, b| {
        let dir_cmp = b.is_dir.cmp(&a.is_dir);
        if dir_cmp == std::cmp::Ordering::Equal {
            a.name.cmp(&b.name)
        } else {
            dir_cmp
        }
    });

    Ok(entries)
}
