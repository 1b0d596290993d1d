//! Folder content collection.

use crate::domain::CapturedDocument;
use crate::error::Result;
use crate::fs::{FileSystem, ReadOutcome};
use crate::scan::{list_visible, IgnoreRules};
use std::path::Path;

/// Read every non-ignored file under `root`.
///
/// Documents come back in the same order the tree renders them: depth-first,
/// directories before files, each group by name. Unreadable files (including
/// non-UTF-8 ones) are logged and skipped.
pub fn collect_folder(
    fs: &dyn FileSystem,
    root: &Path,
    rules: &IgnoreRules,
) -> Result<Vec<CapturedDocument>> {
    let mut documents = Vec::new();
    collect_dir(fs, root, root, rules, &mut documents)?;
    tracing::debug!("Collected {} files under {}", documents.len(), root.display());
    Ok(documents)
}

fn collect_dir(
    fs: &dyn FileSystem,
    root: &Path,
    dir: &Path,
    rules: &IgnoreRules,
    documents: &mut Vec<CapturedDocument>,
) -> Result<()> {
    for entry in list_visible(fs, root, dir, rules)? {
        if entry.is_dir {
            collect_dir(fs, root, &entry.path, rules, documents)?;
            continue;
        }

        match fs.read_text(&entry.path) {
            ReadOutcome::Text(content) => {
                documents.push(CapturedDocument::new(entry.path, content));
            }
            ReadOutcome::Unreadable(err) => {
                tracing::warn!("Error reading {}: {}", entry.path.display(), err);
            }
        }
    }
    Ok(())
}
