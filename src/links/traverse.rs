//! Depth-bounded, cycle-safe walk over linked markdown documents.
//!
//! The walk is a depth-first pre-order descent: each document is captured,
//! then each of its resolvable links is walked in full before the next sibling
//! link. Links are followed in the lexicographic order of their raw target
//! text, so when the depth bound cuts a walk short the output is still
//! deterministic.
//!
//! Only a missing start document is an error. Links that do not resolve, and
//! documents that cannot be read, are dropped with a log line.

use crate::domain::{CapturedDocument, TraversalRequest};
use crate::error::{DumpError, Result};
use crate::fs::{FileSystem, ReadOutcome};
use crate::links::{extract_links, resolve_link};
use crate::utils::{ensure_md_extension, normalize_lexically};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// Documents captured by one traversal, plus the base directory that links
/// were resolved against.
#[derive(Debug, Clone)]
pub struct Traversal {
    pub base_directory: PathBuf,
    pub documents: Vec<CapturedDocument>,
}

/// Walk the link graph described by `request`.
///
/// When the request carries no base directory, the start document's own
/// folder is used.
pub fn traverse_links(fs: &dyn FileSystem, request: &TraversalRequest) -> Result<Traversal> {
    let (base_directory, start) = locate_start(fs, request)?;
    tracing::debug!(
        "Traversing from {} (base {}, max depth {})",
        start.display(),
        base_directory.display(),
        request.max_depth
    );

    let walker = Walker { fs, base: &base_directory, max_depth: request.max_depth };
    let mut visited = HashSet::new();
    let mut documents = Vec::new();
    walker.visit(start, 0, &mut visited, &mut documents);

    tracing::info!("Captured {} linked documents", documents.len());
    Ok(Traversal { base_directory, documents })
}

/// Work out the base directory and the absolute start location.
///
/// With an explicit base the start reference is resolved against it only.
fn locate_start(fs: &dyn FileSystem, request: &TraversalRequest) -> Result<(PathBuf, PathBuf)> {
    let reference = ensure_md_extension(&request.start_reference);
    let reference_path = Path::new(&reference);

    let (base, start) = match &request.base_directory {
        Some(base) => {
            let base = absolutize(base)?;
            let start = normalize_lexically(&base.join(reference_path));
            (base, start)
        }
        None => {
            let start = absolutize(reference_path)?;
            let base = start.parent().map(Path::to_path_buf).unwrap_or_else(|| start.clone());
            (base, start)
        }
    };

    if !fs.is_file(&start) {
        return Err(DumpError::DocumentNotFound { path: start });
    }
    Ok((base, start))
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize_lexically(path))
    } else {
        Ok(normalize_lexically(&std::env::current_dir()?.join(path)))
    }
}

struct Walker<'a> {
    fs: &'a dyn FileSystem,
    base: &'a Path,
    max_depth: usize,
}

impl Walker<'_> {
    fn visit(
        &self,
        location: PathBuf,
        depth: usize,
        visited: &mut HashSet<PathBuf>,
        documents: &mut Vec<CapturedDocument>,
    ) {
        if !visited.insert(location.clone()) {
            tracing::trace!("Already visited {}", location.display());
            return;
        }

        let content = match self.fs.read_text(&location) {
            ReadOutcome::Text(content) => content,
            ReadOutcome::Unreadable(err) => {
                tracing::warn!("Error reading {}: {}", location.display(), err);
                return;
            }
        };

        let links = if depth < self.max_depth { extract_links(&content) } else { BTreeSet::new() };
        documents.push(CapturedDocument::new(location.clone(), content));

        for link in links {
            let Some(target) = resolve_link(self.fs, &link, &location, self.base) else {
                tracing::debug!("Unresolved link \"{}\" in {}", link, location.display());
                continue;
            };
            if visited.contains(&target) {
                tracing::trace!("Skipping already visited {}", target.display());
                continue;
            }
            self.visit(target, depth + 1, visited, documents);
        }
    }
}
