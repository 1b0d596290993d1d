//! Link target resolution.

use crate::fs::FileSystem;
use crate::utils::{ensure_md_extension, normalize_lexically};
use std::path::{Path, PathBuf};

/// Resolve `reference`, found in the document at `containing`, to an existing
/// markdown file.
///
/// - `../rest` resolves `rest` against the containing document's grandparent
///   directory and nothing else.
/// - Any other reference is joined to the containing document's directory. If
///   that path does not exist as written, it is joined to `base` instead.
///
/// The chosen path then gets a `.md` suffix and must be a regular file.
/// Returns `None` for empty references and targets that do not exist.
pub fn resolve_link(
    fs: &dyn FileSystem,
    reference: &str,
    containing: &Path,
    base: &Path,
) -> Option<PathBuf> {
    if reference.is_empty() {
        return None;
    }

    let chosen = choose_candidate(fs, reference, containing, base)?;
    let candidate = normalize_lexically(&with_md_suffix(&chosen)?);
    fs.is_file(&candidate).then_some(candidate)
}

/// Pick the location to try, before the `.md` suffix is applied.
fn choose_candidate(
    fs: &dyn FileSystem,
    reference: &str,
    containing: &Path,
    base: &Path,
) -> Option<PathBuf> {
    let document_dir = containing.parent();

    if let Some(rest) = reference.strip_prefix("../") {
        return document_dir.and_then(Path::parent).map(|grandparent| grandparent.join(rest));
    }

    // Checked as written, before the `.md` suffix.
    match document_dir.map(|dir| dir.join(reference)) {
        Some(local) if fs.exists(&local) => Some(local),
        _ => Some(base.join(reference)),
    }
}

/// Apply the `.md` suffix to `path`; `None` if the path is not valid UTF-8.
fn with_md_suffix(path: &Path) -> Option<PathBuf> {
    path.to_str().map(|p| PathBuf::from(ensure_md_extension(p)))
}
