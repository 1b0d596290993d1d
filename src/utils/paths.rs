//! Path normalization

use std::path::{Component, Path, PathBuf};

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes and normalize
    path.replace('\\', "/")
}

/// Append `.md` unless the reference already ends with it.
pub fn ensure_md_extension(reference: &str) -> String {
    if reference.ends_with(".md") {
        reference.to_string()
    } else {
        format!("{reference}.md")
    }
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` at the root of an absolute path is dropped; on a relative path with
/// nothing left to pop it is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().map(|c| c.as_os_str()).collect()
}

/// Render `path` relative to `root` with forward slashes.
///
/// Paths outside `root` get `../` segments; if no relative form exists the
/// path is rendered as-is.
pub fn display_relative(path: &Path, root: &Path) -> String {
    let relative = match path.strip_prefix(root) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf()),
    };
    normalize_path(&relative.to_string_lossy())
}
