//! Filesystem access capability.
//!
//! Every component that touches the disk goes through [`FileSystem`], so a
//! caller can wrap or replace the local implementation (for example to log or
//! fail individual reads).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

/// Result of reading a whole file as text.
#[derive(Debug)]
pub enum ReadOutcome {
    Text(String),
    Unreadable(io::Error),
}

impl ReadOutcome {
    pub fn into_text(self) -> Option<String> {
        match self {
            ReadOutcome::Text(text) => Some(text),
            ReadOutcome::Unreadable(_) => None,
        }
    }
}

pub trait FileSystem {
    /// List the immediate children of `dir`, in no particular order.
    ///
    /// Symbolic links to directories and dangling links are left out; links to
    /// files are listed as files.
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;

    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Read the whole file as UTF-8. Missing files, permission problems and
    /// invalid UTF-8 all come back as [`ReadOutcome::Unreadable`].
    fn read_text(&self, path: &Path) -> ReadOutcome;

    /// Create or truncate `path` and write `contents` to it.
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type()?;
            if file_type.is_symlink() {
                match fs::metadata(&path) {
                    Ok(target) if target.is_file() => {}
                    _ => {
                        tracing::debug!("Skipping symlink {}", path.display());
                        continue;
                    }
                }
            }
            entries.push(DirEntry {
                is_dir: file_type.is_dir(),
                path,
                name: entry.file_name().to_string_lossy().to_string(),
            });
        }
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_text(&self, path: &Path) -> ReadOutcome {
        match fs::read_to_string(path) {
            Ok(text) => ReadOutcome::Text(text),
            Err(err) => ReadOutcome::Unreadable(err),
        }
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}
