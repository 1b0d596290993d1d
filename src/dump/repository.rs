//! Directory dump: file tree followed by every file's content.

use crate::domain::FolderDumpRequest;
use crate::dump::DumpSummary;
use crate::error::{DumpError, Result};
use crate::fs::FileSystem;
use crate::render::render_repository_dump;
use crate::scan::{collect_folder, render_tree, IgnoreRules};

/// Dump `request.root_directory` into `request.output_file`.
///
/// The root must already exist; unreadable files are left out of the
/// artifact without failing the dump.
pub fn dump_repository(fs: &dyn FileSystem, request: &FolderDumpRequest) -> Result<DumpSummary> {
    let root = &request.root_directory;
    let rules = IgnoreRules::load(fs, root, &request.ignore_file, &request.extra_ignores)?;
    tracing::debug!("Built {} ignore rules for {}", rules.len(), root.display());

    let tree = render_tree(fs, root, &rules)?;
    let documents = collect_folder(fs, root, &rules)?;
    let rendered = render_repository_dump(&tree, &documents, root);

    fs.write_text(&request.output_file, &rendered)
        .map_err(|source| DumpError::Write { path: request.output_file.clone(), source })?;
    tracing::info!(
        "Wrote {} files ({} bytes) to {}",
        documents.len(),
        rendered.len(),
        request.output_file.display()
    );

    Ok(DumpSummary {
        output_file: request.output_file.clone(),
        documents: documents.len(),
        bytes: rendered.len(),
    })
}
