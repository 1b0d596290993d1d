//! Link-graph dump: the start note and everything it links to.

use crate::domain::TraversalRequest;
use crate::dump::DumpSummary;
use crate::error::{DumpError, Result};
use crate::fs::FileSystem;
use crate::links::traverse_links;
use crate::render::render_blocks;

/// Walk the links from `request.start_reference` and write every captured
/// note to `request.output_target`.
///
/// Nothing is written when the start document is missing.
pub fn dump_markdown(fs: &dyn FileSystem, request: &TraversalRequest) -> Result<DumpSummary> {
    let traversal = traverse_links(fs, request)?;
    let rendered = render_blocks(&traversal.documents, &traversal.base_directory);

    let output = &request.output_target;
    fs.write_text(output, &rendered)
        .map_err(|source| DumpError::Write { path: output.clone(), source })?;
    tracing::info!("Wrote {} notes to {}", traversal.documents.len(), output.display());

    Ok(DumpSummary {
        output_file: output.clone(),
        documents: traversal.documents.len(),
        bytes: rendered.len(),
    })
}
