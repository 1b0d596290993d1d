//! Start/end delimited document blocks.

use crate::domain::CapturedDocument;
use crate::utils::display_relative;
use std::path::Path;

pub const TREE_HEADER: &str = "File Tree Structure:";

/// One `--- Start of <path> ---` / `--- End of <path> ---` block per
/// document, with paths relative to `root`.
pub fn render_blocks(documents: &[CapturedDocument], root: &Path) -> String {
    let mut out = String::new();
    for document in documents {
        let relative = display_relative(&document.location, root);
        push_block(&mut out, &relative, &document.content);
    }
    out
}

/// Tree header followed by the document blocks.
pub fn render_repository_dump(tree: &str, documents: &[CapturedDocument], root: &Path) -> String {
    let mut out = format!("{TREE_HEADER}\n{tree}\n\n");
    out.push_str(&render_blocks(documents, root));
    out
}

fn push_block(out: &mut String, relative: &str, content: &str) {
    out.push_str(&format!("--- Start of {relative} ---\n"));
    out.push_str(content);
    out.push('\n');
    out.push_str(&format!("--- End of {relative} ---\n\n"));
}
