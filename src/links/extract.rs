//! Outbound reference extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// `[[target]]` or `[[target|alias]]`, shortest match.
static WIKI_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.*?)\]\]").expect("valid regex"));

/// `[text](target)`.
static MARKDOWN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\]\(([^)]+)\)").expect("valid regex"));

const EXTERNAL_SCHEMES: &[&str] = &["http://", "https://", "ftp://"];

/// Distinct link targets found in `content`, with aliases and `#anchors` removed.
///
/// The set iterates in lexicographic order, which is the order the traverser
/// follows links in.
pub fn extract_links(content: &str) -> BTreeSet<String> {
    let wiki_targets = WIKI_LINK.captures_iter(content).map(|caps| {
        let inner = caps.get(1).map_or("", |m| m.as_str());
        inner.split('|').next().unwrap_or("")
    });

    let markdown_targets = MARKDOWN_LINK
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .filter(|target| !is_external(target));

    wiki_targets.chain(markdown_targets).map(|target| strip_anchor(target).to_string()).collect()
}

fn is_external(target: &str) -> bool {
    EXTERNAL_SCHEMES.iter().any(|scheme| target.starts_with(scheme))
}

fn strip_anchor(target: &str) -> &str {
    target.split('#').next().unwrap_or("")
}
