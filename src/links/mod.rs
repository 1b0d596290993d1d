//! Link-graph collection for markdown vaults

pub mod extract;
pub mod resolve;
pub mod traverse;

pub use extract::extract_links;
pub use resolve::resolve_link;
pub use traverse::{traverse_links, Traversal};
