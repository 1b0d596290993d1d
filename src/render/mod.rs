//! Output rendering

pub mod blocks;

pub use blocks::{render_blocks, render_repository_dump, TREE_HEADER};
