#![forbid(unsafe_code)]
//! Pathtree — render a flat list of paths as a directory tree.
//!
//! The core is a pure text pipeline: [`tree::build_tree`] →
//! [`tree::render_tree`] → [`format::format_tree`] → [`filter::filter_tree`],
//! bundled as [`pipeline::render_text`]. The remaining modules drive the
//! `pathtree` binary and its live watch view.

pub mod cli;
pub mod debounce;
pub mod event_loop;
pub mod filter;
pub mod format;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod terminal;
pub mod tree;
pub mod watcher;

pub use filter::filter_tree;
pub use format::format_tree;
pub use pipeline::{render_paths, render_text, TreeOptions};
pub use tree::{build_tree, render_tree, TreeNode};
