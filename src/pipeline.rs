//! The full text pipeline: parse, build, render, format, filter.

use tracing::debug;

use crate::filter::filter_tree;
use crate::format::format_tree;
use crate::tree::{build_tree, parse_paths, render_tree};

/// Presentation settings applied after the tree is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeOptions {
    /// Append `/` to every directory line.
    pub trailing_slash: bool,
    /// Append an aligned ` #` comment marker to every directory line.
    pub comment: bool,
    /// Filter query; empty keeps every line.
    pub query: String,
}

/// Render already split paths.
pub fn render_paths<I, S>(paths: I, options: &TreeOptions) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let root = build_tree(paths);
    let rendered = render_tree(&root);
    let formatted = format_tree(&rendered, options.trailing_slash, options.comment);
    filter_tree(&formatted, &options.query)
}

/// Render raw multi-line input text.
pub fn render_text(text: &str, options: &TreeOptions) -> String {
    let paths = parse_paths(text);
    debug!(
        paths = paths.len(),
        trailing_slash = options.trailing_slash,
        comment = options.comment,
        query = %options.query,
        "rendering"
    );
    render_paths(&paths, options)
}
