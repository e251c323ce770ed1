use tracing::debug;

use super::TreeNode;

/// Split raw input text into path strings: one per line, trimmed, blank
/// lines dropped. Accepts `\n`, `\r\n` and bare `\r` line endings.
pub fn parse_paths(text: &str) -> Vec<String> {
    text.trim()
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a path on `/`, skipping empty segments produced by leading,
/// trailing or doubled slashes.
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// A final segment containing a dot names a file, not a directory.
fn is_file_marker(segment: &str) -> bool {
    segment.contains('.')
}

/// Build the directory tree for `paths`, processed in order.
///
/// Files (a last segment with a `.` in it) are not represented; only the
/// directories leading to them are. A child's position among its siblings is
/// fixed by the first path that mentions it.
pub fn build_tree<I, S>(paths: I) -> TreeNode
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = TreeNode::new();
    let mut path_count = 0;

    for (order, path) in paths.into_iter().enumerate() {
        path_count += 1;
        let segments: Vec<&str> = split_segments(path.as_ref()).collect();
        let mut node = &mut root;
        for (i, segment) in segments.iter().enumerate() {
            if i + 1 == segments.len() && is_file_marker(segment) {
                break;
            }
            node = node.child_or_insert(segment, order);
        }
    }

    debug!(paths = path_count, top_level = root.len(), "built tree");
    root
}
