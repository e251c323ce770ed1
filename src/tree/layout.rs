use super::{TreeEntry, TreeNode, BLANK_INDENT, BRANCH, LAST_BRANCH, PIPE_INDENT};

/// Lay the tree out depth-first, computing is_last flags and prefix strings.
pub fn flatten(root: &TreeNode) -> Vec<TreeEntry> {
    let mut entries = Vec::new();
    push_children(root, "", 1, &mut entries);
    entries
}

fn push_children(node: &TreeNode, ancestors: &str, depth: usize, out: &mut Vec<TreeEntry>) {
    let count = node.len();
    for (i, (name, child)) in node.children().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        out.push(TreeEntry {
            name: name.to_string(),
            depth,
            is_last,
            prefix: format!("{ancestors}{connector}"),
            first_seen: child.first_seen(),
        });

        // Children of a last sibling get blank space instead of a rail
        let continuation = if is_last { BLANK_INDENT } else { PIPE_INDENT };
        push_children(
            child,
            &format!("{ancestors}{continuation}"),
            depth + 1,
            out,
        );
    }
}

/// Render the tree as text: a `.` root line followed by one line per
/// directory. An empty tree renders as just `.`.
pub fn render_tree(root: &TreeNode) -> String {
    let mut out = String::from(".");
    for entry in flatten(root) {
        out.push('\n');
        out.push_str(&entry.prefix);
        out.push_str(&entry.name);
    }
    out
}

/// Character column of the branch connector on a rendered line, or `None`
/// for lines that are not tree entries (the root `.` line).
///
/// Only the continuation alphabet (`│` and spaces) may precede the
/// connector, so a directory name that happens to contain `├── ` does not
/// confuse the column.
pub fn branch_column(line: &str) -> Option<usize> {
    for (column, (offset, c)) in line.char_indices().enumerate() {
        match c {
            '\u{251c}' | '\u{2514}' => {
                let rest = &line[offset..];
                return (rest.starts_with(BRANCH) || rest.starts_with(LAST_BRANCH))
                    .then_some(column);
            }
            '\u{2502}' | ' ' => continue,
            _ => return None,
        }
    }
    None
}
