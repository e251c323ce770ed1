//! Tree building and layout computation for flat path lists.

mod build;
mod layout;

use std::collections::HashMap;

pub use build::{build_tree, parse_paths, split_segments};
pub use layout::{branch_column, flatten, render_tree};

/// Connector drawn before a child that has later siblings.
pub const BRANCH: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
/// Connector drawn before the last child of a node.
pub const LAST_BRANCH: &str = "\u{2514}\u{2500}\u{2500} "; // └──
/// Continuation under an ancestor that has later siblings.
pub const PIPE_INDENT: &str = "\u{2502}   "; // │
/// Continuation under an ancestor that was the last child.
pub const BLANK_INDENT: &str = "    ";
/// Width in characters of every connector and continuation above.
pub const GLYPH_WIDTH: usize = 4;

/// A directory node. Children keep the order in which their names were
/// first seen in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    first_seen: usize,
    children: Vec<(String, TreeNode)>,
    lookup: HashMap<String, usize>,
}

impl TreeNode {
    /// An empty root node (the implicit `.`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the input path that introduced this node.
    pub fn first_seen(&self) -> usize {
        self.first_seen
    }

    /// Children in first-seen order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = (&str, &TreeNode)> {
        self.children
            .iter()
            .map(|(name, node)| (name.as_str(), node))
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.lookup.get(name).map(|&slot| &self.children[slot].1)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Return the child called `name`, creating it with `order` as its
    /// first-seen index if it does not exist yet. Existing children keep
    /// their original position.
    pub(crate) fn child_or_insert(&mut self, name: &str, order: usize) -> &mut TreeNode {
        let slot = match self.lookup.get(name) {
            Some(&slot) => slot,
            None => {
                let slot = self.children.len();
                self.children.push((
                    name.to_string(),
                    TreeNode {
                        first_seen: order,
                        ..TreeNode::default()
                    },
                ));
                self.lookup.insert(name.to_string(), slot);
                slot
            }
        };
        &mut self.children[slot].1
    }
}

/// A single line of the laid-out tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Directory name (one path segment).
    pub name: String,
    /// Nesting depth (1 = direct child of root).
    pub depth: usize,
    /// Whether this is the last sibling in its parent group.
    pub is_last: bool,
    /// Continuation prefix plus connector, ready to print before `name`.
    pub prefix: String,
    /// Index of the input path that introduced this directory.
    pub first_seen: usize,
}

impl TreeEntry {
    /// The full rendered line.
    pub fn line(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }
}
