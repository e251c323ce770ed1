//! Cosmetic formatting of a rendered tree: trailing slashes and aligned
//! `#` comment markers.

use crate::tree::branch_column;

/// Decorate every tree entry line of `rendered`.
///
/// The comment column is computed from the widest line of the undecorated
/// input. Padding is `max - len + 1` without trailing slashes and
/// `max - len` with them, so the `#` markers land in the same column in both
/// modes. With both toggles off the input is returned unchanged.
pub fn format_tree(rendered: &str, trailing_slash: bool, comment: bool) -> String {
    if !trailing_slash && !comment {
        return rendered.to_string();
    }

    let max_len = rendered
        .split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    rendered
        .split('\n')
        .map(|line| decorate_line(line, max_len, trailing_slash, comment))
        .collect::<Vec<_>>()
        .join("\n")
}

fn decorate_line(line: &str, max_len: usize, trailing_slash: bool, comment: bool) -> String {
    if branch_column(line).is_none() {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + max_len + 3);
    out.push_str(line);
    if trailing_slash {
        out.push('/');
    }
    if comment {
        let len = line.chars().count();
        let pad = max_len - len + usize::from(!trailing_slash);
        out.extend(std::iter::repeat(' ').take(pad));
        out.push_str(" #");
    }
    out
}
