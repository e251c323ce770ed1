mod common;

use common::{render, BRANCH_TREE};
use pathtree::filter::filter_tree;
use pathtree::format::format_tree;
use pathtree::tree::{branch_column, GLYPH_WIDTH};

/// Every entry line must sit exactly one level below the nearest shallower
/// line above it.
fn assert_no_orphans(text: &str) {
    let mut columns: Vec<usize> = Vec::new();
    for line in text.lines() {
        let Some(column) = branch_column(line) else {
            columns.clear();
            continue;
        };
        while columns.last().is_some_and(|&c| c >= column) {
            columns.pop();
        }
        let expected = columns.last().map_or(0, |c| c + GLYPH_WIDTH);
        assert_eq!(column, expected, "orphaned line {line:?} in\n{text}");
        columns.push(column);
    }
}

#[test]
fn test_filter_keeps_ancestors() {
    let out = filter_tree(BRANCH_TREE, "y");
    assert_eq!(
        out,
        ".\n\u{251c}\u{2500}\u{2500} a\n\u{2502}   \u{2514}\u{2500}\u{2500} y"
    );
    assert_no_orphans(&out);
}

#[test]
fn test_exclude_takes_precedence() {
    let out = filter_tree(BRANCH_TREE, "a !y");
    assert_eq!(out, ".\n\u{251c}\u{2500}\u{2500} a");
}

#[test]
fn test_exclude_only_keeps_the_rest() {
    let out = filter_tree(BRANCH_TREE, "!x");
    assert_eq!(
        out,
        ".\n\
\u{251c}\u{2500}\u{2500} a\n\
\u{2502}   \u{2514}\u{2500}\u{2500} y\n\
\u{2514}\u{2500}\u{2500} b"
    );
}

#[test]
fn test_excluded_directory_drops_its_subtree() {
    let out = filter_tree(BRANCH_TREE, "!a");
    assert_eq!(out, ".\n\u{2514}\u{2500}\u{2500} b");
    assert_no_orphans(&out);
}

#[test]
fn test_include_under_excluded_parent_is_dropped() {
    let out = filter_tree(BRANCH_TREE, "y !a");
    assert_eq!(out, ".");
}

#[test]
fn test_matching_directory_does_not_bring_children() {
    let tree = render(&["src/core/a.rs", "src/util/b.rs", "docs/x.md"]);
    let out = filter_tree(&tree, "src");
    assert_eq!(out, ".\n\u{251c}\u{2500}\u{2500} src");
}

#[test]
fn test_empty_query_is_identity() {
    assert_eq!(filter_tree(BRANCH_TREE, ""), BRANCH_TREE);
    assert_eq!(filter_tree(BRANCH_TREE, "  \t "), BRANCH_TREE);
}

#[test]
fn test_root_always_kept() {
    assert_eq!(filter_tree(BRANCH_TREE, "nothing-matches-this"), ".");
    assert_eq!(filter_tree(".", "a"), ".");
}

#[test]
fn test_slash_pattern_against_formatted_tree() {
    let formatted = format_tree(BRANCH_TREE, true, false);
    let out = filter_tree(&formatted, "x/");
    assert_eq!(
        out,
        ".\n\u{251c}\u{2500}\u{2500} a/\n\u{2502}   \u{251c}\u{2500}\u{2500} x/"
    );
}

#[test]
fn test_regex_metacharacters_are_literal() {
    let tree = render(&["a+b/f.rs", "aab/f.rs", "c(1)/f.rs"]);
    assert_eq!(filter_tree(&tree, "a+b"), ".\n\u{251c}\u{2500}\u{2500} a+b");
    assert_eq!(filter_tree(&tree, "(1)"), ".\n\u{2514}\u{2500}\u{2500} c(1)");
    assert_eq!(filter_tree(&tree, "["), ".");
}

#[test]
fn test_case_insensitive() {
    let tree = render(&["Docs/a.md", "src/b.rs"]);
    assert_eq!(filter_tree(&tree, "DOCS"), ".\n\u{251c}\u{2500}\u{2500} Docs");
}

#[test]
fn test_multiple_includes_union() {
    let tree = render(&["alpha/1.rs", "beta/gamma/2.rs", "delta/3.rs"]);
    let out = filter_tree(&tree, "gamma delta");
    assert_eq!(
        out,
        ".\n\
\u{251c}\u{2500}\u{2500} beta\n\
\u{2502}   \u{2514}\u{2500}\u{2500} gamma\n\
\u{2514}\u{2500}\u{2500} delta"
    );
    assert_no_orphans(&out);
}

#[test]
fn test_commented_tree_survives_filtering() {
    let formatted = format_tree(BRANCH_TREE, false, true);
    let out = filter_tree(&formatted, "y");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].starts_with("\u{2502}   \u{2514}\u{2500}\u{2500} y"));
    assert!(lines[1..].iter().all(|l| l.ends_with(" #")));
}

#[test]
fn test_deep_tree_never_orphans() {
    let tree = render(&[
        "a/b/c/d/e.rs",
        "a/b/x/y.rs",
        "a/q/r.rs",
        "z/b/c/w.rs",
        "z/k.rs",
    ]);
    for query in ["c", "b", "!b", "x !c", "w", "d !a", "k q"] {
        assert_no_orphans(&filter_tree(&tree, query));
    }
}
