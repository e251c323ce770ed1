//! Include/exclude line filtering for rendered trees.
//!
//! A query is a whitespace-separated list of patterns. Patterns starting with
//! `!` exclude matching lines, all others include them. Patterns match
//! literally and case-insensitively anywhere in a line.
//!
//! Filtering never leaves an orphan behind: an included line brings its
//! ancestor lines with it, and an excluded line takes its whole subtree away.

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::tree::{branch_column, GLYPH_WIDTH};

/// How a single line fares against a query, before structural repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Matches an include pattern, or there are no include patterns.
    Include,
    /// Matches nothing; survives only as an ancestor of an included line.
    Neutral,
    /// Matches an exclude pattern.
    Exclude,
}

/// A parsed filter query.
#[derive(Debug, Clone, Default)]
pub struct Query {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl Query {
    pub fn parse(query: &str) -> Self {
        let mut parsed = Query::default();
        for token in query.split_whitespace() {
            let (pattern, is_exclude) = match token.strip_prefix('!') {
                Some(rest) => (rest, true),
                None => (token, false),
            };
            if pattern.is_empty() {
                continue;
            }
            let Some(regex) = compile_pattern(pattern) else {
                continue;
            };
            if is_exclude {
                parsed.exclude.push(regex);
            } else {
                parsed.include.push(regex);
            }
        }
        parsed
    }

    /// True when the query has no usable patterns.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Judge one line on its own, ignoring tree structure.
    pub fn verdict(&self, line: &str) -> Verdict {
        if self.exclude.iter().any(|re| re.is_match(line)) {
            Verdict::Exclude
        } else if self.include.is_empty() || self.include.iter().any(|re| re.is_match(line)) {
            Verdict::Include
        } else {
            Verdict::Neutral
        }
    }
}

/// Patterns with a `/` match as written; bare names may be flanked by slashes.
fn compile_pattern(pattern: &str) -> Option<Regex> {
    let escaped = regex::escape(pattern);
    let source = if pattern.contains('/') {
        escaped
    } else {
        format!(".*[/]?{escaped}[/]?.*")
    };
    match RegexBuilder::new(&source).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!(pattern, error = %e, "skipping filter pattern");
            None
        }
    }
}

struct Frame {
    column: usize,
    line: usize,
    severed: bool,
}

/// Filter a rendered (and possibly formatted) tree with `query`.
///
/// Lines without a branch connector, such as the `.` root, are always kept.
/// An empty query returns the input unchanged.
pub fn filter_tree(formatted: &str, query: &str) -> String {
    let query = Query::parse(query);
    if query.is_empty() {
        return formatted.to_string();
    }

    let lines: Vec<&str> = formatted.split('\n').collect();
    let mut keep = vec![false; lines.len()];
    let mut stack: Vec<Frame> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(column) = branch_column(line) else {
            keep[i] = true;
            stack.clear();
            continue;
        };

        while stack.last().is_some_and(|frame| frame.column >= column) {
            stack.pop();
        }

        let parent = stack.last();
        let expected = parent.map_or(0, |frame| frame.column + GLYPH_WIDTH);
        let verdict = query.verdict(line);
        let severed = parent.is_some_and(|frame| frame.severed)
            || column != expected
            || verdict == Verdict::Exclude;

        if !severed && verdict == Verdict::Include {
            keep[i] = true;
            for frame in stack.iter().rev() {
                if keep[frame.line] {
                    break;
                }
                keep[frame.line] = true;
            }
        }

        stack.push(Frame {
            column,
            line: i,
            severed,
        });
    }

    let kept: Vec<&str> = lines
        .iter()
        .zip(&keep)
        .filter_map(|(line, &kept)| kept.then_some(*line))
        .collect();
    debug!(before = lines.len(), after = kept.len(), "filtered tree");
    kept.join("\n")
}
