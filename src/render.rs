//! Tree rendering using ratatui Line/Span styling.

use crate::pipeline::TreeOptions;
use crate::tree::{branch_column, GLYPH_WIDTH};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Configuration for the rendering pipeline.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to emit color styling.
    pub use_color: bool,
    /// Current terminal width in columns.
    pub terminal_width: u16,
}

const ROOT_STYLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);
const DIR_STYLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);
const SLASH_STYLE: Style = Style::new().fg(Color::DarkGray);
const PREFIX_STYLE: Style = Style::new().fg(Color::White);
const COMMENT_STYLE: Style = Style::new().fg(Color::Green);
const QUERY_STYLE: Style = Style::new().fg(Color::Yellow);
const EDITING_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Shorten `input` to at most `max_cols` characters by replacing its middle
/// with `...`.
pub fn truncate_middle(input: &str, max_cols: usize) -> String {
    let len = input.chars().count();
    if len <= max_cols {
        return input.to_string();
    }
    if max_cols <= 3 {
        return ".".repeat(max_cols);
    }

    let keep = max_cols - 3;
    let head = keep / 2 + keep % 2;
    let tail = keep / 2;

    let prefix: String = input.chars().take(head).collect();
    let suffix: String = input.chars().skip(len - tail).collect();
    format!("{prefix}...{suffix}")
}

/// Convert pipeline output into styled ratatui `Line` objects, one per line.
pub fn tree_to_lines(text: &str, config: &RenderConfig) -> Vec<Line<'static>> {
    text.split('\n')
        .map(|line| tree_line(line, config))
        .collect()
}

/// Style a single output line: connector prefix, directory name, optional
/// trailing slash and optional comment marker.
fn tree_line(line: &str, config: &RenderConfig) -> Line<'static> {
    let safe = sanitize_terminal_text(line);
    let style = |s: Style| if config.use_color { s } else { Style::new() };

    let Some(column) = branch_column(&safe) else {
        return Line::from(Span::styled(safe, style(ROOT_STYLE)));
    };

    let split = safe
        .char_indices()
        .nth(column + GLYPH_WIDTH)
        .map_or(safe.len(), |(offset, _)| offset);
    let (prefix, rest) = safe.split_at(split);

    let (body, comment) = match rest.strip_suffix(" #") {
        Some(body) => {
            let name_end = body.trim_end_matches(' ').len();
            (&body[..name_end], &rest[name_end..])
        }
        None => (rest, ""),
    };
    let (name, slash) = match body.strip_suffix('/') {
        Some(name) => (name, "/"),
        None => (body, ""),
    };

    let mut spans = vec![
        Span::styled(prefix.to_string(), style(PREFIX_STYLE)),
        Span::styled(name.to_string(), style(DIR_STYLE)),
    ];
    if !slash.is_empty() {
        spans.push(Span::styled(slash.to_string(), style(SLASH_STYLE)));
    }
    if !comment.is_empty() {
        spans.push(Span::styled(comment.to_string(), style(COMMENT_STYLE)));
    }
    Line::from(spans)
}

/// Build the filter line shown under the tree.
pub fn query_line(query: &str, editing: bool, pending: bool) -> Line<'static> {
    let safe = sanitize_terminal_text(query);
    let mut spans = vec![Span::raw(" Filter: ")];
    if editing {
        spans.push(Span::styled(format!("{safe}_"), EDITING_STYLE));
    } else if safe.is_empty() {
        spans.push(Span::styled("(none)", Style::new().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(safe, QUERY_STYLE));
    }
    if pending {
        spans.push(Span::styled(" …", Style::new().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

/// Build a styled status bar `Line`.
pub fn status_bar_line(
    input_label: &str,
    options: &TreeOptions,
    line_count: usize,
    last_change: Option<&str>,
    note: Option<&str>,
    width: u16,
) -> Line<'static> {
    let change_text = match (note, last_change) {
        (Some(note), _) => sanitize_terminal_text(note),
        (None, Some(ts)) => format!("Last change: {}", sanitize_terminal_text(ts)),
        (None, None) => "No changes yet".to_string(),
    };
    let toggles = format!(
        "slash {}  comment {}",
        if options.trailing_slash { "on" } else { "off" },
        if options.comment { "on" } else { "off" },
    );
    let dirs = line_count.saturating_sub(1);

    let fixed = format!("  |  {dirs} dirs  |  {toggles}  |  {change_text}");
    let room = (width as usize)
        .saturating_sub(fixed.chars().count() + " Input: ".len())
        .max(12);
    let label = truncate_middle(&sanitize_terminal_text(input_label), room);
    let text = format!(" Input: {label}{fixed}");

    let style = Style::new()
        .fg(Color::White)
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);

    Line::from(Span::styled(text, style))
}

/// Build a help bar `Line` showing available keyboard shortcuts.
pub fn help_bar_line(editing: bool) -> Line<'static> {
    let text = if editing {
        " Type to filter (!word excludes)  |  Enter: Apply  |  Esc: Done  |  Backspace: Delete"
    } else {
        " q: Quit  |  /: Filter  |  s: Slash  |  c: Comment  |  x: Clear  |  r: Reload  |  ↑↓/jk: Scroll  |  PgUp/PgDn  |  Home/End"
    };
    let style = Style::new().fg(Color::DarkGray);
    Line::from(Span::styled(text.to_string(), style))
}

/// Extract plain text from a `Line` (useful for testing).
pub fn line_to_plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
