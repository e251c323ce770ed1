mod common;

use common::{color_render_config, no_color_render_config, BRANCH_TREE};
use pathtree::pipeline::TreeOptions;
use pathtree::render::{
    help_bar_line, line_to_plain_text, query_line, status_bar_line, tree_to_lines,
};
use ratatui::style::{Color, Modifier};

// --- Plain text round trip ---

#[test]
fn test_tree_to_lines_preserves_text_without_color() {
    let lines = tree_to_lines(BRANCH_TREE, &no_color_render_config(120));
    assert_eq!(lines.len(), 5);
    let text: Vec<String> = lines.iter().map(line_to_plain_text).collect();
    assert_eq!(text.join("\n"), BRANCH_TREE);
    for line in &lines {
        for span in &line.spans {
            assert_eq!(span.style.fg, None, "no color expected on {:?}", span);
        }
    }
}

#[test]
fn test_directory_name_is_bold_blue() {
    let lines = tree_to_lines(BRANCH_TREE, &color_render_config(120));
    let name_span = lines[2]
        .spans
        .iter()
        .find(|s| s.content.as_ref() == "x")
        .unwrap();
    assert_eq!(name_span.style.fg, Some(Color::Blue), "Directory should be blue");
    assert!(
        name_span.style.add_modifier.contains(Modifier::BOLD),
        "Directory should be bold"
    );

    let prefix_span = &lines[2].spans[0];
    assert_eq!(prefix_span.content.as_ref(), "\u{2502}   \u{251c}\u{2500}\u{2500} ");
    assert_eq!(prefix_span.style.fg, Some(Color::White), "Prefix should be white");
}

#[test]
fn test_trailing_slash_and_comment_get_own_spans() {
    let text = ".\n\u{2514}\u{2500}\u{2500} src/ #";
    let lines = tree_to_lines(text, &color_render_config(120));
    let parts: Vec<&str> = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(parts, vec!["\u{2514}\u{2500}\u{2500} ", "src", "/", " #"]);
    assert_eq!(lines[1].spans[2].style.fg, Some(Color::DarkGray));
    assert_eq!(lines[1].spans[3].style.fg, Some(Color::Green));
}

#[test]
fn test_root_line_styled_as_directory() {
    let lines = tree_to_lines(".", &color_render_config(80));
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].spans[0].style.fg, Some(Color::Blue));
}

// --- Bars ---

#[test]
fn test_query_line_states() {
    assert!(line_to_plain_text(&query_line("", false, false)).contains("(none)"));
    assert!(line_to_plain_text(&query_line("src", true, false)).ends_with("src_"));
    assert!(line_to_plain_text(&query_line("src", false, true)).contains("…"));
}

#[test]
fn test_status_bar_reports_toggles_and_count() {
    let options = TreeOptions {
        trailing_slash: true,
        comment: false,
        query: String::new(),
    };
    let bar = status_bar_line("paths.txt", &options, 5, Some("12:34:56"), None, 200);
    let text = line_to_plain_text(&bar);
    assert!(text.contains("paths.txt"));
    assert!(text.contains("4 dirs"), "root line is not a directory: {text}");
    assert!(text.contains("slash on"));
    assert!(text.contains("comment off"));
    assert!(text.contains("Last change: 12:34:56"));
}

#[test]
fn test_status_bar_note_replaces_timestamp() {
    let bar = status_bar_line(
        "paths.txt",
        &TreeOptions::default(),
        1,
        Some("12:34:56"),
        Some("Input file removed"),
        200,
    );
    let text = line_to_plain_text(&bar);
    assert!(text.contains("Input file removed"));
    assert!(!text.contains("12:34:56"));
}

#[test]
fn test_status_bar_truncates_long_label() {
    let label = format!("/very/{}/paths.txt", "deep/".repeat(40));
    let bar = status_bar_line(&label, &TreeOptions::default(), 1, None, None, 80);
    let text = line_to_plain_text(&bar);
    assert!(text.contains("..."), "long label should be shortened: {text}");
    assert!(text.contains("No changes yet"));
}

#[test]
fn test_help_bar_switches_with_mode() {
    assert!(line_to_plain_text(&help_bar_line(false)).contains("q: Quit"));
    assert!(line_to_plain_text(&help_bar_line(true)).contains("Enter: Apply"));
}
