use todo::icons::{IconService, IconTheme};
use todo::ui::{ColumnLayout, RenderMode, TableRenderer};
use todo::utils::color::Palette;
use todo::Todo;

fn todo(id: i64, name: &str, content: &str, priority: i32, completed: bool) -> Todo {
    Todo {
        id,
        name: name.to_string(),
        content: content.to_string(),
        priority,
        completed,
    }
}

fn sample() -> Vec<Todo> {
    vec![
        todo(1, "Buy milk", "semi-skimmed", 3, false),
        todo(2, "Write report", &"quarterly numbers ".repeat(12), 2, false),
        todo(17, &"a very long todo name ".repeat(4), "", 1, true),
    ]
}

/// Text of one cell (0 = id ... 4 = completed) in an uncolored body line
fn cell(line: &str, column: usize) -> String {
    line.split('|').nth(column + 1).unwrap_or_default().trim().to_string()
}

#[test]
fn test_every_line_matches_terminal_width() {
    for width in [80u16, 81, 99, 120, 157, 240] {
        let renderer = TableRenderer::new(width, 40);
        let (mode, lines) = renderer.render_lines(&sample());
        assert_eq!(mode, RenderMode::Table);

        for line in lines {
            let visible = strip_ansi_escapes::strip_str(&line);
            assert_eq!(visible.chars().count(), usize::from(width), "width {width}: {visible:?}");
        }
    }
}

#[test]
fn test_frame_structure() {
    let renderer = TableRenderer::new(100, 30).with_palette(Palette::plain());
    let todos = vec![todo(1, "one", "", 1, false), todo(2, "two", "", 1, false)];
    let (_, lines) = renderer.render_lines(&todos);

    // top, header, divider, (row, divider) per todo, footer
    assert_eq!(lines.len(), 3 + 2 * 2 + 1);
    assert!(lines[0].starts_with("+=") && lines[0].ends_with("=+"));
    assert_eq!(lines[2], lines[0]);
    assert!(lines[4].starts_with("+-") && lines[4].ends_with("-+"));
    assert_eq!(lines[4], lines[6]);
    assert_eq!(lines.last(), Some(&lines[0]));

    let header: Vec<String> = (0..5).map(|column| cell(&lines[1], column)).collect();
    assert_eq!(header, ["ID", "Name", "Content", "Priority", "Completed"]);
}

#[test]
fn test_empty_list_renders_header_and_footer() {
    let renderer = TableRenderer::new(80, 24);
    let mut out = Vec::new();
    let mode = renderer.render(&mut out, &[]).unwrap();
    let text = strip_ansi_escapes::strip_str(String::from_utf8(out).unwrap());

    assert_eq!(mode, RenderMode::Table);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains("Priority"));
    assert!(lines[3].starts_with("+="));
}

#[test]
fn test_wrapped_content_is_complete() {
    let icons = IconService::default();
    let layout = ColumnLayout::compute(100, &[todo(1, "n", "", 1, false)], &icons).unwrap();
    let width = layout.content;

    let content: String = ('a'..='z').cycle().take(3 * width + 5).collect();
    let renderer = TableRenderer::new(100, 30).with_palette(Palette::plain());
    let (_, lines) = renderer.render_lines(&[todo(1, "n", &content, 1, false)]);

    let body = &lines[3..lines.len() - 2];
    assert_eq!(body.len(), 4);

    let chunks: Vec<String> = body.iter().map(|line| cell(line, 2)).collect();
    assert_eq!(chunks[0].chars().count(), width);
    assert_eq!(chunks[3].chars().count(), 5);
    assert_eq!(chunks.concat(), content);
    assert_eq!(chunks[3], content.chars().skip(3 * width).collect::<String>());
}

#[test]
fn test_row_height_follows_longer_column() {
    let renderer = TableRenderer::new(80, 24).with_palette(Palette::plain());
    let layout = ColumnLayout::compute(80, &[todo(5, "n", "", 1, false)], &IconService::default()).unwrap();
    let name = "n".repeat(layout.name * 2 + 1);
    let (_, lines) = renderer.render_lines(&[todo(5, &name, "short", 1, false)]);

    let body = &lines[3..lines.len() - 2];
    assert_eq!(body.len(), 3);
    assert_eq!(cell(&body[0], 0), "5");
    assert_eq!(cell(&body[0], 2), "short");
    assert_eq!(cell(&body[1], 0), "");
    assert_eq!(cell(&body[1], 2), "");
    assert_eq!(cell(&body[2], 1), "n");
}

#[test]
fn test_completion_markers() {
    let renderer = TableRenderer::new(90, 24).with_palette(Palette::plain());
    let todos = vec![todo(1, "open", "", 1, false), todo(2, "done", "", 1, true)];
    let (_, lines) = renderer.render_lines(&todos);
    assert_eq!(cell(&lines[3], 4), "\u{2717}");
    assert_eq!(cell(&lines[5], 4), "\u{2713}");

    let ascii = renderer.with_icons(IconService::new(IconTheme::Ascii));
    let (_, lines) = ascii.render_lines(&todos);
    assert_eq!(cell(&lines[3], 4), "[ ]");
    assert_eq!(cell(&lines[5], 4), "[X]");
}

#[test]
fn test_colored_output_resets_at_end() {
    let renderer = TableRenderer::new(80, 24).with_palette(Palette::ansi());
    let (_, lines) = renderer.render_lines(&sample());

    assert!(lines[0].contains('\u{1b}'));
    assert!(lines.last().unwrap().ends_with(&Palette::ansi().reset));
}

#[test]
fn test_control_characters_do_not_break_rows() {
    let renderer = TableRenderer::new(80, 24).with_palette(Palette::plain());
    let (_, lines) = renderer.render_lines(&[todo(1, "line\nbreak", "tab\there", 1, false)]);

    assert!(lines.iter().all(|line| !line.contains('\n') && !line.contains('\t')));
    assert!(lines.iter().all(|line| line.chars().count() == 80));
}

#[test]
fn test_small_terminal_prints_plain_lines() {
    let renderer = TableRenderer::new(79, 40);
    let mut out = Vec::new();
    let mode = renderer.render(&mut out, &sample()).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(mode, RenderMode::Plain);
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().next().unwrap().contains("Buy milk"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_large_ids_keep_row_width() {
    let renderer = TableRenderer::new(80, 24);
    let (mode, lines) = renderer.render_lines(&[todo(9_876_543_210, "big", "", 12345, false)]);

    assert_eq!(mode, RenderMode::Table);
    for line in lines {
        assert_eq!(strip_ansi_escapes::strip_str(&line).chars().count(), 80);
    }
}
