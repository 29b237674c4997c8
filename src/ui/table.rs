//! Bordered, wrapped todo table for plain terminal output

use std::io::{self, IsTerminal, Write};

use log::{debug, warn};

use super::layout::ColumnLayout;
use crate::constants::{
    COLUMN_COMPLETED, COLUMN_CONTENT, COLUMN_ID, COLUMN_NAME, COLUMN_PRIORITY, MIN_TABLE_HEIGHT, MIN_TABLE_WIDTH,
    WARN_TERMINAL_TOO_SMALL,
};
use crate::entities::Todo;
use crate::icons::IconService;
use crate::utils::color::Palette;
use crate::utils::text::{pad, sanitize, wrap};

/// How a set of todos ended up being printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Bordered, column-aligned table
    Table,
    /// One plain line per todo (terminal too small)
    Plain,
}

/// Renders todos sized to a terminal of `width` x `height`.
///
/// The size is captured once at construction; rendering itself is pure.
#[derive(Debug, Clone)]
pub struct TableRenderer {
    width: usize,
    height: usize,
    icons: IconService,
    palette: Palette,
}

impl TableRenderer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: usize::from(width),
            height: usize::from(height),
            icons: IconService::default(),
            palette: Palette::default(),
        }
    }

    /// Size the renderer to the current terminal.
    ///
    /// `crossterm` reads the size from the controlling tty even when stdout
    /// is redirected, so redirected output is checked first and always gets
    /// plain lines without escape sequences.
    pub fn from_terminal() -> Self {
        if !io::stdout().is_terminal() {
            debug!("stdout is not a terminal, using plain output");
            return Self::new(0, 0);
        }
        match crossterm::terminal::size() {
            Ok((width, height)) => {
                debug!("Terminal size {}x{}", width, height);
                Self::new(width, height)
            }
            Err(e) => {
                debug!("Could not read terminal size: {}", e);
                Self::new(0, 0)
            }
        }
    }

    #[must_use]
    pub fn with_icons(mut self, icons: IconService) -> Self {
        self.icons = icons;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Whether the terminal is large enough for the table layout
    pub fn fits_table(&self) -> bool {
        self.width >= MIN_TABLE_WIDTH && self.height >= MIN_TABLE_HEIGHT
    }

    /// Write `todos` to `out`, as a table when the terminal allows it.
    pub fn render<W: Write>(&self, out: &mut W, todos: &[Todo]) -> io::Result<RenderMode> {
        let (mode, lines) = self.render_lines(todos);
        for line in lines {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(mode)
    }

    /// Produce the output lines without writing them anywhere.
    pub fn render_lines(&self, todos: &[Todo]) -> (RenderMode, Vec<String>) {
        let layout = if self.fits_table() {
            ColumnLayout::compute(self.width, todos, &self.icons)
        } else {
            None
        };

        match layout {
            Some(layout) => (RenderMode::Table, self.table_lines(&layout, todos)),
            None => {
                warn!("{} ({}x{})", WARN_TERMINAL_TOO_SMALL, self.width, self.height);
                (RenderMode::Plain, todos.iter().map(|t| sanitize(&t.to_string())).collect())
            }
        }
    }

    fn table_lines(&self, layout: &ColumnLayout, todos: &[Todo]) -> Vec<String> {
        let mut lines = vec![
            self.rule(layout, '='),
            self.header(layout),
            self.rule(layout, '='),
        ];
        for todo in todos {
            lines.extend(self.todo_rows(layout, todo));
            lines.push(self.rule(layout, '-'));
        }
        lines.push(format!("{}{}", self.rule(layout, '='), self.palette.reset));
        lines
    }

    fn header(&self, layout: &ColumnLayout) -> String {
        let style = format!("{}{}", self.palette.text, self.palette.bold);
        let cells = [COLUMN_ID, COLUMN_NAME, COLUMN_CONTENT, COLUMN_PRIORITY, COLUMN_COMPLETED];
        let line = self.row(layout, &cells, &style);
        format!("{line}{}", self.palette.reset)
    }

    /// Physical lines for one todo. Id, priority and status only appear on the first line.
    fn todo_rows(&self, layout: &ColumnLayout, todo: &Todo) -> Vec<String> {
        let name_chunks = wrap(&sanitize(&todo.name), layout.name);
        let content_chunks = wrap(&sanitize(&todo.content), layout.content);
        let line_count = name_chunks.len().max(content_chunks.len());

        let id = todo.id.to_string();
        let priority = todo.priority.to_string();
        let status = self.icons.completion(todo.completed);

        (0..line_count)
            .map(|index| {
                let name = name_chunks.get(index).map_or("", String::as_str);
                let content = content_chunks.get(index).map_or("", String::as_str);
                let cells = if index == 0 {
                    [id.as_str(), name, content, priority.as_str(), status]
                } else {
                    ["", name, content, "", ""]
                };
                self.row(layout, &cells, &self.palette.text)
            })
            .collect()
    }

    fn row(&self, layout: &ColumnLayout, cells: &[&str; 5], style: &str) -> String {
        let border = &self.palette.border;
        let mut line = format!("{border}|");
        for (cell, width) in cells.iter().zip(layout.widths()) {
            line.push_str(style);
            line.push(' ');
            line.push_str(&pad(cell, width));
            line.push(' ');
            line.push_str(border);
            line.push('|');
        }
        line
    }

    fn rule(&self, layout: &ColumnLayout, fill: char) -> String {
        let inner: String = std::iter::repeat(fill).take(layout.total.saturating_sub(2)).collect();
        format!("{}+{}+", self.palette.border, inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, name: &str, content: &str) -> Todo {
        Todo {
            id,
            name: name.to_string(),
            content: content.to_string(),
            priority: 1,
            completed: false,
        }
    }

    #[test]
    fn test_small_terminal_falls_back_to_plain() {
        let renderer = TableRenderer::new(60, 40);
        let (mode, lines) = renderer.render_lines(&[todo(1, "a", "b"), todo(2, "c", "d")]);
        assert_eq!(mode, RenderMode::Plain);
        assert_eq!(lines.len(), 2);
        assert!(!lines[0].contains('|'));
    }

    #[test]
    fn test_short_terminal_falls_back_to_plain() {
        let renderer = TableRenderer::new(120, 5);
        assert!(!renderer.fits_table());
        let (mode, _) = renderer.render_lines(&[]);
        assert_eq!(mode, RenderMode::Plain);
    }

    #[test]
    fn test_redirected_stdout_gets_plain_output() {
        // Test runners usually pipe stdout; nothing to check when run from a tty.
        if io::stdout().is_terminal() {
            return;
        }
        let renderer = TableRenderer::from_terminal();
        assert!(!renderer.fits_table());
        let (mode, lines) = renderer.render_lines(&[todo(1, "a", "b")]);
        assert_eq!(mode, RenderMode::Plain);
        assert!(!lines[0].contains('\u{1b}'));
    }

    #[test]
    fn test_plain_lines_never_break() {
        let renderer = TableRenderer::new(10, 10);
        let (_, lines) = renderer.render_lines(&[todo(1, "a\nb", "c\nd")]);
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].contains('\n'));
    }

    #[test]
    fn test_continuation_rows_leave_fixed_columns_blank() {
        let renderer = TableRenderer::new(80, 24).with_palette(Palette::plain());
        let long_name = "x".repeat(45);
        let (_, lines) = renderer.render_lines(&[todo(42, &long_name, "")]);
        // top, header, divider, 3 body lines, record divider, footer
        assert_eq!(lines.len(), 8);
        assert!(lines[3].starts_with("| 42 "));
        assert!(lines[4].starts_with("|       | xxxx"));
        assert!(lines[5].trim_end().ends_with('|'));
    }
}
