//! Column width calculations for the todo table

use crate::constants::{
    COLUMN_COMPLETED, COLUMN_ID, COLUMN_PRIORITY, CONTENT_MIN_WIDTH, ID_MIN_WIDTH, NAME_MIN_WIDTH,
    NAME_WIDTH_DIVISOR,
};
use crate::entities::Todo;
use crate::icons::IconService;
use crate::utils::text::char_len;

/// Characters used by borders and separators on every row: `|` plus ` x |` per column.
pub const ROW_OVERHEAD: usize = 1 + 3 * 5;

/// Widths of the five table columns for one render.
///
/// `id`, `priority` and `completed` are sized to their header or widest
/// value; `name` and `content` share the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub total: usize,
    pub id: usize,
    pub name: usize,
    pub content: usize,
    pub priority: usize,
    pub completed: usize,
}

impl ColumnLayout {
    /// Compute the layout for a terminal `width` columns wide.
    ///
    /// Returns `None` when the width leaves no room for the text columns.
    #[must_use]
    pub fn compute(width: usize, todos: &[Todo], icons: &IconService) -> Option<Self> {
        let widest_id = todos.iter().map(|t| t.id.to_string().len()).max().unwrap_or(0);
        let widest_priority = todos.iter().map(|t| t.priority.to_string().len()).max().unwrap_or(0);
        let widest_glyph = char_len(icons.todo_completed()).max(char_len(icons.todo_pending()));

        let id = ID_MIN_WIDTH.max(char_len(COLUMN_ID)).max(widest_id);
        let priority = char_len(COLUMN_PRIORITY).max(widest_priority);
        let completed = char_len(COLUMN_COMPLETED).max(widest_glyph);

        let available = width.checked_sub(ROW_OVERHEAD + id + priority + completed)?;
        if available < 2 {
            return None;
        }

        // Name gets a quarter, at least NAME_MIN_WIDTH, while content keeps its minimum.
        // Whatever is left, including the rounding remainder, goes to content.
        let name = (available / NAME_WIDTH_DIVISOR)
            .max(NAME_MIN_WIDTH)
            .min(available.saturating_sub(CONTENT_MIN_WIDTH))
            .max(1);
        let content = available - name;

        Some(Self {
            total: width,
            id,
            name,
            content,
            priority,
            completed,
        })
    }

    /// Column widths in display order: id, name, content, priority, completed
    #[must_use]
    pub fn widths(&self) -> [usize; 5] {
        [self.id, self.name, self.content, self.priority, self.completed]
    }

    /// Visible width of one row
    #[must_use]
    pub fn row_width(&self) -> usize {
        ROW_OVERHEAD + self.widths().iter().sum::<usize>()
    }
}
