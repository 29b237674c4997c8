//! Command handlers behind each subcommand.
//!
//! Every handler talks to the [`TodoStore`], renders results through the
//! [`TableRenderer`] and writes to the supplied output, so the CLI stays a
//! thin dispatch layer and the handlers can be exercised in tests.

use std::fmt;
use std::io::Write;

use anyhow::Result;
use log::info;

use crate::config::Config;
use crate::constants::{
    ERROR_RESET_NOT_CONFIRMED, ERROR_UNKNOWN_SETTING, INFO_NOTHING_TO_UPDATE, INFO_STORE_EXISTS,
    INFO_STORE_MISSING, SUCCESS_CONFIG_SAVED, SUCCESS_STORE_CREATED, SUCCESS_STORE_RESET, SUCCESS_TODO_COMPLETED,
    SUCCESS_TODO_CREATED, SUCCESS_TODO_DELETED, SUCCESS_TODO_UPDATED,
};
use crate::entities::{NewTodo, TodoPatch};
use crate::storage::{StoreError, TodoStore};
use crate::ui::TableRenderer;

/// Which todos `list` shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StatusFilter {
    #[default]
    Incomplete,
    Complete,
    All,
}

impl StatusFilter {
    /// Completion value to filter on, `None` for every todo
    pub fn completed(self) -> Option<bool> {
        match self {
            Self::Incomplete => Some(false),
            Self::Complete => Some(true),
            Self::All => None,
        }
    }
}

/// Rows shown by `list` against the number of todos matching the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSummary {
    pub shown: usize,
    pub total: u64,
}

impl ListSummary {
    /// Whether the limit hid some matching todos
    pub fn is_truncated(&self) -> bool {
        (self.shown as u64) < self.total
    }
}

impl fmt::Display for ListSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} todos", self.shown, self.total)
    }
}

/// Create the database and table if needed. Returns whether the table was created.
pub async fn init<W: Write>(store: &TodoStore, out: &mut W) -> Result<bool> {
    let created = store.initialize().await?;
    if created {
        writeln!(out, "{}: {} ({})", SUCCESS_STORE_CREATED, store.table_name(), store.location().display())?;
    } else {
        writeln!(out, "{}: {}", INFO_STORE_EXISTS, store.table_name())?;
    }
    Ok(created)
}

/// Insert a todo and show it as stored.
pub async fn add<W: Write>(store: &TodoStore, renderer: &TableRenderer, out: &mut W, todo: NewTodo) -> Result<i64> {
    let id = store.insert(&todo).await?;
    let stored = store.get_by_id(id).await?;
    info!("Created todo {}", id);

    writeln!(out, "{SUCCESS_TODO_CREATED}")?;
    renderer.render(out, &[stored])?;
    Ok(id)
}

/// Show up to `limit` todos matching `filter`; a `limit` of 0 shows all of them.
pub async fn list<W: Write>(
    store: &TodoStore,
    renderer: &TableRenderer,
    out: &mut W,
    filter: StatusFilter,
    limit: u64,
) -> Result<ListSummary> {
    let (todos, total) = match filter.completed() {
        Some(completed) => (
            store.get_by_status(completed, limit).await?,
            store.count_by_status(completed).await?,
        ),
        None => (store.get_all(limit).await?, store.count().await?),
    };

    renderer.render(out, &todos)?;
    let summary = ListSummary {
        shown: todos.len(),
        total,
    };
    if summary.is_truncated() {
        writeln!(out, "{summary}")?;
    }
    Ok(summary)
}

/// Show one todo.
pub async fn view<W: Write>(store: &TodoStore, renderer: &TableRenderer, out: &mut W, id: i64) -> Result<()> {
    let todo = store.get_by_id(id).await?;
    renderer.render(out, &[todo])?;
    Ok(())
}

/// Overwrite only the fields present in `patch`.
pub async fn update<W: Write>(
    store: &TodoStore,
    renderer: &TableRenderer,
    out: &mut W,
    id: i64,
    patch: TodoPatch,
) -> Result<()> {
    if patch.is_empty() {
        return Err(StoreError::Validation(INFO_NOTHING_TO_UPDATE.to_string()).into());
    }

    let mut todo = store.get_by_id(id).await?;
    patch.apply(&mut todo);
    store.update(id, &todo).await?;
    let stored = store.get_by_id(id).await?;
    info!("Updated todo {}", id);

    writeln!(out, "{SUCCESS_TODO_UPDATED}")?;
    renderer.render(out, &[stored])?;
    Ok(())
}

/// Mark a todo as completed.
pub async fn complete<W: Write>(store: &TodoStore, renderer: &TableRenderer, out: &mut W, id: i64) -> Result<()> {
    store.complete(id).await?;
    let stored = store.get_by_id(id).await?;
    info!("Completed todo {}", id);

    writeln!(out, "{SUCCESS_TODO_COMPLETED}")?;
    renderer.render(out, &[stored])?;
    Ok(())
}

/// Delete a todo and print what was removed.
pub async fn delete<W: Write>(store: &TodoStore, out: &mut W, id: i64) -> Result<i64> {
    let todo = store.get_by_id(id).await?;
    let removed = store.delete_by_id(id).await?;
    info!("Deleted todo {}", removed);

    writeln!(out, "{SUCCESS_TODO_DELETED} {todo}")?;
    Ok(removed)
}

/// Remove the whole database file. Requires explicit confirmation.
pub async fn reset<W: Write>(store: &TodoStore, out: &mut W, confirmed: bool) -> Result<bool> {
    if !confirmed {
        return Err(StoreError::Validation(ERROR_RESET_NOT_CONFIRMED.to_string()).into());
    }

    let removed = store.destroy().await?;
    if removed {
        writeln!(out, "{}: {}", SUCCESS_STORE_RESET, store.location().display())?;
    } else {
        writeln!(out, "{}: {}", INFO_STORE_MISSING, store.location().display())?;
    }
    Ok(removed)
}

/// Print the configuration file location and every value.
pub fn config_view<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    if let Some(path) = config.path() {
        writeln!(out, "Config file: {}", path.display())?;
    }
    for (key, value) in config.entries() {
        writeln!(out, "{key}: {value}")?;
    }
    Ok(())
}

/// Set a configuration value and save the file.
pub fn config_set<W: Write>(config: &mut Config, out: &mut W, key: &str, value: &str) -> Result<()> {
    config.set(key, value)?;
    config.save()?;
    writeln!(out, "{SUCCESS_CONFIG_SAVED}: {key} = {value}")?;
    Ok(())
}

/// Remove a free-form setting and save the file.
pub fn config_unset<W: Write>(config: &mut Config, out: &mut W, key: &str) -> Result<()> {
    if !config.unset(key) {
        anyhow::bail!("{ERROR_UNKNOWN_SETTING}: {key}");
    }
    config.save()?;
    writeln!(out, "{SUCCESS_CONFIG_SAVED}: removed {key}")?;
    Ok(())
}
