use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::storage::StoreError;

/// Lowest priority shown by the CLI help text
pub const PRIORITY_LOW: i32 = 1;
/// Middle priority
pub const PRIORITY_MEDIUM: i32 = 2;
/// Highest conventional priority (larger values are still accepted)
pub const PRIORITY_HIGH: i32 = 3;
/// Priority assigned when none is supplied
pub const DEFAULT_PRIORITY: i32 = PRIORITY_LOW;

/// A single persisted todo.
///
/// Values handed out by the store are detached copies of the stored row.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub priority: i32,
    pub completed: bool,
}

/// Payload for inserting a todo. The store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub name: String,
    pub content: String,
    pub priority: i32,
    pub completed: bool,
}

/// Selective overwrite: only the fields that are `Some` replace stored values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub name: Option<String>,
    pub content: Option<String>,
    pub priority: Option<i32>,
}

impl NewTodo {
    /// New incomplete todo with default priority and empty content
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: String::new(),
            priority: DEFAULT_PRIORITY,
            completed: false,
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check the invariants every persisted todo must hold
    pub fn validate(&self) -> Result<(), StoreError> {
        validate_fields(&self.name, self.priority)
    }
}

impl Todo {
    /// Check the invariants every persisted todo must hold
    pub fn validate(&self) -> Result<(), StoreError> {
        validate_fields(&self.name, self.priority)
    }
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.content.is_none() && self.priority.is_none()
    }

    /// Apply the supplied fields onto `todo`, leaving the rest untouched
    pub fn apply(&self, todo: &mut Todo) {
        if let Some(name) = &self.name {
            todo.name.clone_from(name);
        }
        if let Some(content) = &self.content {
            todo.content.clone_from(content);
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
    }
}

fn validate_fields(name: &str, priority: i32) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("todo name must not be empty".to_string()));
    }
    if priority < 0 {
        return Err(StoreError::Validation(format!(
            "priority must be zero or greater, got {priority}"
        )));
    }
    Ok(())
}

/// Single-line form used when the terminal is too small for the table
impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "done" } else { "open" };
        write!(f, "#{} [{}] {} (priority {})", self.id, status, self.name, self.priority)?;
        if !self.content.is_empty() {
            write!(f, ": {}", self.content)?;
        }
        Ok(())
    }
}
