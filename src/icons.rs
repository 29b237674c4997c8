//! Icon service for completion markers
//!
//! Supports a Unicode theme (checkmark and cross) and an ASCII fallback
//! for terminals without those glyphs.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl std::str::FromStr for IconTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unicode" => Ok(Self::Unicode),
            "ascii" => Ok(Self::Ascii),
            other => Err(format!("unknown icon theme '{other}', expected 'unicode' or 'ascii'")),
        }
    }
}

impl std::fmt::Display for IconTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unicode => write!(f, "unicode"),
            Self::Ascii => write!(f, "ascii"),
        }
    }
}

/// Todo status icons
#[derive(Debug, Clone)]
pub struct TodoStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Status icons for the current theme
    #[must_use]
    pub fn status_icons(&self) -> TodoStatusIcons {
        match self.current_theme {
            IconTheme::Unicode => TodoStatusIcons {
                pending: "\u{2717}",
                completed: "\u{2713}",
            },
            IconTheme::Ascii => TodoStatusIcons {
                pending: "[ ]",
                completed: "[X]",
            },
        }
    }

    #[must_use]
    pub fn todo_pending(&self) -> &'static str {
        self.status_icons().pending
    }

    #[must_use]
    pub fn todo_completed(&self) -> &'static str {
        self.status_icons().completed
    }

    /// Marker for a completion flag
    #[must_use]
    pub fn completion(&self, completed: bool) -> &'static str {
        if completed {
            self.todo_completed()
        } else {
            self.todo_pending()
        }
    }
}
