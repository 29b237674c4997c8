use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};

/// Fixed ANSI styling used by the table renderer.
///
/// Every field is a ready-to-print escape sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub border: String,
    pub text: String,
    pub bold: String,
    pub reset: String,
}

impl Palette {
    /// Colored output: blue borders, white text
    #[must_use]
    pub fn ansi() -> Self {
        Self {
            border: SetForegroundColor(Color::DarkBlue).to_string(),
            text: SetForegroundColor(Color::White).to_string(),
            bold: SetAttribute(Attribute::Bold).to_string(),
            reset: format!("{}{}", SetAttribute(Attribute::Reset), ResetColor),
        }
    }

    /// No escape sequences at all
    #[must_use]
    pub fn plain() -> Self {
        Self {
            border: String::new(),
            text: String::new(),
            bold: String::new(),
            reset: String::new(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}
