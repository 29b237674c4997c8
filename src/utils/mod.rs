//! Utility modules shared by the renderer and the command layer.
//!
//! - [`color`] - Fixed ANSI palette for table output
//! - [`text`] - Character-based wrapping and sanitizing of free text

pub mod color;
pub mod text;
