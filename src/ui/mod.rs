//! Terminal output for todos
//!
//! [`table::TableRenderer`] lays todos out as a bordered table sized to the
//! terminal, wrapping long names and contents; [`layout`] computes the column widths.

pub mod layout;
pub mod table;

pub use layout::ColumnLayout;
pub use table::{RenderMode, TableRenderer};
