//! Repository layer for database operations.
//!
//! Repositories build and run statements on a connection they are handed.
//! Opening and closing connections is left to [`crate::storage::TodoStore`].

pub mod todo;

pub use todo::{TodoColumn, TodoRepository};
