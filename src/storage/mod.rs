//! Local storage for todos
//!
//! A single SQLite file holding one todo table, accessed through SeaORM:
//! - [`db`] owns the file location, connections, initialization and reset
//! - [`todos`] holds the create/read/update/delete and list queries
//! - [`error`] is the error taxonomy shared by all store operations

pub mod db;
pub mod error;
pub mod todos;

pub use db::TodoStore;
pub use error::{StoreError, StoreResult};
pub use todos::DEFAULT_LIMIT;
