//! Constants used throughout the application
//!
//! This module centralizes user-facing messages and layout values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_TODO_CREATED: &str = "Inserted todo:";
pub const SUCCESS_TODO_UPDATED: &str = "Updated todo:";
pub const SUCCESS_TODO_COMPLETED: &str = "Completed todo:";
pub const SUCCESS_TODO_DELETED: &str = "Deleted todo:";
pub const SUCCESS_STORE_CREATED: &str = "Created todo table";
pub const SUCCESS_STORE_RESET: &str = "Removed todo database";
pub const SUCCESS_CONFIG_SAVED: &str = "Saved configuration";

// Informational Messages
pub const INFO_STORE_EXISTS: &str = "Todo table already exists";
pub const INFO_STORE_MISSING: &str = "No todo database to remove";
pub const INFO_NOTHING_TO_UPDATE: &str = "Nothing to update, pass at least one of -n, -c or -p";

// Error Messages
pub const ERROR_RESET_NOT_CONFIRMED: &str = "Refusing to remove the todo database without --yes";
pub const ERROR_UNKNOWN_SETTING: &str = "No such setting";

// Warnings
pub const WARN_TERMINAL_TOO_SMALL: &str = "Terminal size too small for table formatting";

// Table Column Titles
pub const COLUMN_ID: &str = "ID";
pub const COLUMN_NAME: &str = "Name";
pub const COLUMN_CONTENT: &str = "Content";
pub const COLUMN_PRIORITY: &str = "Priority";
pub const COLUMN_COMPLETED: &str = "Completed";

// Table Layout Constants
/// Narrowest terminal that gets the table layout
pub const MIN_TABLE_WIDTH: usize = 80;
/// Shortest terminal that gets the table layout
pub const MIN_TABLE_HEIGHT: usize = 10;
/// Minimum width of the id column
pub const ID_MIN_WIDTH: usize = 5;
/// Minimum width of the name column
pub const NAME_MIN_WIDTH: usize = 20;
/// Width always left for the content column
pub const CONTENT_MIN_WIDTH: usize = 10;
/// Name column receives 1/NAME_WIDTH_DIVISOR of the free width
pub const NAME_WIDTH_DIVISOR: usize = 4;

// Configuration Defaults
/// Directory under the home directory holding config, database and log
pub const APP_DIR_NAME: &str = ".todo";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DATABASE_FILE_NAME: &str = "todo.db";
pub const LOG_FILE_NAME: &str = "todo.log";
pub const DEFAULT_TABLE_NAME: &str = "todo";
/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "TODO_CONFIG";
