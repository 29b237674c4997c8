//! todo - personal task tracking from the terminal
//!
//! This library provides the pieces behind the `todo` command: a local
//! SQLite-backed store for todos, and a renderer that lays them out as a
//! bordered, wrapped table sized to the terminal.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`storage`] - The todo store: initialization, CRUD and list queries
//! * [`ui`] - Table rendering sized to the terminal
//! * [`commands`] - Handlers behind each subcommand
//! * [`config`] - Application configuration management
//! * [`utils`] - Text wrapping and color helpers

/// Command-line argument definitions and dispatch
pub mod cli;

/// Command handlers tying the store and the renderer together
pub mod commands;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Todo record and its insert/update payloads
pub mod entities;

/// Completion markers for the table
pub mod icons;

/// Logging setup on top of the `log` facade
pub mod logger;

/// Statement building and execution for the todo table
pub mod repositories;

/// Local storage layer for todos
pub mod storage;

/// Terminal table rendering
pub mod ui;

/// Utility functions for text layout and colors
pub mod utils;

pub use entities::{NewTodo, Todo, TodoPatch};
pub use storage::{StoreError, StoreResult, TodoStore};
pub use ui::TableRenderer;
