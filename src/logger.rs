//! Logging setup
//!
//! All modules log through the `log` macros. This module wires them to a
//! `fern` dispatcher that writes to the log file when logging is enabled in
//! the configuration, and mirrors debug output to stderr with `--verbose`.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;

use crate::config::LoggingConfig;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Format a single log line
pub fn format_line(level: log::Level, target: &str, message: &std::fmt::Arguments<'_>) -> String {
    format!("[{}] {:<5} {}: {}", Local::now().format(TIMESTAMP_FORMAT), level, target, message)
}

/// Build the dispatcher for the given settings. Returns `None` when nothing
/// would be logged anywhere.
pub fn dispatch(config: &LoggingConfig, log_file: &Path, verbose: bool) -> Result<Option<fern::Dispatch>> {
    if !config.enabled && !verbose {
        return Ok(None);
    }

    let mut root = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{}", format_line(record.level(), record.target(), message)))
        })
        .level(LevelFilter::Trace)
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn);

    if config.enabled {
        if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(log_file)
            .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;
        root = root.chain(fern::Dispatch::new().level(config.level_filter()).chain(file));
    }

    if verbose {
        root = root.chain(fern::Dispatch::new().level(LevelFilter::Debug).chain(std::io::stderr()));
    }

    Ok(Some(root))
}

/// Install the global logger. Returns whether any output was configured.
pub fn init(config: &LoggingConfig, log_file: &Path, verbose: bool) -> Result<bool> {
    match dispatch(config, log_file, verbose)? {
        Some(dispatch) => {
            dispatch.apply().context("Failed to install logger")?;
            Ok(true)
        }
        None => Ok(false),
    }
}
