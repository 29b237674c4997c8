//! Configuration management for the todo tool
//!
//! The configuration lives in a JSON file (by default `~/.todo/config.json`)
//! that is created with defaults on first use. It names the database file and
//! table the store works against, plus display and logging settings and a
//! free-form map of user settings.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DATABASE_FILE_NAME, DEFAULT_TABLE_NAME, LOG_FILE_NAME,
};
use crate::icons::IconTheme;
use crate::storage::DEFAULT_LIMIT;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database file. Relative paths are resolved against the config file's directory.
    pub db_path: PathBuf,
    /// Table holding the todos
    pub table_name: String,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    /// Free-form user settings
    pub settings: BTreeMap<String, String>,
    /// File this configuration was loaded from or will be saved to
    #[serde(skip)]
    path: Option<PathBuf>,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Completion markers: "unicode" or "ascii"
    pub icon_theme: IconTheme,
    /// Rows shown by `list` when no limit is given
    pub default_limit: u64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file next to the configuration
    pub enabled: bool,
    /// Minimum level written to the log file
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DATABASE_FILE_NAME),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
            settings: BTreeMap::new(),
            path: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level; only valid after [`Config::validate`]
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from `path` (or the default location), creating the
    /// file with default values when it does not exist yet.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_default_config_path()?,
        };

        if path.exists() {
            Self::load_from_file(&path)
        } else {
            let mut config = Self::default();
            config.path = Some(path);
            config.save()?;
            Ok(config)
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let mut config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        config.path = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// Write the configuration back to the file it belongs to
    pub fn save(&self) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Configuration has no file path"))?;

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        // Ensure the parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(path, content + "\n")
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.db_path.as_os_str().is_empty() {
            anyhow::bail!("db_path cannot be empty");
        }
        if self.table_name.trim().is_empty() {
            anyhow::bail!("table_name cannot be empty");
        }
        if self.display.default_limit == 0 {
            anyhow::bail!("display.default_limit must be greater than 0");
        }
        if let Err(e) = self.logging.level.parse::<LevelFilter>() {
            anyhow::bail!("Invalid logging.level '{}': {}", self.logging.level, e);
        }
        Ok(())
    }

    /// Set a well-known key or a free-form setting, then validate.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "db_path" => self.db_path = PathBuf::from(value),
            "table_name" => self.table_name = value.to_string(),
            "display.icon_theme" => {
                self.display.icon_theme = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            }
            "display.default_limit" => {
                self.display.default_limit = value
                    .parse()
                    .with_context(|| format!("display.default_limit must be a number, got '{value}'"))?;
            }
            "logging.enabled" => {
                self.logging.enabled = value
                    .parse()
                    .with_context(|| format!("logging.enabled must be true or false, got '{value}'"))?;
            }
            "logging.level" => self.logging.level = value.to_string(),
            _ => {
                self.settings.insert(key.to_string(), value.to_string());
            }
        }
        self.validate()
    }

    /// Remove a free-form setting. Returns whether it existed.
    pub fn unset(&mut self, key: &str) -> bool {
        self.settings.remove(key).is_some()
    }

    /// All values as `(key, value)` pairs, well-known keys first
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = vec![
            ("db_path".to_string(), self.database_path().display().to_string()),
            ("table_name".to_string(), self.table_name.clone()),
            ("display.icon_theme".to_string(), self.display.icon_theme.to_string()),
            ("display.default_limit".to_string(), self.display.default_limit.to_string()),
            ("logging.enabled".to_string(), self.logging.enabled.to_string()),
            ("logging.level".to_string(), self.logging.level.clone()),
        ];
        entries.extend(self.settings.iter().map(|(k, v)| (k.clone(), v.clone())));
        entries
    }

    /// File this configuration belongs to, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Attach the configuration to a file without touching the disk
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Directory holding the config file (and by default the database and log)
    pub fn base_dir(&self) -> PathBuf {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// Database file with relative paths resolved against [`Config::base_dir`]
    pub fn database_path(&self) -> PathBuf {
        if self.db_path.is_absolute() {
            self.db_path.clone()
        } else {
            self.base_dir().join(&self.db_path)
        }
    }

    /// Log file written when logging is enabled
    pub fn log_file_path(&self) -> PathBuf {
        self.base_dir().join(LOG_FILE_NAME)
    }

    /// Get the application directory under the user's home
    pub fn get_app_dir() -> Result<PathBuf> {
        dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_app_dir()?.join(CONFIG_FILE_NAME))
    }
}
