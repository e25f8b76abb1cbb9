//! Gallery configuration loaded from TOML

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::persistence::STORAGE_KEY;
use crate::search::{truncate, Truncated};

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Where custom templates are persisted
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub directory: PathBuf,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            key: STORAGE_KEY.to_string(),
        }
    }
}

/// Display limits for the gallery views
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Templates shown in the editor's integration panel before "+N more"
    pub panel_limit: usize,
    /// Tag chips shown per template card
    pub visible_tags: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            panel_limit: 8,
            visible_tags: 3,
        }
    }
}

impl DisplayConfig {
    /// Cut a panel listing to `panel_limit` entries
    pub fn panel<'a, T>(&self, items: &'a [T]) -> Truncated<'a, T> {
        truncate(items, self.panel_limit)
    }

    /// Cut a card's tags to `visible_tags` chips
    pub fn tag_chips<'a>(&self, tags: &'a [String]) -> Truncated<'a, String> {
        truncate(tags, self.visible_tags)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration for the template gallery
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub storage: StorageConfig,
    pub gallery: DisplayConfig,
    pub logging: LoggingConfig,
}

impl GalleryConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the directory custom templates are stored in
    pub fn with_storage_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.storage.directory = directory.into();
        self
    }

    /// Set the storage key (file stem) of the persisted record
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage.key = key.into();
        self
    }

    /// Set how many templates the integration panel shows
    pub fn with_panel_limit(mut self, limit: usize) -> Self {
        self.gallery.panel_limit = limit;
        self
    }

    /// Set how many tags each card shows
    pub fn with_visible_tags(mut self, count: usize) -> Self {
        self.gallery.visible_tags = count;
        self
    }

    /// Set the default log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}
