//! Durable storage for custom templates
//!
//! Only the custom-template collection is persisted; built-ins and the
//! current selection are rebuilt every session. The record is kept under a
//! single key in the layout
//!
//! ```json
//! { "state": { "customTemplates": [ ... ] }, "version": 0 }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;
use crate::template::Template;

/// Key the custom collection is stored under
pub const STORAGE_KEY: &str = "prismify-templates";
pub const RECORD_VERSION: u32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub custom_templates: Vec<Template>,
}

/// The persisted record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedTemplates {
    pub state: PersistedState,
    #[serde(default)]
    pub version: u32,
}

impl PersistedTemplates {
    pub fn new(custom_templates: Vec<Template>) -> Self {
        Self {
            state: PersistedState { custom_templates },
            version: RECORD_VERSION,
        }
    }

    pub fn from_json(content: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A key-value backend holding the persisted record
pub trait TemplateStorage: fmt::Debug {
    /// Load the record, or `None` if nothing was saved yet
    fn load(&self) -> Result<Option<PersistedTemplates>, TemplateError>;

    fn save(&mut self, record: &PersistedTemplates) -> Result<(), TemplateError>;
}

/// Stores the record as `<directory>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(directory: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: directory.as_ref().join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<PersistedTemplates>, TemplateError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        PersistedTemplates::from_json(&content).map(Some)
    }

    fn save(&mut self, record: &PersistedTemplates) -> Result<(), TemplateError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, record.to_json()?)?;
        Ok(())
    }
}

/// Keeps the serialized record in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the storage with a raw JSON record
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }
}

impl TemplateStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedTemplates>, TemplateError> {
        self.contents
            .as_deref()
            .map(PersistedTemplates::from_json)
            .transpose()
    }

    fn save(&mut self, record: &PersistedTemplates) -> Result<(), TemplateError> {
        self.contents = Some(record.to_json()?);
        Ok(())
    }
}
