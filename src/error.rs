//! Error types for template operations

use thiserror::Error;

/// Errors that can occur while managing, validating, or persisting templates
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A template failed validation
    #[error("invalid template '{id}': {reason}")]
    Invalid { id: String, reason: String },

    /// No template with the given id exists
    #[error("template not found: {id}")]
    NotFound { id: String },

    /// Error reading or writing persisted templates
    #[error("template storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted record could not be encoded or decoded
    #[error("template storage format error: {0}")]
    Json(#[from] serde_json::Error),

    /// The built-in catalog document is malformed
    #[error("invalid template catalog: {0}")]
    Catalog(#[from] toml::de::Error),
}

impl TemplateError {
    pub(crate) fn invalid(id: &str, reason: impl Into<String>) -> Self {
        TemplateError::Invalid {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
