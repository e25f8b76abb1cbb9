//! Prismify Templates - template gallery core for the Prismify image editor
//!
//! This library provides the template data model, the built-in catalog, a
//! store for custom templates, and the applier that projects templates onto
//! the editor's canvas state and captures that state back into templates.
//!
//! # Example
//!
//! ```rust
//! use prismify_templates::canvas::EditorState;
//! use prismify_templates::template::Category;
//! use prismify_templates::TemplateStore;
//!
//! let mut store = TemplateStore::new();
//! let mut editor = EditorState::new();
//!
//! store.apply_template_by_id("instagram-post", &mut editor.context()).unwrap();
//! assert_eq!(editor.canvas.width, 1080);
//!
//! let saved = store
//!     .save_as_template("My Post", "", Category::SocialMedia, &editor.context())
//!     .unwrap();
//! assert!(saved.is_custom);
//! ```

pub mod applier;
pub mod canvas;
pub mod config;
pub mod error;
pub mod persistence;
pub mod search;
pub mod store;
pub mod template;

pub use applier::{capture, classify_background, project};
pub use canvas::{CanvasContext, EditorState};
pub use config::{ConfigError, GalleryConfig};
pub use error::TemplateError;
pub use persistence::{JsonFileStorage, MemoryStorage, TemplateStorage};
pub use search::{filter_templates, CategoryFilter, SearchScope, TemplateQuery};
pub use store::TemplateStore;
pub use template::{Category, Template};

/// Open a store backed by the JSON file named in `config`
///
/// # Example
///
/// ```rust
/// use prismify_templates::{open_store, GalleryConfig};
///
/// let dir = std::env::temp_dir().join("prismify-doc-example");
/// let store = open_store(&GalleryConfig::new().with_storage_directory(&dir)).unwrap();
/// assert_eq!(store.templates().len(), 11);
/// ```
pub fn open_store(config: &GalleryConfig) -> Result<TemplateStore, TemplateError> {
    let storage = JsonFileStorage::new(&config.storage.directory, &config.storage.key);
    TemplateStore::with_storage(Box::new(storage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_store_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = GalleryConfig::new().with_storage_directory(dir.path());
        let store = open_store(&config).unwrap();
        assert!(store.custom_templates().is_empty());
        assert!(store.storage().is_some());
    }

    #[test]
    fn test_open_store_reloads_saved_templates() {
        let dir = tempfile::tempdir().unwrap();
        let config = GalleryConfig::new().with_storage_directory(dir.path());
        let mut editor = EditorState::new();

        let id = {
            let mut store = open_store(&config).unwrap();
            store
                .save_as_template("Saved", "kept", Category::Personal, &editor.context())
                .unwrap()
                .id
                .clone()
        };

        let reopened = open_store(&config).unwrap();
        assert_eq!(reopened.custom_templates().len(), 1);
        assert_eq!(reopened.custom_templates()[0].id, id);
        assert!(reopened.selected_template().is_none());
    }
}
