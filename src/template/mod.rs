//! Template definitions
//!
//! This module holds the template data model, the built-in catalog, and id
//! generation for templates and the text layers they create.
//!
//! # Example
//!
//! ```rust
//! use prismify_templates::template::{builtin_templates, Category};
//!
//! let templates = builtin_templates();
//! assert!(templates.iter().any(|t| t.category == Category::Business));
//! ```

mod catalog;
pub mod id;
mod model;

pub use catalog::{builtin_templates, parse_catalog};
pub use model::{
    CanvasConfig, Category, EffectsConfig, FrameConfig, FrameType, Position, Template,
    TemplateConfig, TextConfig,
};
