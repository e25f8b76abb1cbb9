//! Template data model
//!
//! A [`Template`] is a named bundle of canvas, frame, text and effect settings.
//! Field names serialize in camelCase so persisted custom templates keep the
//! shape the editor stores them in.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Gallery category a template is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SocialMedia,
    Presentation,
    Marketing,
    Personal,
    Business,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::SocialMedia,
        Category::Presentation,
        Category::Marketing,
        Category::Personal,
        Category::Business,
    ];

    /// Slug used on the wire and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SocialMedia => "social-media",
            Category::Presentation => "presentation",
            Category::Marketing => "marketing",
            Category::Personal => "personal",
            Category::Business => "business",
        }
    }

    /// Human-readable tab label
    pub fn label(&self) -> &'static str {
        match self {
            Category::SocialMedia => "Social Media",
            Category::Presentation => "Presentations",
            Category::Marketing => "Marketing",
            Category::Personal => "Personal",
            Category::Business => "Business",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown category '{}' (expected one of: {})",
                    s,
                    Category::ALL
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

/// Device frame drawn around the canvas content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameType {
    #[default]
    None,
    Macbook,
    Iphone,
    Ipad,
    Desktop,
    Mobile,
}

impl FrameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameType::None => "none",
            FrameType::Macbook => "macbook",
            FrameType::Iphone => "iphone",
            FrameType::Ipad => "ipad",
            FrameType::Desktop => "desktop",
            FrameType::Mobile => "mobile",
        }
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Canvas size and background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// CSS color, `linear-gradient(...)` function, or absolute image URL
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    #[serde(rename = "type")]
    pub frame_type: FrameType,
    pub color: String,
    pub shadow: bool,
}

/// Relative coordinate in percent of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const CENTER: Position = Position { x: 50.0, y: 50.0 };
}

impl Default for Position {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Default text placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConfig {
    /// Empty means the template adds no text layer
    pub content: String,
    /// Display points
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    pub position: Position,
}

/// Effect percentages, 100 is neutral (blur is 0 when neutral)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectsConfig {
    pub blur: f64,
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            blur: 0.0,
            brightness: 100.0,
            contrast: 100.0,
            saturation: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub canvas: CanvasConfig,
    pub frame: FrameConfig,
    pub text: TextConfig,
    pub effects: EffectsConfig,
}

/// A reusable canvas configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub thumbnail: String,
    pub config: TemplateConfig,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_custom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Template {
    /// Check the structural invariants every stored template must hold
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.id.is_empty() {
            return Err(TemplateError::invalid(&self.id, "id must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(TemplateError::invalid(&self.id, "name must not be empty"));
        }
        let canvas = &self.config.canvas;
        if canvas.width == 0 || canvas.height == 0 {
            return Err(TemplateError::invalid(
                &self.id,
                format!(
                    "canvas dimensions must be positive, got {}x{}",
                    canvas.width, canvas.height
                ),
            ));
        }
        let font_size = self.config.text.font_size;
        if !(font_size.is_finite() && font_size > 0.0) {
            return Err(TemplateError::invalid(
                &self.id,
                format!("font size must be positive, got {}", font_size),
            ));
        }
        Ok(())
    }

    /// Whether the template carries default text
    pub fn has_text(&self) -> bool {
        !self.config.text.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Template {
        Template {
            id: "sample".to_string(),
            name: "Sample".to_string(),
            description: String::new(),
            category: Category::Personal,
            thumbnail: "/templates/sample.jpg".to_string(),
            config: TemplateConfig {
                canvas: CanvasConfig {
                    width: 800,
                    height: 600,
                    background: "#ffffff".to_string(),
                },
                frame: FrameConfig {
                    frame_type: FrameType::None,
                    color: "#333333".to_string(),
                    shadow: false,
                },
                text: TextConfig {
                    content: "Hello".to_string(),
                    font_size: 48.0,
                    font_family: "Inter".to_string(),
                    color: "#333333".to_string(),
                    position: Position::CENTER,
                },
                effects: EffectsConfig::default(),
            },
            tags: vec!["sample".to_string()],
            is_custom: false,
            created_at: None,
        }
    }

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = "custom".parse::<Category>().unwrap_err();
        assert!(err.contains("unknown category 'custom'"));
        assert!(err.contains("social-media"));
    }

    #[test]
    fn test_builtin_serializes_without_custom_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("isCustom").is_none());
        assert!(json.get("createdAt").is_none());
        assert_eq!(json["category"], "personal");
        assert_eq!(json["config"]["frame"]["type"], "none");
        assert_eq!(json["config"]["text"]["fontSize"], 48.0);
    }

    #[test]
    fn test_custom_serializes_flags() {
        let mut template = sample();
        template.is_custom = true;
        template.created_at = Some(Utc::now());
        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json["isCustom"], true);
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut template = sample();
        template.name = "   ".to_string();
        let err = template.validate().unwrap_err();
        assert!(matches!(err, TemplateError::Invalid { .. }));
        assert!(err.to_string().contains("name must not be empty"));
    }

    #[test]
    fn test_validate_rejects_zero_dimension() {
        let mut template = sample();
        template.config.canvas.height = 0;
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_font_size() {
        let mut template = sample();
        template.config.text.font_size = 0.0;
        assert!(template.validate().is_err());
    }
}
