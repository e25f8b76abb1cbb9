//! In-memory collaborator implementations
//!
//! [`EditorState`] owns one of each collaborator and serializes to JSON, which
//! is how the CLI keeps editor state between invocations.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    BackgroundOptions, BackgroundType, CanvasContext, CanvasDimensions, FrameOptions,
    ImageOptions, TextLayer,
};
use crate::error::TemplateError;
use crate::template::FrameType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageState {
    pub scale: f64,
    pub texts: Vec<TextLayer>,
}

impl Default for ImageState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            texts: Vec::new(),
        }
    }
}

impl ImageOptions for ImageState {
    fn scale(&self) -> f64 {
        self.scale
    }

    fn texts(&self) -> &[TextLayer] {
        &self.texts
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn set_texts(&mut self, texts: Vec<TextLayer>) {
        self.texts = texts;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundState {
    pub background_type: BackgroundType,
    pub background_color: String,
    pub background_image: Option<String>,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self {
            background_type: BackgroundType::Solid,
            background_color: "#ffffff".to_string(),
            background_image: None,
        }
    }
}

impl BackgroundOptions for BackgroundState {
    fn background_type(&self) -> BackgroundType {
        self.background_type
    }

    fn background_color(&self) -> &str {
        &self.background_color
    }

    fn background_image(&self) -> Option<&str> {
        self.background_image.as_deref()
    }

    fn set_background_type(&mut self, background_type: BackgroundType) {
        self.background_type = background_type;
    }

    fn set_background_color(&mut self, color: String) {
        self.background_color = color;
    }

    fn set_background_image(&mut self, image: String) {
        self.background_image = Some(image);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrameState {
    pub frame_type: FrameType,
    pub frame_color: String,
    pub shadow: bool,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            frame_type: FrameType::None,
            frame_color: "#ffffff".to_string(),
            shadow: false,
        }
    }
}

impl FrameOptions for FrameState {
    fn frame_type(&self) -> FrameType {
        self.frame_type
    }

    fn frame_color(&self) -> &str {
        &self.frame_color
    }

    fn shadow(&self) -> bool {
        self.shadow
    }

    fn set_frame_type(&mut self, frame_type: FrameType) {
        self.frame_type = frame_type;
    }

    fn set_frame_color(&mut self, color: String) {
        self.frame_color = color;
    }

    fn set_shadow(&mut self, shadow: bool) {
        self.shadow = shadow;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl CanvasDimensions for CanvasSize {
    fn canvas_width(&self) -> u32 {
        self.width
    }

    fn canvas_height(&self) -> u32 {
        self.height
    }

    fn set_canvas_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_canvas_height(&mut self, height: u32) {
        self.height = height;
    }
}

/// All four collaborators owned together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorState {
    pub image: ImageState,
    pub background: BackgroundState,
    pub frame: FrameState,
    pub canvas: CanvasSize,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow every collaborator for one applier call
    pub fn context(&mut self) -> CanvasContext<'_> {
        CanvasContext::new(
            &mut self.image,
            &mut self.background,
            &mut self.frame,
            &mut self.canvas,
        )
    }

    pub fn from_json(content: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load editor state from a JSON file, or the default state if it is missing
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn save(&self, path: &Path) -> Result<(), TemplateError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
