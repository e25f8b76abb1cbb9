//! Canvas state collaborators
//!
//! The editor keeps its live state in four independent containers: image
//! options (scale and text layers), background, frame, and canvas size. The
//! template applier reaches them only through the traits below, bundled into
//! a [`CanvasContext`] for the duration of one call.

mod state;

use serde::{Deserialize, Serialize};

pub use state::{BackgroundState, CanvasSize, EditorState, FrameState, ImageState};

use crate::template::FrameType;

/// How the canvas background is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    #[default]
    Solid,
    Gradient,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Styling of a text layer as the editor stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Display size token, e.g. `"4.8"`
    pub text_size: String,
    pub text_color: String,
    pub text_align: TextAlign,
    pub font_weight: u16,
    pub font_family: String,
    pub letter_spacing: f64,
    pub text_shadow: String,
    pub shadow_name: String,
    pub shadow_color: String,
    pub shadow_opacity: f64,
    pub has_background: bool,
    pub background_color: String,
    pub padding: String,
    pub z_index: i32,
    /// CSS position pair, e.g. `"50% 50%"`
    pub position: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            text_size: "4.8".to_string(),
            text_color: "#333333".to_string(),
            text_align: TextAlign::Left,
            font_weight: 500,
            font_family: "Inter".to_string(),
            letter_spacing: -0.03,
            text_shadow: String::new(),
            shadow_name: String::new(),
            shadow_color: "#000".to_string(),
            shadow_opacity: 0.0,
            has_background: false,
            background_color: "#ffffff".to_string(),
            padding: "0".to_string(),
            z_index: 10,
            position: "50% 50%".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLayer {
    pub id: u64,
    pub content: String,
    pub style: TextStyle,
}

/// Image and effects state: scale plus the ordered text layers
pub trait ImageOptions {
    fn scale(&self) -> f64;
    fn texts(&self) -> &[TextLayer];
    fn set_scale(&mut self, scale: f64);
    /// Replace the entire text-layer sequence
    fn set_texts(&mut self, texts: Vec<TextLayer>);
}

pub trait BackgroundOptions {
    fn background_type(&self) -> BackgroundType;
    /// Raw CSS color or gradient string
    fn background_color(&self) -> &str;
    fn background_image(&self) -> Option<&str>;
    fn set_background_type(&mut self, background_type: BackgroundType);
    fn set_background_color(&mut self, color: String);
    fn set_background_image(&mut self, image: String);
}

pub trait FrameOptions {
    fn frame_type(&self) -> FrameType;
    fn frame_color(&self) -> &str;
    fn shadow(&self) -> bool;
    fn set_frame_type(&mut self, frame_type: FrameType);
    fn set_frame_color(&mut self, color: String);
    fn set_shadow(&mut self, shadow: bool);
}

pub trait CanvasDimensions {
    fn canvas_width(&self) -> u32;
    fn canvas_height(&self) -> u32;
    fn set_canvas_width(&mut self, width: u32);
    fn set_canvas_height(&mut self, height: u32);
}

/// Exclusive handles to all four collaborators
///
/// Holding the context borrows every collaborator mutably, so a projection or
/// capture cannot interleave with any other writer.
pub struct CanvasContext<'a> {
    pub image: &'a mut dyn ImageOptions,
    pub background: &'a mut dyn BackgroundOptions,
    pub frame: &'a mut dyn FrameOptions,
    pub canvas: &'a mut dyn CanvasDimensions,
}

impl<'a> CanvasContext<'a> {
    pub fn new(
        image: &'a mut dyn ImageOptions,
        background: &'a mut dyn BackgroundOptions,
        frame: &'a mut dyn FrameOptions,
        canvas: &'a mut dyn CanvasDimensions,
    ) -> Self {
        Self {
            image,
            background,
            frame,
            canvas,
        }
    }
}
