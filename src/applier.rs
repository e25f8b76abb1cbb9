//! Template applier: projects templates onto the canvas and captures them back
//!
//! Both directions are stateless and operate only through a [`CanvasContext`].
//! The two schemas are not isomorphic and the mapping is lossy;
//! [`PROJECTION_MANIFEST`] and [`CAPTURE_MANIFEST`] list what each direction
//! maps, defaults, or drops.
//!
//! # Example
//!
//! ```rust
//! use prismify_templates::applier::{capture, project};
//! use prismify_templates::canvas::EditorState;
//! use prismify_templates::template::{builtin_templates, Category};
//!
//! let templates = builtin_templates();
//! let template = &templates[0];
//! let mut editor = EditorState::new();
//! project(template, &mut editor.context());
//! assert_eq!(editor.canvas.width, template.config.canvas.width);
//!
//! let saved = capture("Mine", "", Category::Personal, &editor.context());
//! assert_eq!(saved.config.canvas.background, template.config.canvas.background);
//! ```

use chrono::Utc;
use log::{debug, warn};

use crate::canvas::{BackgroundType, CanvasContext, TextAlign, TextLayer, TextStyle};
use crate::template::id::{custom_template_id, next_text_layer_id};
use crate::template::{
    CanvasConfig, Category, EffectsConfig, FrameConfig, Position, Template, TemplateConfig,
    TextConfig,
};

/// Backgrounds starting with this are stored verbatim as gradients
pub const GRADIENT_PREFIX: &str = "linear-gradient";
/// Backgrounds starting with this are treated as image URLs
pub const URL_PREFIX: &str = "http";

/// Font size written when the canvas has no text layer to capture
pub const DEFAULT_FONT_SIZE: f64 = 48.0;
pub const DEFAULT_FONT_FAMILY: &str = "Inter";
pub const DEFAULT_TEXT_COLOR: &str = "#333333";
pub const CUSTOM_THUMBNAIL: &str = "/templates/custom.jpg";
pub const CUSTOM_TAG: &str = "custom";

const LAYER_FONT_WEIGHT: u16 = 500;
const LAYER_LETTER_SPACING: f64 = -0.03;
const LAYER_Z_INDEX: i32 = 10;

/// How one template field is handled in a given direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Written to (or read from) the named collaborator slot
    Mapped(&'static str),
    /// Not read; always set to the given value
    Defaulted(&'static str),
    /// Not consumed at all
    Dropped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub field: &'static str,
    pub coverage: Coverage,
}

const fn mapping(field: &'static str, coverage: Coverage) -> FieldMapping {
    FieldMapping { field, coverage }
}

/// Template field -> collaborator, as performed by [`project`]
pub const PROJECTION_MANIFEST: &[FieldMapping] = &[
    mapping("canvas.width", Coverage::Mapped("canvas.width")),
    mapping("canvas.height", Coverage::Mapped("canvas.height")),
    mapping(
        "canvas.background",
        Coverage::Mapped("background.type + background.color | background.image"),
    ),
    mapping("frame.type", Coverage::Mapped("frame.type")),
    mapping("frame.color", Coverage::Mapped("frame.color")),
    mapping("frame.shadow", Coverage::Mapped("frame.shadow")),
    mapping("text.content", Coverage::Mapped("image.texts[+].content")),
    mapping("text.fontSize", Coverage::Mapped("image.texts[+].style.textSize (/10)")),
    mapping("text.fontFamily", Coverage::Mapped("image.texts[+].style.fontFamily")),
    mapping("text.color", Coverage::Mapped("image.texts[+].style.textColor")),
    mapping("text.position", Coverage::Mapped("image.texts[+].style.position")),
    mapping("effects.blur", Coverage::Dropped),
    mapping("effects.brightness", Coverage::Mapped("image.scale (/100)")),
    mapping("effects.contrast", Coverage::Dropped),
    mapping("effects.saturation", Coverage::Dropped),
];

/// Collaborator -> template field, as performed by [`capture`]
pub const CAPTURE_MANIFEST: &[FieldMapping] = &[
    mapping("canvas.width", Coverage::Mapped("canvas.width")),
    mapping("canvas.height", Coverage::Mapped("canvas.height")),
    mapping(
        "canvas.background",
        Coverage::Mapped("background.image if type is image, else background.color"),
    ),
    mapping("frame.type", Coverage::Mapped("frame.type")),
    mapping("frame.color", Coverage::Mapped("frame.color")),
    mapping("frame.shadow", Coverage::Mapped("frame.shadow")),
    mapping("text.content", Coverage::Mapped("image.texts[0].content, else name")),
    mapping("text.fontSize", Coverage::Mapped("image.texts[0].style.textSize (*10), else 48")),
    mapping("text.fontFamily", Coverage::Mapped("image.texts[0].style.fontFamily, else Inter")),
    mapping("text.color", Coverage::Mapped("image.texts[0].style.textColor, else #333333")),
    mapping("text.position", Coverage::Defaulted("{50, 50}")),
    mapping("effects.blur", Coverage::Defaulted("0")),
    mapping("effects.brightness", Coverage::Mapped("image.scale (*100)")),
    mapping("effects.contrast", Coverage::Defaulted("100")),
    mapping("effects.saturation", Coverage::Defaulted("100")),
];

/// Look up how a field is covered in a manifest
pub fn coverage_of(manifest: &[FieldMapping], field: &str) -> Option<Coverage> {
    manifest
        .iter()
        .find(|m| m.field == field)
        .map(|m| m.coverage)
}

/// Classify a background string; first matching prefix wins, solid otherwise
pub fn classify_background(background: &str) -> BackgroundType {
    if background.starts_with(GRADIENT_PREFIX) {
        BackgroundType::Gradient
    } else if background.starts_with(URL_PREFIX) {
        BackgroundType::Image
    } else {
        BackgroundType::Solid
    }
}

/// Font size in points -> editor size token
pub fn text_size_token(font_size: f64) -> String {
    format!("{}", font_size / 10.0)
}

/// Parse the leading number of a size token, ignoring any trailing unit
pub fn parse_size_token(token: &str) -> Option<f64> {
    let token = token.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in token.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    token[..end].parse().ok()
}

/// Percent position -> CSS position pair
pub fn format_position(position: Position) -> String {
    format!("{}% {}%", position.x, position.y)
}

/// Write a template's configuration into the live canvas state
///
/// Text layers already on the canvas are kept; a template with text appends
/// one new layer.
pub fn project(template: &Template, ctx: &mut CanvasContext<'_>) {
    let config = &template.config;
    debug!("projecting template '{}' onto canvas", template.id);

    ctx.canvas.set_canvas_width(config.canvas.width);
    ctx.canvas.set_canvas_height(config.canvas.height);

    let background = &config.canvas.background;
    let background_type = classify_background(background);
    ctx.background.set_background_type(background_type);
    match background_type {
        BackgroundType::Image => ctx.background.set_background_image(background.clone()),
        BackgroundType::Gradient | BackgroundType::Solid => {
            ctx.background.set_background_color(background.clone())
        }
    }

    ctx.frame.set_frame_type(config.frame.frame_type);
    ctx.frame.set_frame_color(config.frame.color.clone());
    ctx.frame.set_shadow(config.frame.shadow);

    // Only brightness reaches the canvas; see PROJECTION_MANIFEST.
    ctx.image.set_scale(config.effects.brightness / 100.0);

    if template.has_text() {
        let mut texts = ctx.image.texts().to_vec();
        let layer = text_layer(&config.text, next_text_layer_id(&texts));
        debug!("adding text layer {} from template '{}'", layer.id, template.id);
        texts.push(layer);
        ctx.image.set_texts(texts);
    }
}

fn text_layer(text: &TextConfig, id: u64) -> TextLayer {
    TextLayer {
        id,
        content: text.content.clone(),
        style: TextStyle {
            text_size: text_size_token(text.font_size),
            text_color: text.color.clone(),
            text_align: TextAlign::Left,
            font_weight: LAYER_FONT_WEIGHT,
            font_family: text.font_family.clone(),
            letter_spacing: LAYER_LETTER_SPACING,
            text_shadow: String::new(),
            shadow_name: String::new(),
            shadow_color: "#000".to_string(),
            shadow_opacity: 0.0,
            has_background: false,
            background_color: "#ffffff".to_string(),
            padding: "0".to_string(),
            z_index: LAYER_Z_INDEX,
            position: format_position(text.position),
        },
    }
}

/// Build a new custom template from the live canvas state
pub fn capture(
    name: &str,
    description: &str,
    category: Category,
    ctx: &CanvasContext<'_>,
) -> Template {
    let background = match (ctx.background.background_type(), ctx.background.background_image()) {
        (BackgroundType::Image, Some(image)) if !image.is_empty() => image.to_string(),
        _ => ctx.background.background_color().to_string(),
    };

    let text = match ctx.image.texts().first() {
        Some(layer) => TextConfig {
            content: layer.content.clone(),
            font_size: captured_font_size(&layer.style.text_size),
            font_family: layer.style.font_family.clone(),
            color: layer.style.text_color.clone(),
            position: Position::CENTER,
        },
        None => TextConfig {
            content: name.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            color: DEFAULT_TEXT_COLOR.to_string(),
            position: Position::CENTER,
        },
    };

    let template = Template {
        id: custom_template_id(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        thumbnail: CUSTOM_THUMBNAIL.to_string(),
        config: TemplateConfig {
            canvas: CanvasConfig {
                width: ctx.canvas.canvas_width(),
                height: ctx.canvas.canvas_height(),
                background,
            },
            frame: FrameConfig {
                frame_type: ctx.frame.frame_type(),
                color: ctx.frame.frame_color().to_string(),
                shadow: ctx.frame.shadow(),
            },
            text,
            effects: EffectsConfig {
                brightness: ctx.image.scale() * 100.0,
                ..EffectsConfig::default()
            },
        },
        tags: vec![CUSTOM_TAG.to_string()],
        is_custom: true,
        created_at: Some(Utc::now()),
    };
    debug!("captured canvas as template '{}'", template.id);
    template
}

fn captured_font_size(token: &str) -> f64 {
    match parse_size_token(token).map(|size| size * 10.0) {
        Some(size) if size.is_finite() && size > 0.0 => size,
        _ => {
            warn!(
                "unusable text size '{}', using {} instead",
                token, DEFAULT_FONT_SIZE
            );
            DEFAULT_FONT_SIZE
        }
    }
}
