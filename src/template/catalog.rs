//! Built-in template catalog
//!
//! The catalog ships as an embedded TOML document and is parsed once per
//! process. Built-in templates are never mutated or removed at runtime.

use serde::Deserialize;

use crate::error::TemplateError;

use super::model::Template;

#[derive(Deserialize)]
struct CatalogDocument {
    templates: Vec<Template>,
}

const BUILTIN_CATALOG: &str = r##"
# Social media

[[templates]]
id = "instagram-post"
name = "Instagram Post"
description = "Perfect square format for Instagram posts"
category = "social-media"
thumbnail = "/templates/instagram-post.jpg"
tags = ["instagram", "social", "square", "gradient"]
config.canvas = { width = 1080, height = 1080, background = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)" }
config.frame = { type = "none", color = "#ffffff", shadow = false }
config.text = { content = "Your amazing content here", fontSize = 48, fontFamily = "Inter", color = "#ffffff", position = { x = 50, y = 50 } }
config.effects = { blur = 0, brightness = 100, contrast = 100, saturation = 100 }

[[templates]]
id = "twitter-header"
name = "Twitter Header"
description = "Wide format perfect for Twitter headers"
category = "social-media"
thumbnail = "/templates/twitter-header.jpg"
tags = ["twitter", "header", "wide", "blue"]
config.canvas = { width = 1500, height = 500, background = "linear-gradient(90deg, #1da1f2 0%, #0d8bd9 100%)" }
config.frame = { type = "none", color = "#ffffff", shadow = false }
config.text = { content = "Your Twitter Header", fontSize = 64, fontFamily = "Inter", color = "#ffffff", position = { x = 50, y = 50 } }
config.effects = { blur = 0, brightness = 100, contrast = 100, saturation = 100 }

[[templates]]
id = "linkedin-post"
name = "LinkedIn Post"
description = "Professional format for LinkedIn content"
category = "social-media"
thumbnail = "/templates/linkedin-post.jpg"
tags = ["linkedin", "professional", "business", "blue"]
config.canvas = { width = 1200, height = 628, background = "linear-gradient(135deg, #0077b5 0%, #005885 100%)" }
config.frame = { type = "none", color = "#ffffff", shadow = false }
config.text = { content = "Professional Content", fontSize = 56, fontFamily = "Inter", color = "#ffffff", position = { x = 50, y = 50 } }
config.effects = { blur = 0, brightness = 100, contrast = 100, saturation = 100 }

# Presentations

[[templates]]
id = "presentation-slide"
name = "Presentation Slide"
description = "Clean slide format for presentations"
category = "presentation"
thumbnail = "/templates/presentation-slide.jpg"
tags = ["presentation", "slide", "clean", "white"]
config.canvas = { width = 1920, height = 1080, background = "#ffffff" }
config.frame = { type = "none", color = "#333333", shadow = false }
config.text = { content = "Presentation Title", fontSize = 72, fontFamily = "Inter", color = "#333333", position = { x = 50, y = 50 } }
config.effects = { blur = 0, brightness = 100, contrast = 100, saturation = 100 }

[[templates]]
id = "keynote-slide"
name = "Keynote Style"
description = "Elegant keynote presentation style"
category = "presentation"
thumbnail = "/templates/keynote-slide.jpg"
tags = ["keynote", "elegant", "dark", "gradient"]
config.canvas = { width = 1920, height = 1080, background = "linear-gradient(135deg, #2c3e50 0%, #34495e 100%)" }
config.frame = { type = "none", color = "#ffffff", shadow = false }
config.text = { content = "Keynote Title", fontSize = 80, fontFamily = "Inter", color = "#ffffff", position = { x = 50, y = 50 } }
config.effects = { blur = 0, brightness = 100, contrast = 100, saturation = 100 }

# Marketing

[[templates]]
id = "product-showcase"
name = "Product Showcase"
description = "Highlight your products with style"
category = "marketing"
thumbnail = "/templates/product-showcase.jpg"
tags = ["product", "showcase", "macbook", "pink"]
config.canvas = { width = 1200, height = 800, background = "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)" }
config.frame = { type = "macbook", color = "#333333", shadow = true }
config.text = { content = "Product Name", fontSize = 60, fontFamily = "Inter", color = "#ffffff", position = { x = 50, y = 50 } }
config.effects = { blur = 0, brightness = 100, contrast = 100, saturation = 100 }

[[templates]]
id = "advertisement"
name = "Advertisement"
description = "Eye-catching ad format"
category = "marketing"
thumbnail = "/templates/advertisement.jpg"
tags = ["ad", "offer", "red", "attention"]
config.canvas = { width = 1200, height = 628, background = "linear-gradient(135deg, #ff6b6b 0%, #ee5a24 100%)" }
config.frame = { type = "none", color = "#ffffff", shadow = false }
config.text = { content = "Special Offer!", fontSize = 68, fontFamily = "Inter", color = "#ffffff", position = { x = 50, y = 50 } }
config.effects = { blur = 0, brightness = 100, contrast = 100, saturation = 100 }

# Personal

[[templates]]
id = "personal-blog"
name = "Personal Blog"
description = "Clean format for blog posts"
category = "personal"
thumbnail = "/templates/personal-blog.jpg"
tags = ["blog", "personal", "soft", "pastel"]
config.canvas = { width = 1200, height = 628, background = "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)" }
config.frame = { type = "none", color = "#333333", shadow = false }
config.text = { content = "Blog Post Title", fontSize = 56, fontFamily = "Inter", color = "#333333", position = { x = 50, y = 50 } }
config.effects = { blur = 0, brightness = 100, contrast = 100, saturation = 100 }

[[templates]]
id = "portfolio"
name = "Portfolio"
description = "Showcase your work professionally"
category = "personal"
thumbnail = "/templates/portfolio.jpg"
tags = ["portfolio", "iphone", "professional", "purple"]
config.canvas = { width = 1200, height = 800, background = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)" }
config.frame = { type = "iphone", color = "#000000", shadow = true }
config.text = { content = "Portfolio", fontSize = 64, fontFamily = "Inter", color = "#ffffff", position = { x = 50, y = 50 } }
config.effects = { blur = 0, brightness = 100, contrast = 100, saturation = 100 }

# Business

[[templates]]
id = "business-card"
name = "Business Card"
description = "Professional business card format"
category = "business"
thumbnail = "/templates/business-card.jpg"
tags = ["business", "card", "professional", "white"]
config.canvas = { width = 1050, height = 600, background = "#ffffff" }
config.frame = { type = "none", color = "#333333", shadow = false }
config.text = { content = "Your Name\nJob Title", fontSize = 48, fontFamily = "Inter", color = "#333333", position = { x = 50, y = 50 } }
config.effects = { blur = 0, brightness = 100, contrast = 100, saturation = 100 }

[[templates]]
id = "corporate-presentation"
name = "Corporate Presentation"
description = "Formal corporate presentation style"
category = "business"
thumbnail = "/templates/corporate-presentation.jpg"
tags = ["corporate", "formal", "desktop", "dark"]
config.canvas = { width = 1920, height = 1080, background = "linear-gradient(135deg, #2c3e50 0%, #34495e 100%)" }
config.frame = { type = "desktop", color = "#333333", shadow = true }
config.text = { content = "Corporate Title", fontSize = 76, fontFamily = "Inter", color = "#ffffff", position = { x = 50, y = 50 } }
config.effects = { blur = 0, brightness = 100, contrast = 100, saturation = 100 }
"##;

/// Parse a catalog document in the built-in TOML layout
pub fn parse_catalog(content: &str) -> Result<Vec<Template>, TemplateError> {
    let document: CatalogDocument = toml::from_str(content)?;
    for template in &document.templates {
        template.validate()?;
    }
    Ok(document.templates)
}

/// The built-in templates, in gallery order
pub fn builtin_templates() -> Vec<Template> {
    parse_catalog(BUILTIN_CATALOG).expect("Built-in catalog should be valid TOML")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::template::{Category, FrameType};

    #[test]
    fn test_builtin_count_and_order() {
        let templates = builtin_templates();
        assert_eq!(templates.len(), 11);
        assert_eq!(templates[0].id, "instagram-post");
        assert_eq!(templates[10].id, "corporate-presentation");
    }

    #[test]
    fn test_builtin_ids_unique() {
        let templates = builtin_templates();
        let ids: HashSet<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), templates.len());
    }

    #[test]
    fn test_builtins_are_not_custom() {
        for template in builtin_templates() {
            assert!(!template.is_custom, "{} should be built-in", template.id);
            assert!(template.created_at.is_none());
        }
    }

    #[test]
    fn test_every_category_has_templates() {
        let templates = builtin_templates();
        for category in Category::ALL {
            assert!(
                templates.iter().any(|t| t.category == category),
                "no built-in template for {}",
                category
            );
        }
    }

    #[test]
    fn test_product_showcase_fields() {
        let templates = builtin_templates();
        let showcase = templates
            .iter()
            .find(|t| t.id == "product-showcase")
            .expect("product-showcase should exist");
        assert_eq!(showcase.category, Category::Marketing);
        assert_eq!(showcase.config.canvas.width, 1200);
        assert_eq!(showcase.config.canvas.height, 800);
        assert_eq!(showcase.config.frame.frame_type, FrameType::Macbook);
        assert!(showcase.config.frame.shadow);
        assert_eq!(showcase.config.text.font_size, 60.0);
        assert_eq!(showcase.config.effects.brightness, 100.0);
    }

    #[test]
    fn test_business_card_text_has_line_break() {
        let templates = builtin_templates();
        let card = templates.iter().find(|t| t.id == "business-card").unwrap();
        assert_eq!(card.config.text.content, "Your Name\nJob Title");
        assert_eq!(card.config.canvas.background, "#ffffff");
    }

    #[test]
    fn test_invalid_catalog_error() {
        let result = parse_catalog("templates = 3");
        assert!(matches!(result, Err(TemplateError::Catalog(_))));
    }

    #[test]
    fn test_catalog_entry_failing_validation() {
        let doc = r##"
[[templates]]
id = "broken"
name = "Broken"
category = "personal"
config.canvas = { width = 0, height = 100, background = "#fff" }
config.frame = { type = "none", color = "#fff", shadow = false }
config.text = { content = "", fontSize = 10, fontFamily = "Inter", color = "#000", position = { x = 0, y = 0 } }
config.effects = { blur = 0, brightness = 100, contrast = 100, saturation = 100 }
"##;
        let result = parse_catalog(doc);
        assert!(matches!(result, Err(TemplateError::Invalid { .. })));
    }
}
