//! Editor configuration.
//!
//! Every field has a default matching the business-card designer, so an
//! embedder only overrides what differs (`{"historyCap": 100}` is a valid
//! config document).

use crate::color::Color;
use crate::error::SceneError;
use crate::journal::DEFAULT_HISTORY_CAP;
use crate::model::{FontSpec, ShapeElement, TextElement};
use serde::{Deserialize, Serialize};

/// Nominal document size in document-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentSize {
    pub width: f64,
    pub height: f64,
}

/// Document sizes of the built-in editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentPreset {
    BusinessCard,
    Logo,
    Mockup,
}

impl DocumentPreset {
    pub fn size(self) -> DocumentSize {
        match self {
            DocumentPreset::BusinessCard => DocumentSize {
                width: 350.0,
                height: 200.0,
            },
            DocumentPreset::Logo => DocumentSize {
                width: 400.0,
                height: 400.0,
            },
            DocumentPreset::Mockup => DocumentSize {
                width: 800.0,
                height: 600.0,
            },
        }
    }
}

/// Style applied to newly created text elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextDefaults {
    pub content: String,
    pub font: FontSpec,
    pub color: Color,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            content: "Text".into(),
            font: FontSpec::default(),
            color: Color::from_rgba8(0x33, 0x33, 0x33, 0xFF),
        }
    }
}

impl TextDefaults {
    pub fn build(&self, x: f64, y: f64) -> TextElement {
        TextElement {
            font: self.font.clone(),
            color: self.color,
            ..TextElement::new(self.content.clone(), x, y)
        }
    }
}

/// Style and size applied to newly created shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeDefaults {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub rect_width: f64,
    pub rect_height: f64,
    pub circle_radius: f64,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            fill: Color::from_rgba8(0x4A, 0x90, 0xE2, 0xFF),
            stroke: Color::from_rgba8(0x2C, 0x3E, 0x50, 0xFF),
            stroke_width: 2.0,
            rect_width: 100.0,
            rect_height: 60.0,
            circle_radius: 30.0,
        }
    }
}

impl ShapeDefaults {
    pub fn rectangle(&self, x: f64, y: f64) -> ShapeElement {
        self.paint(ShapeElement::rectangle(x, y, self.rect_width, self.rect_height))
    }

    pub fn circle(&self, x: f64, y: f64) -> ShapeElement {
        self.paint(ShapeElement::circle(x, y, self.circle_radius))
    }

    fn paint(&self, shape: ShapeElement) -> ShapeElement {
        ShapeElement {
            fill: self.fill,
            stroke: self.stroke,
            stroke_width: self.stroke_width,
            ..shape
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub document: DocumentSize,
    /// Maximum undo history entries. Default: **50**.
    pub history_cap: usize,
    /// How much of a dragged element must stay inside the document. Default: **20**.
    pub min_visible_margin: f64,
    /// Output scale for PNG export. Default: **3.0** (print resolution).
    pub export_scale: f64,
    pub text: TextDefaults,
    pub shape: ShapeDefaults,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            document: DocumentPreset::BusinessCard.size(),
            history_cap: DEFAULT_HISTORY_CAP,
            min_visible_margin: 20.0,
            export_scale: 3.0,
            text: TextDefaults::default(),
            shape: ShapeDefaults::default(),
        }
    }
}

impl EditorConfig {
    pub fn for_preset(preset: DocumentPreset) -> Self {
        Self {
            document: preset.size(),
            ..Self::default()
        }
    }

    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = EditorConfig::from_json(r#"{ "historyCap": 10, "exportScale": 2 }"#).unwrap();
        assert_eq!(config.history_cap, 10);
        assert_eq!(config.export_scale, 2.0);
        assert_eq!(config.min_visible_margin, 20.0);
        assert_eq!(config.document, DocumentPreset::BusinessCard.size());
    }

    #[test]
    fn nested_colors_parse_from_css() {
        let config =
            EditorConfig::from_json(r#"{ "shape": { "fill": "red", "strokeWidth": 0 } }"#).unwrap();
        assert_eq!(config.shape.fill.to_css(), "#FF0000");
        assert_eq!(config.shape.stroke_width, 0.0);
        assert_eq!(config.shape.rect_width, 100.0);
    }

    #[test]
    fn preset_sizes() {
        let config = EditorConfig::for_preset(DocumentPreset::Mockup);
        assert_eq!((config.document.width, config.document.height), (800.0, 600.0));
    }
}
