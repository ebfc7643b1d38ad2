//! JSON document format for save/load.
//!
//! The saved form mirrors the scene but carries no decoded pixels: image
//! elements keep only their placement, and the background image is kept
//! as its data URL. Colors are CSS strings.
//!
//! ```json
//! {
//!   "backgroundColor": "#FFFFFF",
//!   "backgroundImage": null,
//!   "elements": [
//!     { "type": "text", "content": "Hello", "x": 10, "y": 10,
//!       "fontSize": 16, "fontFamily": "Arial", "color": "#333333" },
//!     { "type": "circle", "x": 50, "y": 50, "radius": 20,
//!       "fillColor": "#4A90E2", "strokeColor": "#2C3E50", "strokeWidth": 2 }
//!   ]
//! }
//! ```

use crate::bitmap::BitmapSlot;
use crate::color::Color;
use crate::error::SceneError;
use crate::model::*;
use crate::scene::Scene;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedScene {
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub elements: Vec<SavedElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SavedElement {
    #[serde(rename_all = "camelCase")]
    Text {
        content: String,
        x: f64,
        y: f64,
        #[serde(default = "default_font_size")]
        font_size: f64,
        #[serde(default = "default_font_family")]
        font_family: String,
        #[serde(default = "default_ink")]
        color: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bold: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        italic: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        underline: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_align: Option<TextAlign>,
    },
    #[serde(rename_all = "camelCase")]
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        #[serde(default = "default_ink")]
        fill_color: String,
        #[serde(default = "default_ink")]
        stroke_color: String,
        #[serde(default)]
        stroke_width: f64,
    },
    #[serde(rename_all = "camelCase")]
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default = "default_ink")]
        fill_color: String,
        #[serde(default = "default_ink")]
        stroke_color: String,
        #[serde(default)]
        stroke_width: f64,
    },
    Image {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

fn default_background() -> String {
    "#FFFFFF".into()
}

fn default_font_size() -> f64 {
    16.0
}

fn default_font_family() -> String {
    "Arial".into()
}

fn default_ink() -> String {
    "#000000".into()
}

// ─── Scene → saved ───────────────────────────────────────────────────────

impl From<&Element> for SavedElement {
    fn from(element: &Element) -> Self {
        match &element.kind {
            ElementKind::Text(t) => SavedElement::Text {
                content: t.content.clone(),
                x: t.x,
                y: t.y,
                font_size: t.font.size_px,
                font_family: t.font.family.clone(),
                color: t.color.to_css(),
                bold: Some(t.font.bold),
                italic: Some(t.font.italic),
                underline: Some(t.underline),
                text_align: t.align,
            },
            ElementKind::Shape(s) => match s.geometry {
                ShapeGeometry::Circle { radius } => SavedElement::Circle {
                    x: s.x,
                    y: s.y,
                    radius,
                    fill_color: s.fill.to_css(),
                    stroke_color: s.stroke.to_css(),
                    stroke_width: s.stroke_width,
                },
                ShapeGeometry::Rectangle { width, height } => SavedElement::Rectangle {
                    x: s.x,
                    y: s.y,
                    width,
                    height,
                    fill_color: s.fill.to_css(),
                    stroke_color: s.stroke.to_css(),
                    stroke_width: s.stroke_width,
                },
            },
            ElementKind::Image(i) => SavedElement::Image {
                x: i.x,
                y: i.y,
                width: i.width,
                height: i.height,
            },
        }
    }
}

impl From<&Scene> for SavedScene {
    fn from(scene: &Scene) -> Self {
        Self {
            background_color: scene.background.color.to_css(),
            background_image: scene.background.image.as_ref().map(|img| img.source.clone()),
            elements: scene.elements().map(SavedElement::from).collect(),
        }
    }
}

// ─── Saved → scene ───────────────────────────────────────────────────────

impl SavedElement {
    pub fn into_element(self) -> Result<Element, SceneError> {
        let kind = match self {
            SavedElement::Text {
                content,
                x,
                y,
                font_size,
                font_family,
                color,
                bold,
                italic,
                underline,
                text_align,
            } => ElementKind::Text(TextElement {
                x,
                y,
                content,
                font: FontSpec {
                    family: font_family,
                    size_px: font_size,
                    bold: bold.unwrap_or(false),
                    italic: italic.unwrap_or(false),
                },
                color: Color::parse(&color)?,
                underline: underline.unwrap_or(false),
                align: text_align,
            }),
            SavedElement::Circle {
                x,
                y,
                radius,
                fill_color,
                stroke_color,
                stroke_width,
            } => ElementKind::Shape(ShapeElement {
                x,
                y,
                geometry: ShapeGeometry::Circle { radius },
                fill: Color::parse(&fill_color)?,
                stroke: Color::parse(&stroke_color)?,
                stroke_width,
            }),
            SavedElement::Rectangle {
                x,
                y,
                width,
                height,
                fill_color,
                stroke_color,
                stroke_width,
            } => ElementKind::Shape(ShapeElement {
                x,
                y,
                geometry: ShapeGeometry::Rectangle { width, height },
                fill: Color::parse(&fill_color)?,
                stroke: Color::parse(&stroke_color)?,
                stroke_width,
            }),
            SavedElement::Image {
                x,
                y,
                width,
                height,
            } => ElementKind::Image(ImageElement::new(x, y, width, height)),
        };
        Ok(Element::new(kind))
    }
}

impl SavedScene {
    /// Build a fresh scene. Fails without side effects on the first bad field.
    ///
    /// A background image comes back as `BitmapSlot::Pending`; the caller
    /// decodes its data URL and attaches the bitmap.
    pub fn into_scene(self) -> Result<Scene, SceneError> {
        let mut scene = Scene::with_background(Color::parse(&self.background_color)?);
        if let Some(source) = self.background_image {
            scene.set_background_image(source, BitmapSlot::Pending);
        }
        for saved in self.elements {
            scene.add_element(saved.into_element()?);
        }
        Ok(scene)
    }
}

/// Serialize `scene` to pretty-printed JSON.
pub fn save_json(scene: &Scene) -> Result<String, SceneError> {
    Ok(serde_json::to_string_pretty(&SavedScene::from(scene))?)
}

/// Parse a JSON document into a new scene.
pub fn load_json(text: &str) -> Result<Scene, SceneError> {
    let saved: SavedScene = serde_json::from_str(text)?;
    saved.into_scene()
}
