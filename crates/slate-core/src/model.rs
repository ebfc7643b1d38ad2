//! Element types for the scene model.
//!
//! Every drawable unit is an `Element`: an identity plus a typed
//! `ElementKind` (text, shape, image). Element order in the `Scene` is the
//! only z-order; there is no z-index field. Layout is never cached here;
//! bounding boxes are recomputed from these fields on every render.

use crate::bitmap::BitmapSlot;
use crate::color::Color;
use crate::error::SceneError;
use crate::id::ElementId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Line-height multiplier applied to `font.size_px` for multi-line text.
pub const LINE_HEIGHT: f64 = 1.2;

// ─── Font / Text ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
    pub bold: bool,
    pub italic: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Arial".into(),
            size_px: 16.0,
            bold: false,
            italic: false,
        }
    }
}

impl FontSpec {
    /// CSS font shorthand, e.g. `italic bold 24px Georgia`.
    pub fn css(&self) -> String {
        let mut out = String::new();
        if self.italic {
            out.push_str("italic ");
        }
        if self.bold {
            out.push_str("bold ");
        }
        out.push_str(&format!("{}px {}", self.size_px, self.family));
        out
    }

    pub fn line_height(&self) -> f64 {
        self.size_px * LINE_HEIGHT
    }
}

/// Horizontal text alignment relative to the element's `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    /// Left edge (or center/right edge per `align`) of the text block.
    pub x: f64,
    /// Top of the first line.
    pub y: f64,
    /// May contain `\n` line breaks.
    pub content: String,
    pub font: FontSpec,
    pub color: Color,
    pub underline: bool,
    pub align: Option<TextAlign>,
}

impl TextElement {
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            font: FontSpec::default(),
            color: Color::BLACK,
            underline: false,
            align: None,
        }
    }

    pub fn lines(&self) -> SmallVec<[&str; 4]> {
        self.content.split('\n').collect()
    }
}

// ─── Shapes ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    /// Centered on the element's `x`, `y`.
    Circle { radius: f64 },
    /// Anchored at the element's top-left `x`, `y`.
    Rectangle { width: f64, height: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeElement {
    pub x: f64,
    pub y: f64,
    pub geometry: ShapeGeometry,
    pub fill: Color,
    pub stroke: Color,
    /// Stroke is skipped when zero.
    pub stroke_width: f64,
}

impl ShapeElement {
    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            geometry: ShapeGeometry::Circle { radius },
            fill: Color::BLACK,
            stroke: Color::BLACK,
            stroke_width: 0.0,
        }
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            geometry: ShapeGeometry::Rectangle { width, height },
            fill: Color::BLACK,
            stroke: Color::BLACK,
            stroke_width: 0.0,
        }
    }
}

// ─── Images ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Decoded pixels, owned by this element.
    pub bitmap: BitmapSlot,
}

impl ImageElement {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            bitmap: BitmapSlot::Empty,
        }
    }
}

// ─── Elements ────────────────────────────────────────────────────────────

/// The element kinds a scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Text(TextElement),
    Shape(ShapeElement),
    Image(ImageElement),
}

/// A single drawable unit in a scene.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: ElementId::next(),
            kind,
        }
    }

    pub fn text(text: TextElement) -> Self {
        Self::new(ElementKind::Text(text))
    }

    pub fn shape(shape: ShapeElement) -> Self {
        Self::new(ElementKind::Shape(shape))
    }

    pub fn image(image: ImageElement) -> Self {
        Self::new(ElementKind::Image(image))
    }

    /// Short kind label used in diagnostics (`text`, `circle`, ...).
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            ElementKind::Text(_) => "text",
            ElementKind::Shape(shape) => match shape.geometry {
                ShapeGeometry::Circle { .. } => "circle",
                ShapeGeometry::Rectangle { .. } => "rectangle",
            },
            ElementKind::Image(_) => "image",
        }
    }

    pub fn position(&self) -> (f64, f64) {
        match &self.kind {
            ElementKind::Text(t) => (t.x, t.y),
            ElementKind::Shape(s) => (s.x, s.y),
            ElementKind::Image(i) => (i.x, i.y),
        }
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        let (px, py) = match &mut self.kind {
            ElementKind::Text(t) => (&mut t.x, &mut t.y),
            ElementKind::Shape(s) => (&mut s.x, &mut s.y),
            ElementKind::Image(i) => (&mut i.x, &mut i.y),
        };
        *px = x;
        *py = y;
    }

    /// Content equality, ignoring identity.
    pub fn same_content(&self, other: &Element) -> bool {
        self.kind == other.kind
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.kind {
            ElementKind::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeElement> {
        match &self.kind {
            ElementKind::Shape(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageElement> {
        match &self.kind {
            ElementKind::Image(i) => Some(i),
            _ => None,
        }
    }

    /// Merge `patch` into this element.
    ///
    /// Every set field is checked against the element kind before any
    /// field is written, so a rejected patch leaves the element untouched.
    pub fn apply_patch(&mut self, patch: &ElementPatch) -> Result<(), SceneError> {
        if let Some(field) = patch.first_foreign_field(self) {
            return Err(SceneError::TypeMismatch {
                kind: self.kind_name(),
                field,
            });
        }

        if patch.x.is_some() || patch.y.is_some() {
            let (x, y) = self.position();
            self.set_position(patch.x.unwrap_or(x), patch.y.unwrap_or(y));
        }

        match &mut self.kind {
            ElementKind::Text(t) => {
                if let Some(content) = &patch.content {
                    t.content.clone_from(content);
                }
                if let Some(family) = &patch.font_family {
                    t.font.family.clone_from(family);
                }
                if let Some(size) = patch.font_size {
                    t.font.size_px = size;
                }
                if let Some(bold) = patch.bold {
                    t.font.bold = bold;
                }
                if let Some(italic) = patch.italic {
                    t.font.italic = italic;
                }
                if let Some(underline) = patch.underline {
                    t.underline = underline;
                }
                if let Some(color) = patch.color {
                    t.color = color;
                }
                if let Some(align) = patch.align {
                    t.align = align;
                }
            }
            ElementKind::Shape(s) => {
                match &mut s.geometry {
                    ShapeGeometry::Circle { radius } => {
                        if let Some(r) = patch.radius {
                            *radius = r;
                        }
                    }
                    ShapeGeometry::Rectangle { width, height } => {
                        if let Some(w) = patch.width {
                            *width = w;
                        }
                        if let Some(h) = patch.height {
                            *height = h;
                        }
                    }
                }
                if let Some(fill) = patch.fill {
                    s.fill = fill;
                }
                if let Some(stroke) = patch.stroke {
                    s.stroke = stroke;
                }
                if let Some(width) = patch.stroke_width {
                    s.stroke_width = width;
                }
            }
            ElementKind::Image(i) => {
                if let Some(w) = patch.width {
                    i.width = w;
                }
                if let Some(h) = patch.height {
                    i.height = h;
                }
            }
        }
        Ok(())
    }
}

// ─── Patches ─────────────────────────────────────────────────────────────

/// A partial update for one element. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,

    // Text
    pub content: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub color: Option<Color>,
    pub align: Option<Option<TextAlign>>,

    // Geometry
    pub radius: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,

    // Shape paint
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
}

impl ElementPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Name of the first set field that does not apply to `element`.
    fn first_foreign_field(&self, element: &Element) -> Option<&'static str> {
        let text_fields = [
            ("content", self.content.is_some()),
            ("fontFamily", self.font_family.is_some()),
            ("fontSize", self.font_size.is_some()),
            ("bold", self.bold.is_some()),
            ("italic", self.italic.is_some()),
            ("underline", self.underline.is_some()),
            ("color", self.color.is_some()),
            ("textAlign", self.align.is_some()),
        ];
        let paint_fields = [
            ("fillColor", self.fill.is_some()),
            ("strokeColor", self.stroke.is_some()),
            ("strokeWidth", self.stroke_width.is_some()),
        ];
        let radius = [("radius", self.radius.is_some())];
        let size = [
            ("width", self.width.is_some()),
            ("height", self.height.is_some()),
        ];

        let foreign: SmallVec<[&[(&'static str, bool)]; 4]> = match &element.kind {
            ElementKind::Text(_) => {
                [&paint_fields[..], &radius[..], &size[..]].into_iter().collect()
            }
            ElementKind::Shape(s) => match s.geometry {
                ShapeGeometry::Circle { .. } => [&text_fields[..], &size[..]].into_iter().collect(),
                ShapeGeometry::Rectangle { .. } => {
                    [&text_fields[..], &radius[..]].into_iter().collect()
                }
            },
            ElementKind::Image(_) => [&text_fields[..], &paint_fields[..], &radius[..]]
                .into_iter()
                .collect(),
        };

        foreign
            .iter()
            .flat_map(|group| group.iter())
            .find(|(_, set)| *set)
            .map(|(name, _)| *name)
    }
}
