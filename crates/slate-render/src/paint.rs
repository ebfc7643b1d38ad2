//! Scene → surface draw calls.
//!
//! Paints the background, then every element in z-order, then the
//! selection overlay. The scene is only read; rendering the same scene
//! with the same options twice issues identical draw calls.

use crate::hit::{align_left, bounding_box};
use crate::measure::TextMeasure;
use crate::surface::Surface;
use kurbo::{Point, Rect};
use slate_core::model::*;
use slate_core::{Color, Scene};

/// Gap between an element's bounds and its selection outline.
pub const SELECTION_PADDING: f64 = 5.0;

const SELECTION_COLOR: Color = Color::rgba(0.290, 0.565, 0.886, 1.0);
const SELECTION_DASH: [f64; 2] = [5.0, 5.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Nominal document width (e.g. 350 for a business card).
    pub width: f64,
    pub height: f64,
    pub selected: Option<usize>,
    /// 1.0 for the on-screen preview, higher for export.
    pub scale: f64,
}

impl RenderOptions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            selected: None,
            scale: 1.0,
        }
    }
}

/// Paint `scene` onto `surface`.
pub fn render_scene(
    surface: &mut dyn Surface,
    scene: &Scene,
    options: &RenderOptions,
    measure: &dyn TextMeasure,
) {
    surface.begin(options.width, options.height, options.scale);
    paint_background(surface, scene, options);

    for element in scene.elements() {
        paint_element(surface, element, measure);
    }

    if let Some(element) = options.selected.and_then(|idx| scene.element(idx)) {
        let outline = bounding_box(element, measure).inflate(SELECTION_PADDING, SELECTION_PADDING);
        surface.stroke_rect(outline, SELECTION_COLOR, 1.0, Some(SELECTION_DASH));
    }
}

fn paint_background(surface: &mut dyn Surface, scene: &Scene, options: &RenderOptions) {
    let page = Rect::new(0.0, 0.0, options.width, options.height);
    match scene
        .background
        .image
        .as_ref()
        .and_then(|img| img.bitmap.bitmap())
    {
        // A decoded background image covers the page; the solid fill is skipped.
        Some(bitmap) => surface.draw_bitmap(bitmap, page),
        None => surface.fill_rect(page, scene.background.color),
    }
}

fn paint_element(surface: &mut dyn Surface, element: &Element, measure: &dyn TextMeasure) {
    match &element.kind {
        ElementKind::Text(t) => paint_text(surface, t, measure),
        ElementKind::Shape(s) => paint_shape(surface, s),
        ElementKind::Image(img) => match img.bitmap.bitmap() {
            Some(bitmap) => {
                let dest = Rect::from_origin_size((img.x, img.y), (img.width, img.height));
                surface.draw_bitmap(bitmap, dest);
            }
            None => log::trace!("IMAGE {} not decoded, skipped", element.id),
        },
    }
}

// ─── Element painters ────────────────────────────────────────────────────────

fn paint_text(surface: &mut dyn Surface, t: &TextElement, measure: &dyn TextMeasure) {
    log::trace!("TEXT {:?} at ({}, {})", t.content, t.x, t.y);
    let line_height = t.font.line_height();
    let underline_width = (t.font.size_px / 15.0).max(1.0);

    for (i, line) in t.lines().iter().enumerate() {
        let top = t.y + i as f64 * line_height;
        let width = measure.measure(line, &t.font);
        let left = align_left(t.x, width, t.align);
        surface.fill_text(line, Point::new(left, top), &t.font, t.color);

        if t.underline && width > 0.0 {
            let y = top + t.font.size_px;
            surface.line(
                Point::new(left, y),
                Point::new(left + width, y),
                t.color,
                underline_width,
            );
        }
    }
}

fn paint_shape(surface: &mut dyn Surface, s: &ShapeElement) {
    let stroked = s.stroke_width > 0.0;
    match s.geometry {
        ShapeGeometry::Circle { radius } => {
            let center = Point::new(s.x, s.y);
            surface.fill_circle(center, radius, s.fill);
            if stroked {
                surface.stroke_circle(center, radius, s.stroke, s.stroke_width);
            }
        }
        ShapeGeometry::Rectangle { width, height } => {
            let rect = Rect::from_origin_size((s.x, s.y), (width, height));
            surface.fill_rect(rect, s.fill);
            if stroked {
                surface.stroke_rect(rect, s.stroke, s.stroke_width, None);
            }
        }
    }
}
