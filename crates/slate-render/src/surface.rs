//! The drawing vocabulary shared by every render backend.
//!
//! Coordinates are document-space; `begin` fixes the output scale and
//! backends apply it themselves. Text arrives already aligned: `origin`
//! is the top-left of the line.

use kurbo::{Point, Rect};
use slate_core::{Bitmap, Color, FontSpec};

pub trait Surface {
    /// Start a frame: clear everything and set the document → output scale.
    fn begin(&mut self, width: f64, height: f64, scale: f64);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// `dash` is an `[on, off]` pattern.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64, dash: Option<[f64; 2]>);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64);

    fn line(&mut self, from: Point, to: Point, color: Color, width: f64);

    fn fill_text(&mut self, text: &str, origin: Point, font: &FontSpec, color: Color);

    /// Draw `bitmap` stretched to cover `dest`.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect);
}
