//! CPU raster backend on tiny-skia, and PNG export.
//!
//! Text is greeked: each visible glyph is painted as a solid block sized
//! from the text measurer, so raster output lines up with hit-test
//! bounds without shipping font files. Underlines are real strokes.

use crate::RenderError;
use crate::measure::TextMeasure;
use crate::paint::{RenderOptions, render_scene};
use crate::surface::Surface;
use kurbo::{Point, Rect};
use slate_core::{Bitmap, Color, DocumentSize, FontSpec, Scene};
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, StrokeDash,
    Transform,
};

pub struct RasterSurface<'m> {
    pixmap: Pixmap,
    transform: Transform,
    measure: &'m dyn TextMeasure,
}

impl<'m> RasterSurface<'m> {
    pub fn new(width: u32, height: u32, measure: &'m dyn TextMeasure) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::Allocation { width, height })?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            measure,
        })
    }

    /// A surface sized `document * scale` pixels.
    pub fn for_document(
        size: DocumentSize,
        scale: f64,
        measure: &'m dyn TextMeasure,
    ) -> Result<Self, RenderError> {
        let width = (size.width * scale).round().max(1.0) as u32;
        let height = (size.height * scale).round().max(1.0) as u32;
        Self::new(width, height, measure)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied RGBA8 pixel data.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight RGBA of one output pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))
    }

    fn paint(color: Color) -> Paint<'static> {
        let [r, g, b, a] = color.to_rgba8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }

    fn stroke_path(
        &mut self,
        path: &tiny_skia::Path,
        color: Color,
        width: f64,
        dash: Option<[f64; 2]>,
    ) {
        let mut stroke = Stroke {
            width: width as f32,
            ..Stroke::default()
        };
        if let Some([on, off]) = dash {
            stroke.dash = StrokeDash::new(vec![on as f32, off as f32], 0.0);
        }
        self.pixmap
            .stroke_path(path, &Self::paint(color), &stroke, self.transform, None);
    }
}

fn sk_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    let rect = rect.abs();
    tiny_skia::Rect::from_ltrb(rect.x0 as f32, rect.y0 as f32, rect.x1 as f32, rect.y1 as f32)
}

/// Premultiply straight RGBA pixels into a tiny-skia pixmap.
fn to_pixmap(bitmap: &Bitmap) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(bitmap.width(), bitmap.height())?;
    for (dst, px) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(bitmap.pixels().chunks_exact(4))
    {
        *dst = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
    }
    Some(pixmap)
}

impl Surface for RasterSurface<'_> {
    fn begin(&mut self, _width: f64, _height: f64, scale: f64) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
        self.transform = Transform::from_scale(scale as f32, scale as f32);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(r) = sk_rect(rect) {
            self.pixmap
                .fill_rect(r, &Self::paint(color), self.transform, None);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64, dash: Option<[f64; 2]>) {
        if let Some(r) = sk_rect(rect) {
            let path = PathBuilder::from_rect(r);
            self.stroke_path(&path, color, width, dash);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        if let Some(path) =
            PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        {
            self.pixmap.fill_path(
                &path,
                &Self::paint(color),
                FillRule::Winding,
                self.transform,
                None,
            );
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64) {
        if let Some(path) =
            PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        {
            self.stroke_path(&path, color, width, None);
        }
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, color, width, None);
        }
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &FontSpec, color: Color) {
        let size = font.size_px;
        let mut cursor = origin.x;
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let advance = self.measure.measure(ch.encode_utf8(&mut buf), font);
            if !ch.is_whitespace() {
                let glyph = Rect::from_origin_size(
                    (cursor + advance * 0.1, origin.y + size * 0.2),
                    (advance * 0.8, size * 0.65),
                );
                self.fill_rect(glyph, color);
            }
            cursor += advance;
        }
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect) {
        let Some(src) = to_pixmap(bitmap) else {
            return;
        };
        let sx = dest.width() / bitmap.width() as f64;
        let sy = dest.height() / bitmap.height() as f64;
        let placement =
            Transform::from_row(sx as f32, 0.0, 0.0, sy as f32, dest.x0 as f32, dest.y0 as f32);
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            src.as_ref(),
            &paint,
            self.transform.pre_concat(placement),
            None,
        );
    }
}

/// Rasterize `scene` without selection at `scale` and encode it as PNG.
///
/// Renders into its own offscreen surface of `size * scale` pixels; the
/// caller's on-screen state is never touched.
pub fn export_png(
    scene: &Scene,
    size: DocumentSize,
    scale: f64,
    measure: &dyn TextMeasure,
) -> Result<Vec<u8>, RenderError> {
    let mut surface = RasterSurface::for_document(size, scale, measure)?;
    let options = RenderOptions {
        scale,
        ..RenderOptions::new(size.width, size.height)
    };
    render_scene(&mut surface, scene, &options, measure);
    log::debug!(
        "export: {}x{} px at {scale}x",
        surface.width(),
        surface.height()
    );
    surface.encode_png()
}
