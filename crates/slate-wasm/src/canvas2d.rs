//! Canvas2D backend.
//!
//! Implements `Surface` over a browser `CanvasRenderingContext2d` and
//! measures text with the context's own font engine.

use kurbo::{Point, Rect};
use slate_core::{Bitmap, Color, FontSpec};
use slate_render::{FixedMetrics, Surface, TextMeasure};
use std::f64::consts::TAU;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, ImageData, OffscreenCanvas, OffscreenCanvasRenderingContext2d,
};

pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn set_dash(&self, dash: &[f64]) {
        let pattern = js_sys::Array::new();
        for d in dash {
            pattern.push(&JsValue::from_f64(*d));
        }
        let _ = self.ctx.set_line_dash(&pattern);
    }
}

impl Surface for CanvasSurface<'_> {
    fn begin(&mut self, width: f64, height: f64, scale: f64) {
        let _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.set_dash(&[]);
        self.ctx.set_text_baseline("top");
        self.ctx.set_text_align("left");
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64, dash: Option<[f64; 2]>) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        if let Some(dash) = dash {
            self.set_dash(&dash);
        }
        self.ctx
            .stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());
        if dash.is_some() {
            self.set_dash(&[]);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.stroke();
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &FontSpec, color: Color) {
        self.ctx.set_font(&font.css());
        self.ctx.set_fill_style_str(&color.to_css());
        let _ = self.ctx.fill_text(text, origin.x, origin.y);
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect) {
        match staging_canvas(bitmap) {
            Ok(staging) => {
                let _ = self.ctx.draw_image_with_offscreen_canvas_and_dw_and_dh(
                    &staging,
                    dest.x0,
                    dest.y0,
                    dest.width(),
                    dest.height(),
                );
            }
            Err(err) => log::warn!("cannot stage {bitmap:?}: {err:?}"),
        }
    }
}

/// Copy `bitmap` into an offscreen canvas so it can be drawn scaled.
fn staging_canvas(bitmap: &Bitmap) -> Result<OffscreenCanvas, JsValue> {
    let canvas = OffscreenCanvas::new(bitmap.width(), bitmap.height())?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<OffscreenCanvasRenderingContext2d>()?;
    let data = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(bitmap.pixels()),
        bitmap.width(),
        bitmap.height(),
    )?;
    ctx.put_image_data(&data, 0.0, 0.0)?;
    Ok(canvas)
}

/// Text metrics from the browser's font engine.
pub struct CanvasMeasure {
    ctx: CanvasRenderingContext2d,
    fallback: FixedMetrics,
}

impl CanvasMeasure {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            fallback: FixedMetrics::default(),
        }
    }
}

impl TextMeasure for CanvasMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> f64 {
        self.ctx.set_font(&font.css());
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(_) => self.fallback.measure(text, font),
        }
    }
}
