//! Recording surface.
//!
//! A `DisplayList` is a flat, ordered list of the draw calls one render
//! produced. It is comparable, so two renders of the same scene can be
//! checked for equality, and it can be replayed onto any other surface.

use crate::surface::Surface;
use kurbo::{Point, Rect};
use slate_core::{Bitmap, Color, FontSpec};

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Begin {
        width: f64,
        height: f64,
        scale: f64,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f64,
        dash: Option<[f64; 2]>,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Color,
        width: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    Text {
        text: String,
        origin: Point,
        font: FontSpec,
        color: Color,
    },
    Bitmap {
        bitmap: Bitmap,
        dest: Rect,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Re-issue every recorded call on `target`.
    pub fn replay(&self, target: &mut dyn Surface) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Begin {
                    width,
                    height,
                    scale,
                } => target.begin(*width, *height, *scale),
                DrawCommand::FillRect { rect, color } => target.fill_rect(*rect, *color),
                DrawCommand::StrokeRect {
                    rect,
                    color,
                    width,
                    dash,
                } => target.stroke_rect(*rect, *color, *width, *dash),
                DrawCommand::FillCircle {
                    center,
                    radius,
                    color,
                } => target.fill_circle(*center, *radius, *color),
                DrawCommand::StrokeCircle {
                    center,
                    radius,
                    color,
                    width,
                } => target.stroke_circle(*center, *radius, *color, *width),
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width,
                } => target.line(*from, *to, *color, *width),
                DrawCommand::Text {
                    text,
                    origin,
                    font,
                    color,
                } => target.fill_text(text, *origin, font, *color),
                DrawCommand::Bitmap { bitmap, dest } => target.draw_bitmap(bitmap, *dest),
            }
        }
    }
}

impl Surface for DisplayList {
    fn begin(&mut self, width: f64, height: f64, scale: f64) {
        self.commands.clear();
        self.commands.push(DrawCommand::Begin {
            width,
            height,
            scale,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64, dash: Option<[f64; 2]>) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            width,
            dash,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &FontSpec, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            font: font.clone(),
            color,
        });
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect) {
        self.commands.push(DrawCommand::Bitmap {
            bitmap: bitmap.clone(),
            dest,
        });
    }
}
