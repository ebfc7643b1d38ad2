//! Input abstraction layer.
//!
//! Normalizes host pointer and keyboard events into an `InputEvent` in
//! document space. The host reports positions relative to the canvas
//! element; `Viewport` undoes the on-screen zoom.

use kurbo::Point;

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// ⌘ on macOS.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Ctrl on Windows/Linux, ⌘ on macOS.
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`).
    Key { key: String, modifiers: Modifiers },
}

impl InputEvent {
    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { x, y }
            | Self::PointerMove { x, y }
            | Self::PointerUp { x, y } => Some(Point::new(*x, *y)),
            Self::Key { .. } => None,
        }
    }
}

/// On-screen presentation of the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Screen pixels per document pixel. Default: **1.0**.
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl Viewport {
    pub const MIN_ZOOM: f64 = 0.1;
    pub const MAX_ZOOM: f64 = 8.0;

    pub fn new(zoom: f64) -> Self {
        let mut viewport = Self::default();
        viewport.set_zoom(zoom);
        viewport
    }

    /// Set the zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
        }
    }

    /// Canvas-relative screen position → document coordinates.
    pub fn to_document(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(screen_x / self.zoom, screen_y / self.zoom)
    }

    /// Document coordinates → canvas-relative screen position.
    pub fn to_screen(&self, point: Point) -> Point {
        Point::new(point.x * self.zoom, point.y * self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_document_divides_by_zoom() {
        let viewport = Viewport::new(2.0);
        assert_eq!(viewport.to_document(100.0, 50.0), Point::new(50.0, 25.0));
        assert_eq!(viewport.to_screen(Point::new(50.0, 25.0)), Point::new(100.0, 50.0));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(100.0);
        assert_eq!(viewport.zoom, Viewport::MAX_ZOOM);
        viewport.set_zoom(f64::NAN);
        assert_eq!(viewport.zoom, Viewport::MAX_ZOOM);
        viewport.set_zoom(0.0);
        assert_eq!(viewport.zoom, Viewport::MIN_ZOOM);
    }

    #[test]
    fn key_events_have_no_position() {
        let event = InputEvent::Key {
            key: "z".into(),
            modifiers: Modifiers::NONE,
        };
        assert_eq!(event.position(), None);
        assert_eq!(
            InputEvent::PointerUp { x: 1.0, y: 2.0 }.position(),
            Some(Point::new(1.0, 2.0))
        );
    }
}
