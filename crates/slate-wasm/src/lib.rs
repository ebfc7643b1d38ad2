//! WASM bridge for Slate: exposes the editor engine to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the DOM
//! (side panels, file pickers, downloads); everything that touches the
//! document goes through `SlateCanvas`.

mod canvas2d;
mod props;

use canvas2d::{CanvasMeasure, CanvasSurface};
use slate_core::{DocumentPreset, EditorConfig, Template, decode_image, decode_source};
use slate_editor::{Editor, EditorResponse, Modifiers, Notice, ToolKind, Viewport};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
///
/// One instance per editor on the page; instances never share state.
#[wasm_bindgen]
pub struct SlateCanvas {
    editor: Editor,
    viewport: Viewport,
}

#[wasm_bindgen]
impl SlateCanvas {
    /// Create an editor for a document preset (`"businessCard"`, `"logo"`,
    /// `"mockup"`). Unknown names fall back to a business card.
    #[wasm_bindgen(constructor)]
    pub fn new(preset: &str) -> Self {
        console_error_panic_hook_setup();
        let preset = parse_preset(preset).unwrap_or(DocumentPreset::BusinessCard);
        Self {
            editor: Editor::for_preset(preset),
            viewport: Viewport::default(),
        }
    }

    /// Create an editor from a JSON `EditorConfig`. Returns an error for
    /// malformed config.
    pub fn with_config(config_json: &str) -> Result<SlateCanvas, JsValue> {
        console_error_panic_hook_setup();
        let config = EditorConfig::from_json(config_json).map_err(to_js)?;
        Ok(Self {
            editor: Editor::new(config),
            viewport: Viewport::default(),
        })
    }

    /// Use the canvas' font engine for text measurement from now on.
    pub fn attach(&mut self, ctx: &CanvasRenderingContext2d) {
        self.editor
            .set_measure(Box::new(CanvasMeasure::new(ctx.clone())));
    }

    /// Render the document at the current zoom.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let mut surface = CanvasSurface::new(ctx);
        self.editor.render(&mut surface, self.viewport.zoom);
    }

    pub fn document_width(&self) -> f64 {
        self.editor.config().document.width
    }

    pub fn document_height(&self) -> f64 {
        self.editor.config().document.height
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Pointer positions are canvas-relative screen pixels.
    /// Returns true if the canvas needs a re-render.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        let p = self.viewport.to_document(x, y);
        self.editor.pointer_down(p.x, p.y).needs_render
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        let p = self.viewport.to_document(x, y);
        self.editor.pointer_move(p.x, p.y).needs_render
    }

    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> bool {
        let p = self.viewport.to_document(x, y);
        self.editor.pointer_up(p.x, p.y).needs_render
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"changed":bool,"render":bool,"tool":"<tool_name>"}`
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let modifiers = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        let response = self.editor.key_down(key, modifiers);
        response_json(response, self.editor.tool())
    }

    // ─── Tools and selection ─────────────────────────────────────────────

    /// Switch tools by name (`"select"`, `"text"`, `"rect"`, `"circle"`).
    /// Returns false for unknown names.
    pub fn set_tool(&mut self, name: &str) -> bool {
        match ToolKind::from_name(name) {
            Some(tool) => {
                self.editor.set_tool(tool);
                true
            }
            None => false,
        }
    }

    pub fn tool_name(&self) -> String {
        self.editor.tool().name().to_string()
    }

    /// True while a creation tool is active (crosshair cursor).
    pub fn tool_creates_elements(&self) -> bool {
        self.editor.tool().creates_elements()
    }

    /// Index of the selected element, or -1.
    pub fn selected_index(&self) -> i32 {
        self.editor
            .selected_index()
            .and_then(|idx| i32::try_from(idx).ok())
            .unwrap_or(-1)
    }

    /// Screen-space bounds of the selected element as
    /// `{"x":..,"y":..,"width":..,"height":..}`, or `null`.
    pub fn selection_bounds(&self) -> String {
        match self.editor.selection_bounds() {
            Some(rect) => {
                let origin = self.viewport.to_screen(rect.origin());
                let zoom = self.viewport.zoom;
                serde_json::json!({
                    "x": origin.x,
                    "y": origin.y,
                    "width": rect.width() * zoom,
                    "height": rect.height() * zoom,
                })
                .to_string()
            }
            None => "null".to_string(),
        }
    }

    /// Indices of the elements touching a screen-space marquee, as a JSON
    /// array in paint order.
    pub fn elements_in(&self, x: f64, y: f64, width: f64, height: f64) -> String {
        let from = self.viewport.to_document(x, y);
        let to = self.viewport.to_document(x + width, y + height);
        let indices = self.editor.elements_in(kurbo::Rect::from_points(from, to));
        serde_json::Value::from(indices).to_string()
    }

    /// Properties of the selected element in the saved-document shape,
    /// or `{}` with nothing selected.
    pub fn selected_props(&self) -> String {
        props::selected_props(&self.editor)
    }

    /// Live-edit one property of the selected element (`"fontSize"`,
    /// `"fillColor"`, ...). Nothing is committed until `finish_edit`.
    /// Returns true if the element changed.
    pub fn set_prop(&mut self, key: &str, value: &str) -> bool {
        let result = props::patch_for(key, value)
            .and_then(|patch| self.editor.edit_selected(&patch).map_err(|err| err.to_string()));
        match result {
            Ok(response) => response.changed,
            Err(err) => {
                log::warn!("set_prop {key}: {err}");
                self.editor.notify(Notice::error(format!("Invalid {key}: {err}")));
                false
            }
        }
    }

    /// Live-edit the background color. Returns false for an invalid color.
    pub fn set_background_color(&mut self, css: &str) -> bool {
        match slate_core::Color::parse(css) {
            Ok(color) => self.editor.set_background_color(color).changed,
            Err(err) => {
                self.editor.notify(Notice::error(err.to_string()));
                false
            }
        }
    }

    /// Commit pending live edits (form control blur / change).
    pub fn finish_edit(&mut self) -> bool {
        self.editor.finish_edit().changed
    }

    // ─── History and z-order ─────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        self.editor.undo().changed
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo().changed
    }

    pub fn can_undo(&self) -> bool {
        self.editor.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.editor.can_redo()
    }

    pub fn delete_selected(&mut self) -> bool {
        self.editor.delete_selected().changed
    }

    pub fn bring_forward(&mut self) -> bool {
        self.editor.bring_forward().changed
    }

    pub fn send_backward(&mut self) -> bool {
        self.editor.send_backward().changed
    }

    pub fn bring_to_front(&mut self) -> bool {
        self.editor.bring_to_front().changed
    }

    pub fn send_to_back(&mut self) -> bool {
        self.editor.send_to_back().changed
    }

    // ─── Images ──────────────────────────────────────────────────────────

    /// Decode encoded image bytes (PNG, JPEG, ...) and place the image at
    /// `(x, y)` in document space. A decode failure becomes a notice.
    pub fn insert_image_bytes(&mut self, x: f64, y: f64, bytes: &[u8]) -> bool {
        match decode_image(bytes) {
            Ok(bitmap) => self.editor.insert_bitmap(x, y, bitmap).changed,
            Err(err) => {
                self.editor
                    .notify(Notice::error(format!("Image failed to load: {err}")));
                false
            }
        }
    }

    /// Set the background image from a data URL.
    pub fn set_background_image(&mut self, data_url: &str) -> bool {
        let ticket = self.editor.set_background_image(data_url.to_string());
        let result = decode_source(data_url);
        self.editor.complete_decode(ticket, result);
        true
    }

    pub fn clear_background_image(&mut self) -> bool {
        self.editor.clear_background_image().changed
    }

    // ─── Document lifecycle ──────────────────────────────────────────────

    pub fn new_document(&mut self, preset: &str) -> bool {
        match parse_preset(preset) {
            Some(preset) => self.editor.new_document(preset).changed,
            None => false,
        }
    }

    /// Load a built-in template by index into `templates()`.
    pub fn load_template(&mut self, index: usize) -> bool {
        match Template::ALL.get(index) {
            Some(template) => self.editor.load_template(*template).changed,
            None => false,
        }
    }

    pub fn save_json(&self) -> Result<String, JsValue> {
        self.editor.save_json().map_err(to_js)
    }

    /// Replace the document. On failure the current document is kept and
    /// a notice is queued; returns false.
    pub fn load_json(&mut self, text: &str) -> bool {
        let Ok(requests) = self.editor.load_json(text) else {
            return false;
        };
        for request in requests {
            let result = decode_source(&request.source);
            self.editor.complete_decode(request.ticket, result);
        }
        true
    }

    /// PNG bytes of the document at `scale` (e.g. 3.0 for print).
    pub fn export_png(&self, scale: f64) -> Result<Vec<u8>, JsValue> {
        self.editor.export_png(scale).map_err(to_js)
    }

    /// Notices queued since the last call, as a JSON array of
    /// `{"level":"error","message":"..."}`.
    pub fn take_notices(&mut self) -> String {
        let notices: Vec<serde_json::Value> = self
            .editor
            .take_notices()
            .into_iter()
            .map(|n| serde_json::json!({ "level": n.level.as_str(), "message": n.message }))
            .collect();
        serde_json::Value::Array(notices).to_string()
    }
}

/// Names of the built-in templates, as a JSON array.
#[wasm_bindgen]
pub fn templates() -> String {
    let names: Vec<&str> = Template::ALL.iter().map(|t| t.name()).collect();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

fn parse_preset(name: &str) -> Option<DocumentPreset> {
    serde_json::from_value(serde_json::Value::String(name.to_string())).ok()
}

fn response_json(response: EditorResponse, tool: ToolKind) -> String {
    serde_json::json!({
        "changed": response.changed,
        "render": response.needs_render,
        "tool": tool.name(),
    })
    .to_string()
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Slate WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
