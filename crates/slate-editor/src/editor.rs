//! The interaction controller.
//!
//! An `Editor` owns one scene, its undo journal and the transient state
//! of the current gesture. Input arrives in document coordinates; every
//! handler runs to completion and reports whether the host should
//! re-render.
//!
//! History is committed once per user action: a drag commits on pointer
//! up, a run of live style edits commits on `finish_edit`, discrete
//! actions (create, delete, reorder) commit immediately.

use crate::decode::{DecodeRequest, DecodeTicket};
use crate::input::{InputEvent, Modifiers};
use crate::notice::Notice;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::tools::ToolKind;
use kurbo::{Point, Vec2};
use slate_core::{
    Bitmap, BitmapSlot, Color, DocumentPreset, EditorConfig, Element, ElementId, ElementPatch,
    ImageElement, Journal, Scene, SceneError, Template, ZDirection,
};
use slate_render::{
    FixedMetrics, RenderError, RenderOptions, Surface, TextMeasure, bounding_box, hit_test,
    hit_test_rect, render_scene,
};

/// What a handler did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorResponse {
    /// The scene content changed.
    pub changed: bool,
    /// The canvas is out of date (content or selection changed).
    pub needs_render: bool,
}

impl EditorResponse {
    pub const NONE: EditorResponse = EditorResponse {
        changed: false,
        needs_render: false,
    };
    pub const RENDER: EditorResponse = EditorResponse {
        changed: false,
        needs_render: true,
    };
    pub const CHANGED: EditorResponse = EditorResponse {
        changed: true,
        needs_render: true,
    };

    fn render_if(flag: bool) -> Self {
        if flag { Self::RENDER } else { Self::NONE }
    }

    fn changed_if(flag: bool) -> Self {
        if flag { Self::CHANGED } else { Self::NONE }
    }
}

/// An in-progress select-tool drag.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    id: ElementId,
    /// Pointer position minus element origin at pointer down.
    offset: Vec2,
    /// Element origin at pointer down.
    start: Point,
}

pub struct Editor {
    scene: Scene,
    journal: Journal,
    selection: Option<ElementId>,
    tool: ToolKind,
    drag: Option<DragSession>,
    /// Live edits applied since the last commit.
    pending_edit: bool,
    config: EditorConfig,
    measure: Box<dyn TextMeasure>,
    notices: Vec<Notice>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// An editor with an empty document and deterministic text metrics.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_measure(config, Box::new(FixedMetrics::default()))
    }

    pub fn with_measure(config: EditorConfig, measure: Box<dyn TextMeasure>) -> Self {
        let scene = Scene::new();
        let journal = Journal::with_initial(&scene, config.history_cap);
        Self {
            scene,
            journal,
            selection: None,
            tool: ToolKind::Select,
            drag: None,
            pending_edit: false,
            config,
            measure,
            notices: Vec::new(),
        }
    }

    pub fn for_preset(preset: DocumentPreset) -> Self {
        Self::new(EditorConfig::for_preset(preset))
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn measure(&self) -> &dyn TextMeasure {
        self.measure.as_ref()
    }

    /// Index of the selected element, if it is still in the scene.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.and_then(|id| self.scene.find_by_id(id))
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected_index().and_then(|idx| self.scene.element(idx))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn has_pending_edit(&self) -> bool {
        self.pending_edit
    }

    pub fn can_undo(&self) -> bool {
        self.pending_edit || self.journal.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.pending_edit && self.journal.can_redo()
    }

    /// Swap the text metrics, e.g. once a browser canvas is attached.
    /// Bounding boxes follow the new metrics from the next hit test on.
    pub fn set_measure(&mut self, measure: Box<dyn TextMeasure>) {
        self.measure = measure;
    }

    /// Queue a notification raised by the host.
    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Drain queued user notifications.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Options for an on-screen render at `scale`, including the selection outline.
    pub fn render_options(&self, scale: f64) -> RenderOptions {
        RenderOptions {
            selected: self.selected_index(),
            scale,
            ..RenderOptions::new(self.config.document.width, self.config.document.height)
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, scale: f64) {
        render_scene(
            surface,
            &self.scene,
            &self.render_options(scale),
            self.measure.as_ref(),
        );
    }

    /// PNG of the document at `scale`. The selection outline is never exported.
    pub fn export_png(&self, scale: f64) -> Result<Vec<u8>, RenderError> {
        slate_render::export_png(
            &self.scene,
            self.config.document,
            scale,
            self.measure.as_ref(),
        )
    }

    /// PNG at the configured export scale.
    pub fn export_png_default(&self) -> Result<Vec<u8>, RenderError> {
        self.export_png(self.config.export_scale)
    }

    // ─── Input dispatch ──────────────────────────────────────────────────

    pub fn handle(&mut self, event: &InputEvent) -> EditorResponse {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(*x, *y),
            InputEvent::PointerMove { x, y } => self.pointer_move(*x, *y),
            InputEvent::PointerUp { x, y } => self.pointer_up(*x, *y),
            InputEvent::Key { key, modifiers } => self.key_down(key, *modifiers),
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> EditorResponse {
        let point = Point::new(x, y);

        if let Some(element) = self.tool.create(&self.config, x, y) {
            self.flush_edit();
            let id = element.id;
            self.scene.add_element(element);
            self.selection = Some(id);
            self.commit("create");
            log::debug!("{} tool placed {id} at ({x}, {y})", self.tool.name());
            self.set_tool(ToolKind::Select);
            return EditorResponse::CHANGED;
        }

        let hit = hit_test(self.scene.elements(), point, self.measure.as_ref());
        let Some(index) = hit else {
            return EditorResponse::render_if(self.select(None));
        };
        let Some(element) = self.scene.element(index) else {
            return EditorResponse::NONE;
        };
        let id = element.id;
        let (ex, ey) = element.position();
        let origin = Point::new(ex, ey);

        let selection_changed = self.select(Some(id));
        self.drag = Some(DragSession {
            id,
            offset: point - origin,
            start: origin,
        });
        EditorResponse::render_if(selection_changed)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> EditorResponse {
        let Some(drag) = self.drag else {
            return EditorResponse::NONE;
        };
        let Some(index) = self.scene.find_by_id(drag.id) else {
            self.drag = None;
            return EditorResponse::NONE;
        };

        let target = self.clamp_origin(Point::new(x, y) - drag.offset);
        match self.scene.set_position(index, target.x, target.y) {
            Ok(()) => EditorResponse::RENDER,
            Err(err) => {
                log::warn!("drag lost its element: {err}");
                self.drag = None;
                EditorResponse::NONE
            }
        }
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> EditorResponse {
        let response = self.pointer_move(x, y);
        let Some(drag) = self.drag.take() else {
            return response;
        };

        let moved = self
            .scene
            .find_by_id(drag.id)
            .and_then(|idx| self.scene.element(idx))
            .is_some_and(|element| {
                let (ex, ey) = element.position();
                Point::new(ex, ey) != drag.start
            });
        if moved {
            self.commit("drag");
        }
        EditorResponse {
            changed: moved,
            needs_render: response.needs_render || moved,
        }
    }

    pub fn key_down(&mut self, key: &str, modifiers: Modifiers) -> EditorResponse {
        let Some(action) = ShortcutMap::resolve(key, modifiers) else {
            return EditorResponse::NONE;
        };
        log::trace!("shortcut {key:?} → {action:?}");
        self.perform(action)
    }

    pub fn perform(&mut self, action: ShortcutAction) -> EditorResponse {
        match action {
            ShortcutAction::ToolSelect => self.set_tool(ToolKind::Select),
            ShortcutAction::ToolText => self.set_tool(ToolKind::Text),
            ShortcutAction::ToolRectangle => self.set_tool(ToolKind::Rectangle),
            ShortcutAction::ToolCircle => self.set_tool(ToolKind::Circle),
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
            ShortcutAction::Delete => self.delete_selected(),
            ShortcutAction::SendBackward => self.send_backward(),
            ShortcutAction::BringForward => self.bring_forward(),
            ShortcutAction::SendToBack => self.send_to_back(),
            ShortcutAction::BringToFront => self.bring_to_front(),
            ShortcutAction::Deselect => EditorResponse::render_if(self.select(None)),
        }
    }

    // ─── Selection and tools ─────────────────────────────────────────────

    pub fn set_tool(&mut self, tool: ToolKind) -> EditorResponse {
        if tool == self.tool {
            return EditorResponse::NONE;
        }
        self.flush_edit();
        self.drag = None;
        log::debug!("tool {} → {}", self.tool.name(), tool.name());
        self.tool = tool;
        EditorResponse::NONE
    }

    /// Select the element at `index` (or clear the selection with `None`).
    pub fn select_index(&mut self, index: Option<usize>) -> Result<EditorResponse, SceneError> {
        let id = match index {
            Some(idx) => Some(
                self.scene
                    .element(idx)
                    .map(|element| element.id)
                    .ok_or(SceneError::IndexOutOfRange {
                        index: idx,
                        len: self.scene.len(),
                    })?,
            ),
            None => None,
        };
        Ok(EditorResponse::render_if(self.select(id)))
    }

    /// Returns whether the selection changed.
    fn select(&mut self, id: Option<ElementId>) -> bool {
        if self.selection == id {
            return false;
        }
        self.flush_edit();
        self.selection = id;
        true
    }

    // ─── Discrete edits ──────────────────────────────────────────────────

    pub fn delete_selected(&mut self) -> EditorResponse {
        let Some(index) = self.selected_index() else {
            return EditorResponse::NONE;
        };
        self.flush_edit();
        match self.scene.remove_element(index) {
            Ok(removed) => {
                log::debug!("deleted {} {}", removed.kind_name(), removed.id);
                self.selection = None;
                self.drag = None;
                self.commit("delete");
                EditorResponse::CHANGED
            }
            Err(err) => {
                log::warn!("delete failed: {err}");
                EditorResponse::NONE
            }
        }
    }

    pub fn bring_forward(&mut self) -> EditorResponse {
        self.reorder_selected(|scene, idx| scene.reorder(idx, ZDirection::Forward))
    }

    pub fn send_backward(&mut self) -> EditorResponse {
        self.reorder_selected(|scene, idx| scene.reorder(idx, ZDirection::Backward))
    }

    pub fn bring_to_front(&mut self) -> EditorResponse {
        self.reorder_selected(|scene, idx| scene.move_to_front(idx).map(|to| to != idx))
    }

    pub fn send_to_back(&mut self) -> EditorResponse {
        self.reorder_selected(|scene, idx| scene.move_to_back(idx).map(|to| to != idx))
    }

    fn reorder_selected(
        &mut self,
        op: impl FnOnce(&mut Scene, usize) -> Result<bool, SceneError>,
    ) -> EditorResponse {
        let Some(index) = self.selected_index() else {
            return EditorResponse::NONE;
        };
        self.flush_edit();
        match op(&mut self.scene, index) {
            Ok(true) => {
                self.commit("reorder");
                EditorResponse::CHANGED
            }
            Ok(false) => EditorResponse::NONE,
            Err(err) => {
                log::warn!("reorder failed: {err}");
                EditorResponse::NONE
            }
        }
    }

    // ─── Live edits ──────────────────────────────────────────────────────

    /// Apply `patch` to the selected element without committing.
    ///
    /// Call `finish_edit` when the edit completes (blur / change). A patch
    /// that names a field the element does not have is rejected whole.
    pub fn edit_selected(&mut self, patch: &ElementPatch) -> Result<EditorResponse, SceneError> {
        let Some(index) = self.selected_index() else {
            return Ok(EditorResponse::NONE);
        };
        if patch.is_empty() {
            return Ok(EditorResponse::NONE);
        }
        self.scene.update_element(index, patch)?;
        self.pending_edit = true;
        Ok(EditorResponse::CHANGED)
    }

    /// Live background color change; committed by `finish_edit` like any
    /// other style edit.
    pub fn set_background_color(&mut self, color: Color) -> EditorResponse {
        if self.scene.background.color == color {
            return EditorResponse::NONE;
        }
        self.scene.set_background_color(color);
        self.pending_edit = true;
        EditorResponse::CHANGED
    }

    /// Commit the live edits made since the last commit, if any.
    pub fn finish_edit(&mut self) -> EditorResponse {
        EditorResponse::changed_if(self.flush_edit())
    }

    fn flush_edit(&mut self) -> bool {
        if !self.pending_edit {
            return false;
        }
        self.pending_edit = false;
        let unchanged = self
            .journal
            .current()
            .is_some_and(|current| current.same_content(&self.scene));
        if unchanged {
            return false;
        }
        self.commit("edit");
        true
    }

    // ─── History ─────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> EditorResponse {
        self.flush_edit();
        self.drag = None;
        match self.journal.undo() {
            Some(scene) => {
                self.restore(scene);
                log::debug!("undo → entry {}", self.journal.cursor());
                EditorResponse::CHANGED
            }
            None => EditorResponse::NONE,
        }
    }

    pub fn redo(&mut self) -> EditorResponse {
        self.flush_edit();
        self.drag = None;
        match self.journal.redo() {
            Some(scene) => {
                self.restore(scene);
                log::debug!("redo → entry {}", self.journal.cursor());
                EditorResponse::CHANGED
            }
            None => EditorResponse::NONE,
        }
    }

    fn restore(&mut self, scene: Scene) {
        self.scene = scene;
        if self.selected_index().is_none() {
            self.selection = None;
        }
    }

    fn commit(&mut self, what: &str) {
        log::debug!("commit: {what}");
        self.pending_edit = false;
        self.journal.commit(&self.scene);
    }

    // ─── Images ──────────────────────────────────────────────────────────

    /// Place an image element whose pixels are still being decoded.
    ///
    /// The element paints nothing until `complete_decode` is called with
    /// the returned ticket.
    pub fn insert_image(&mut self, x: f64, y: f64, width: f64, height: f64) -> DecodeTicket {
        self.flush_edit();
        let mut image = ImageElement::new(x, y, width, height);
        image.bitmap = BitmapSlot::Pending;
        let element = Element::image(image);
        let ticket = DecodeTicket::for_element(&self.scene, element.id);
        self.selection = Some(element.id);
        self.scene.add_element(element);
        self.commit("insert image");
        ticket
    }

    /// Insert an already-decoded image at its natural size, scaled down to
    /// fit the document if needed.
    pub fn insert_bitmap(&mut self, x: f64, y: f64, bitmap: Bitmap) -> EditorResponse {
        let doc = self.config.document;
        let (w, h) = (f64::from(bitmap.width()), f64::from(bitmap.height()));
        let fit = (doc.width / w).min(doc.height / h).min(1.0);
        let ticket = self.insert_image(x, y, w * fit, h * fit);
        self.complete_decode(ticket, Ok(bitmap));
        EditorResponse::CHANGED
    }

    /// Set a background image from a data URL. Pixels arrive through the
    /// returned ticket.
    pub fn set_background_image(&mut self, source: String) -> DecodeTicket {
        self.flush_edit();
        let ticket = DecodeTicket::for_background(&self.scene, &source);
        self.scene.set_background_image(source, BitmapSlot::Pending);
        self.commit("background image");
        ticket
    }

    pub fn clear_background_image(&mut self) -> EditorResponse {
        if self.scene.background.image.is_none() {
            return EditorResponse::NONE;
        }
        self.flush_edit();
        self.scene.clear_background_image();
        self.commit("clear background image");
        EditorResponse::CHANGED
    }

    /// Deliver a decode result.
    ///
    /// Tickets from a replaced document are ignored. Otherwise the result is
    /// stored in every history entry holding the target, even when the live
    /// scene no longer does (deleted image, undone background), so a later
    /// undo or redo brings it back decoded. A failed decode leaves the
    /// element unpainted and queues a warning if the target is on screen.
    pub fn complete_decode(
        &mut self,
        ticket: DecodeTicket,
        result: Result<Bitmap, SceneError>,
    ) -> EditorResponse {
        if ticket.generation != self.scene.generation() {
            log::warn!("ignoring stale decode for {:?}", ticket.target);
            return EditorResponse::NONE;
        }
        let (slot, failure) = match result {
            Ok(bitmap) => (BitmapSlot::Ready(bitmap), None),
            Err(err) => (BitmapSlot::Failed, Some(err)),
        };

        let live = ticket.apply(&mut self.scene, &slot);
        self.journal.patch_entries(|scene| {
            ticket.apply(scene, &slot);
        });
        if !live {
            log::debug!("decode for {:?} stored in history only", ticket.target);
            return EditorResponse::NONE;
        }
        if let Some(err) = failure {
            self.notices.push(Notice::warning(format!("Image failed to load: {err}")));
        }
        EditorResponse::RENDER
    }

    /// Decode requests for every background image still waiting for pixels.
    pub fn pending_decodes(&self) -> Vec<DecodeRequest> {
        match &self.scene.background.image {
            Some(image) if matches!(image.bitmap, BitmapSlot::Pending) => vec![DecodeRequest {
                ticket: DecodeTicket::for_background(&self.scene, &image.source),
                source: image.source.clone(),
            }],
            _ => Vec::new(),
        }
    }

    // ─── Document lifecycle ──────────────────────────────────────────────

    pub fn new_document(&mut self, preset: DocumentPreset) -> EditorResponse {
        self.config.document = preset.size();
        self.replace_scene(Scene::new());
        EditorResponse::CHANGED
    }

    pub fn load_template(&mut self, template: Template) -> EditorResponse {
        self.config.document = template.preset().size();
        self.replace_scene(template.build());
        log::debug!("loaded template {}", template.name());
        EditorResponse::CHANGED
    }

    pub fn save_json(&self) -> Result<String, SceneError> {
        slate_core::save_json(&self.scene)
    }

    /// Replace the document with a saved one.
    ///
    /// All or nothing: on error the current scene and history are untouched
    /// and an error notice is queued. On success, returns the decodes the
    /// host must run for the loaded background image.
    pub fn load_json(&mut self, text: &str) -> Result<Vec<DecodeRequest>, SceneError> {
        match slate_core::load_json(text) {
            Ok(scene) => {
                self.replace_scene(scene);
                log::debug!("loaded document with {} elements", self.scene.len());
                Ok(self.pending_decodes())
            }
            Err(err) => {
                log::warn!("load failed: {err}");
                self.notices.push(Notice::error(format!("Could not load document: {err}")));
                Err(err)
            }
        }
    }

    fn replace_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.journal.reset(&self.scene);
        self.selection = None;
        self.drag = None;
        self.pending_edit = false;
    }

    // ─── Geometry ────────────────────────────────────────────────────────

    /// Keep a dragged origin within `[0, document - min_visible_margin]`.
    fn clamp_origin(&self, origin: Point) -> Point {
        let doc = self.config.document;
        let margin = self.config.min_visible_margin;
        let max_x = (doc.width - margin).max(0.0);
        let max_y = (doc.height - margin).max(0.0);
        Point::new(origin.x.clamp(0.0, max_x), origin.y.clamp(0.0, max_y))
    }

    /// Indices of the elements touching `rect`, in paint order.
    pub fn elements_in(&self, rect: kurbo::Rect) -> Vec<usize> {
        hit_test_rect(self.scene.elements(), rect, self.measure.as_ref())
    }

    /// Bounds of the selected element, for host-side overlays.
    pub fn selection_bounds(&self) -> Option<kurbo::Rect> {
        self.selected_element()
            .map(|element| bounding_box(element, self.measure.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::{ShapeElement, TextElement};

    fn editor_with(elements: impl IntoIterator<Item = Element>) -> Editor {
        let mut editor = Editor::default();
        let mut scene = Scene::new();
        for element in elements {
            scene.add_element(element);
        }
        editor.replace_scene(scene);
        editor
    }

    #[test]
    fn click_on_empty_space_clears_selection() {
        let mut editor = editor_with([Element::shape(ShapeElement::rectangle(
            10.0, 10.0, 20.0, 20.0,
        ))]);
        assert!(editor.pointer_down(15.0, 15.0).needs_render);
        editor.pointer_up(15.0, 15.0);
        assert_eq!(editor.selected_index(), Some(0));

        assert!(editor.pointer_down(200.0, 150.0).needs_render);
        assert_eq!(editor.selected_index(), None);
        assert!(!editor.is_dragging());
    }

    #[test]
    fn creation_tool_commits_and_returns_to_select() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Circle);
        let response = editor.pointer_down(40.0, 50.0);

        assert_eq!(response, EditorResponse::CHANGED);
        assert_eq!(editor.scene().len(), 1);
        assert_eq!(editor.selected_index(), Some(0));
        assert_eq!(editor.tool(), ToolKind::Select);
        assert_eq!(editor.journal().len(), 2);
        assert!(!editor.is_dragging());
    }

    #[test]
    fn click_without_move_does_not_commit() {
        let mut editor = editor_with([Element::text(TextElement::new("Hi", 10.0, 10.0))]);
        editor.pointer_down(12.0, 12.0);
        let response = editor.pointer_up(12.0, 12.0);

        assert!(!response.changed);
        assert_eq!(editor.journal().len(), 1);
    }

    #[test]
    fn drag_clamps_to_visible_margin() {
        let mut editor = editor_with([Element::shape(ShapeElement::rectangle(
            10.0, 10.0, 40.0, 40.0,
        ))]);
        editor.pointer_down(20.0, 20.0);
        editor.pointer_move(1000.0, -500.0);
        let doc = editor.config().document;
        assert_eq!(
            editor.scene().element(0).map(Element::position),
            Some((doc.width - 20.0, 0.0))
        );
        editor.pointer_up(1000.0, -500.0);
        assert_eq!(editor.journal().len(), 2);
    }

    #[test]
    fn pointer_move_without_drag_is_ignored() {
        let mut editor = editor_with([Element::text(TextElement::new("Hi", 10.0, 10.0))]);
        assert_eq!(editor.pointer_move(50.0, 50.0), EditorResponse::NONE);
        assert_eq!(editor.scene().element(0).map(Element::position), Some((10.0, 10.0)));
    }

    #[test]
    fn selection_ops_without_selection_are_noops() {
        let mut editor = editor_with([Element::text(TextElement::new("Hi", 10.0, 10.0))]);
        assert_eq!(editor.delete_selected(), EditorResponse::NONE);
        assert_eq!(editor.bring_forward(), EditorResponse::NONE);
        assert_eq!(
            editor.edit_selected(&ElementPatch::content("x")).unwrap(),
            EditorResponse::NONE
        );
        assert_eq!(editor.scene().len(), 1);
        assert_eq!(editor.journal().len(), 1);
    }

    #[test]
    fn undo_drops_selection_of_vanished_element() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Text);
        editor.pointer_down(10.0, 10.0);
        assert!(editor.selected_index().is_some());

        editor.undo();
        assert!(editor.scene().is_empty());
        assert_eq!(editor.selected_index(), None);
        assert_eq!(editor.render_options(1.0).selected, None);
    }

    #[test]
    fn clamp_tolerates_tiny_documents() {
        let mut config = EditorConfig::default();
        config.document.width = 10.0;
        config.min_visible_margin = 20.0;
        let editor = Editor::new(config);
        assert_eq!(editor.clamp_origin(Point::new(5.0, 5.0)).x, 0.0);
    }
}
