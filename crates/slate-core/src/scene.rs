//! The canonical document state and its pure mutation operations.
//!
//! Elements are held as `Arc<Element>` and mutated copy-on-write, so a
//! snapshot of the scene (for the undo journal) copies pointers, not
//! element data. Nothing here touches a display.

use crate::bitmap::BitmapSlot;
use crate::color::Color;
use crate::error::SceneError;
use crate::id::{ElementId, SceneGeneration};
use crate::model::{Element, ElementPatch};
use std::sync::Arc;

/// Direction for a single z-order step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZDirection {
    /// Toward the topmost (last) position.
    Forward,
    /// Toward the bottommost (first) position.
    Backward,
}

/// Image painted over the whole document in place of the solid fill.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundImage {
    /// Data URL the image was loaded from; persisted with the document.
    pub source: String,
    pub bitmap: BitmapSlot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub color: Color,
    pub image: Option<BackgroundImage>,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            image: None,
        }
    }
}

/// The document being edited: a background plus elements in paint order.
#[derive(Debug, Clone)]
pub struct Scene {
    pub background: Background,
    elements: Vec<Arc<Element>>,
    generation: SceneGeneration,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with a white background.
    #[must_use]
    pub fn new() -> Self {
        Self::with_background(Color::WHITE)
    }

    #[must_use]
    pub fn with_background(color: Color) -> Self {
        Self {
            background: Background {
                color,
                image: None,
            },
            elements: Vec::new(),
            generation: SceneGeneration::next(),
        }
    }

    pub fn generation(&self) -> SceneGeneration {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index).map(|e| &**e)
    }

    /// Elements bottom to top (paint order).
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &Element> + ExactSizeIterator {
        self.elements.iter().map(|e| &**e)
    }

    pub fn find_by_id(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Append an element as the new topmost. Returns its index.
    pub fn add_element(&mut self, element: Element) -> usize {
        self.elements.push(Arc::new(element));
        self.elements.len() - 1
    }

    /// Remove the element at `index`, preserving the order of the rest.
    pub fn remove_element(&mut self, index: usize) -> Result<Element, SceneError> {
        self.check_index(index)?;
        let removed = self.elements.remove(index);
        Ok(Arc::unwrap_or_clone(removed))
    }

    /// Swap the element at `index` with its neighbour in `direction`.
    /// Returns `Ok(false)` when the element is already at that boundary.
    pub fn reorder(&mut self, index: usize, direction: ZDirection) -> Result<bool, SceneError> {
        self.check_index(index)?;
        let target = match direction {
            ZDirection::Forward if index + 1 < self.elements.len() => index + 1,
            ZDirection::Backward if index > 0 => index - 1,
            _ => return Ok(false),
        };
        self.elements.swap(index, target);
        Ok(true)
    }

    /// Move the element at `index` to the top. Returns its new index.
    pub fn move_to_front(&mut self, index: usize) -> Result<usize, SceneError> {
        self.check_index(index)?;
        let element = self.elements.remove(index);
        self.elements.push(element);
        Ok(self.elements.len() - 1)
    }

    /// Move the element at `index` to the bottom. Returns its new index (0).
    pub fn move_to_back(&mut self, index: usize) -> Result<usize, SceneError> {
        self.check_index(index)?;
        let element = self.elements.remove(index);
        self.elements.insert(0, element);
        Ok(0)
    }

    /// Merge `patch` into the element at `index`.
    pub fn update_element(&mut self, index: usize, patch: &ElementPatch) -> Result<(), SceneError> {
        self.element_mut(index)?.apply_patch(patch)
    }

    pub fn set_position(&mut self, index: usize, x: f64, y: f64) -> Result<(), SceneError> {
        self.element_mut(index)?.set_position(x, y);
        Ok(())
    }

    /// Mutable access to one element, copying it first if a snapshot shares it.
    pub fn element_mut(&mut self, index: usize) -> Result<&mut Element, SceneError> {
        self.check_index(index)?;
        Ok(Arc::make_mut(&mut self.elements[index]))
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background.color = color;
    }

    pub fn set_background_image(&mut self, source: String, bitmap: BitmapSlot) {
        self.background.image = Some(BackgroundImage { source, bitmap });
    }

    pub fn clear_background_image(&mut self) {
        self.background.image = None;
    }

    /// Content equality: background and element fields, ignoring identity.
    pub fn same_content(&self, other: &Scene) -> bool {
        self.background == other.background
            && self.len() == other.len()
            && self
                .elements()
                .zip(other.elements())
                .all(|(a, b)| a.same_content(b))
    }

    /// Whether element `index` is the same allocation in both scenes.
    pub fn shares_element(&self, other: &Scene, index: usize) -> bool {
        match (self.elements.get(index), other.elements.get(index)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn check_index(&self, index: usize) -> Result<(), SceneError> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(SceneError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementKind, ShapeElement, TextElement};

    fn labelled(label: &str) -> Element {
        Element::text(TextElement::new(label, 0.0, 0.0))
    }

    fn labels(scene: &Scene) -> Vec<String> {
        scene
            .elements()
            .map(|e| e.as_text().map(|t| t.content.clone()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn add_returns_topmost_index() {
        let mut scene = Scene::new();
        assert_eq!(scene.add_element(labelled("a")), 0);
        assert_eq!(scene.add_element(labelled("b")), 1);
        assert_eq!(labels(&scene), ["a", "b"]);
    }

    #[test]
    fn remove_one_past_end_is_out_of_range() {
        let mut scene = Scene::new();
        scene.add_element(labelled("a"));
        scene.add_element(labelled("b"));

        let err = scene.remove_element(2).unwrap_err();
        assert_eq!(err, SceneError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(labels(&scene), ["a", "b"]);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut scene = Scene::new();
        for l in ["a", "b", "c", "d"] {
            scene.add_element(labelled(l));
        }
        let removed = scene.remove_element(1).unwrap();
        assert_eq!(removed.as_text().unwrap().content, "b");
        assert_eq!(labels(&scene), ["a", "c", "d"]);
    }

    #[test]
    fn reorder_is_noop_at_boundaries() {
        let mut scene = Scene::new();
        for l in ["a", "b", "c"] {
            scene.add_element(labelled(l));
        }
        assert_eq!(scene.reorder(0, ZDirection::Backward), Ok(false));
        assert_eq!(scene.reorder(2, ZDirection::Forward), Ok(false));
        assert_eq!(labels(&scene), ["a", "b", "c"]);
        assert!(scene.reorder(3, ZDirection::Forward).is_err());
    }

    #[test]
    fn reorder_forward_then_backward_restores_order() {
        let mut scene = Scene::new();
        for l in ["a", "b", "c"] {
            scene.add_element(labelled(l));
        }
        assert_eq!(scene.reorder(0, ZDirection::Forward), Ok(true));
        assert_eq!(labels(&scene), ["b", "a", "c"]);
        assert_eq!(scene.reorder(1, ZDirection::Backward), Ok(true));
        assert_eq!(labels(&scene), ["a", "b", "c"]);
    }

    #[test]
    fn front_and_back_moves() {
        let mut scene = Scene::new();
        for l in ["a", "b", "c"] {
            scene.add_element(labelled(l));
        }
        assert_eq!(scene.move_to_front(0), Ok(2));
        assert_eq!(labels(&scene), ["b", "c", "a"]);
        assert_eq!(scene.move_to_back(2), Ok(0));
        assert_eq!(labels(&scene), ["a", "b", "c"]);
    }

    #[test]
    fn update_out_of_range_and_mismatch() {
        let mut scene = Scene::new();
        scene.add_element(Element::shape(ShapeElement::rectangle(0.0, 0.0, 10.0, 10.0)));

        assert!(matches!(
            scene.update_element(1, &ElementPatch::position(1.0, 1.0)),
            Err(SceneError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            scene.update_element(0, &ElementPatch::content("x")),
            Err(SceneError::TypeMismatch {
                kind: "rectangle",
                field: "content"
            })
        ));
    }

    #[test]
    fn clones_share_untouched_elements() {
        let mut scene = Scene::new();
        scene.add_element(labelled("a"));
        scene.add_element(labelled("b"));
        let snapshot = scene.clone();

        scene.set_position(1, 5.0, 5.0).unwrap();
        assert!(scene.shares_element(&snapshot, 0));
        assert!(!scene.shares_element(&snapshot, 1));
        match &snapshot.element(1).unwrap().kind {
            ElementKind::Text(t) => assert_eq!((t.x, t.y), (0.0, 0.0)),
            other => panic!("expected text, got {other:?}"),
        }
    }
}
