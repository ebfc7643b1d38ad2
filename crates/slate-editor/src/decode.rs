//! One-shot image decode completions.
//!
//! Decoding happens on the host (a browser `Image`, a file read, a worker).
//! The editor hands out a `DecodeTicket` when an image needs pixels; the
//! host returns it with the result. A ticket only lands on a scene of the
//! generation it was issued for, and only if its target is present there.

use slate_core::{BitmapSlot, ElementId, ElementKind, Scene, SceneGeneration};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// What a decoded bitmap belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeTarget {
    Element(ElementId),
    /// The background image, identified by a fingerprint of its data URL so a
    /// replaced background does not receive the old image's pixels.
    Background { source_hash: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeTicket {
    pub generation: SceneGeneration,
    pub target: DecodeTarget,
}

/// A decode the host should perform: bytes come from `source` (a data URL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeRequest {
    pub ticket: DecodeTicket,
    pub source: String,
}

impl DecodeTicket {
    pub fn for_element(scene: &Scene, id: ElementId) -> Self {
        Self {
            generation: scene.generation(),
            target: DecodeTarget::Element(id),
        }
    }

    pub fn for_background(scene: &Scene, source: &str) -> Self {
        Self {
            generation: scene.generation(),
            target: DecodeTarget::Background {
                source_hash: source_hash(source),
            },
        }
    }

    /// Store `slot` in the ticket's target. Returns `false` if `scene` is a
    /// different document or the target is gone.
    pub fn apply(&self, scene: &mut Scene, slot: &BitmapSlot) -> bool {
        if scene.generation() != self.generation {
            return false;
        }
        match self.target {
            DecodeTarget::Element(id) => {
                let Some(index) = scene.find_by_id(id) else {
                    return false;
                };
                match scene.element_mut(index).map(|element| &mut element.kind) {
                    Ok(ElementKind::Image(image)) => {
                        image.bitmap = slot.clone();
                        true
                    }
                    _ => false,
                }
            }
            DecodeTarget::Background { source_hash: hash } => {
                match scene.background.image.as_mut() {
                    Some(image) if source_hash(&image.source) == hash => {
                        image.bitmap = slot.clone();
                        true
                    }
                    _ => false,
                }
            }
        }
    }
}

fn source_hash(source: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::{Bitmap, Element, ImageElement};

    fn ready() -> BitmapSlot {
        BitmapSlot::Ready(Bitmap::solid(1, 1, [0, 0, 0, 255]).unwrap())
    }

    #[test]
    fn applies_to_live_element() {
        let mut scene = Scene::new();
        let element = Element::image(ImageElement::new(0.0, 0.0, 10.0, 10.0));
        let ticket = DecodeTicket::for_element(&scene, element.id);
        scene.add_element(element);

        assert!(ticket.apply(&mut scene, &ready()));
        assert!(scene.element(0).and_then(|e| e.as_image()).unwrap().bitmap.is_ready());
    }

    #[test]
    fn removed_element_is_stale() {
        let mut scene = Scene::new();
        let element = Element::image(ImageElement::new(0.0, 0.0, 10.0, 10.0));
        let ticket = DecodeTicket::for_element(&scene, element.id);
        scene.add_element(element);
        scene.remove_element(0).unwrap();

        assert!(!ticket.apply(&mut scene, &ready()));
    }

    #[test]
    fn other_scene_is_stale() {
        let scene = Scene::new();
        let element = Element::image(ImageElement::new(0.0, 0.0, 10.0, 10.0));
        let ticket = DecodeTicket::for_element(&scene, element.id);

        // Same element, different document.
        let mut replacement = Scene::new();
        replacement.add_element(element);
        assert!(!ticket.apply(&mut replacement, &ready()));
    }

    #[test]
    fn replaced_background_is_stale() {
        let mut scene = Scene::new();
        scene.set_background_image("data:image/png;base64,AAAA".into(), BitmapSlot::Pending);
        let ticket = DecodeTicket::for_background(&scene, "data:image/png;base64,AAAA");
        scene.set_background_image("data:image/png;base64,BBBB".into(), BitmapSlot::Pending);

        assert!(!ticket.apply(&mut scene, &ready()));
        assert_eq!(
            scene.background.image.as_ref().map(|img| img.bitmap.is_ready()),
            Some(false)
        );
    }
}
