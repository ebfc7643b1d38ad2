//! Linear undo/redo history of scene snapshots.
//!
//! Each committed mutation records a snapshot of the whole scene. Snapshots
//! are structural: `Scene` clones share unchanged elements, so a commit
//! copies one pointer per element rather than the element data.
//!
//! Entries after the cursor form the redo buffer; any commit discards them.
//! History is capped and the oldest entry is evicted first.

use crate::scene::Scene;
use std::collections::VecDeque;

/// Default maximum number of history entries.
pub const DEFAULT_HISTORY_CAP: usize = 50;

pub struct Journal {
    entries: VecDeque<Scene>,
    /// Index of the entry matching the live scene.
    cursor: usize,
    cap: usize,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAP)
    }
}

impl Journal {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(cap.max(1)),
            cursor: 0,
            cap: cap.max(1),
        }
    }

    /// A journal whose first entry is `scene`.
    pub fn with_initial(scene: &Scene, cap: usize) -> Self {
        let mut journal = Self::new(cap);
        journal.commit(scene);
        journal
    }

    /// Discard all history and start over from `scene`.
    pub fn reset(&mut self, scene: &Scene) {
        self.entries.clear();
        self.cursor = 0;
        self.commit(scene);
    }

    /// Record `scene` as the newest entry, dropping any redo branch.
    pub fn commit(&mut self, scene: &Scene) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push_back(scene.clone());
        if self.entries.len() > self.cap {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
        log::debug!(
            "journal commit: {} entries, cursor {}",
            self.entries.len(),
            self.cursor
        );
    }

    /// Step back one entry. Returns `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<Scene> {
        if self.cursor == 0 || self.entries.is_empty() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Step forward one entry. Returns `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<Scene> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Apply `f` to every stored entry, leaving the cursor where it is.
    ///
    /// For data that arrives after the fact and is not an edit of its own,
    /// such as a finished image decode.
    pub fn patch_entries(&mut self, mut f: impl FnMut(&mut Scene)) {
        for entry in self.entries.iter_mut() {
            f(entry);
        }
    }

    /// The entry at the cursor.
    pub fn current(&self) -> Option<&Scene> {
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, TextElement};

    fn scene_with(n: usize) -> Scene {
        let mut scene = Scene::new();
        for i in 0..n {
            scene.add_element(Element::text(TextElement::new(format!("{i}"), 0.0, 0.0)));
        }
        scene
    }

    #[test]
    fn empty_journal_has_nothing_to_undo() {
        let mut journal = Journal::default();
        assert!(journal.undo().is_none());
        assert!(journal.redo().is_none());
        assert!(journal.is_empty());
    }

    #[test]
    fn undo_at_oldest_entry_is_none() {
        let mut journal = Journal::with_initial(&scene_with(0), 10);
        assert!(journal.undo().is_none());
        assert_eq!(journal.cursor(), 0);
    }

    #[test]
    fn commit_after_undo_drops_redo_branch() {
        let mut journal = Journal::with_initial(&scene_with(0), 10);
        journal.commit(&scene_with(1));
        journal.commit(&scene_with(2));

        assert_eq!(journal.undo().map(|s| s.len()), Some(1));
        assert!(journal.can_redo());

        journal.commit(&scene_with(5));
        assert!(!journal.can_redo());
        assert_eq!(journal.len(), 3);
        assert_eq!(journal.undo().map(|s| s.len()), Some(1));
    }

    #[test]
    fn cap_slides_window() {
        let mut journal = Journal::new(3);
        for n in 0..5 {
            journal.commit(&scene_with(n));
        }
        assert_eq!(journal.len(), 3);
        assert_eq!(journal.cursor(), 2);
        assert_eq!(journal.current().map(Scene::len), Some(4));

        let mut undone = Vec::new();
        while let Some(scene) = journal.undo() {
            undone.push(scene.len());
        }
        // Entries 0 and 1 were evicted first.
        assert_eq!(undone, [3, 2]);
    }

    #[test]
    fn reset_discards_history() {
        let mut journal = Journal::with_initial(&scene_with(0), 10);
        journal.commit(&scene_with(1));
        journal.reset(&scene_with(3));
        assert_eq!(journal.len(), 1);
        assert!(!journal.can_undo());
    }

    #[test]
    fn patch_entries_keeps_cursor() {
        let mut journal = Journal::with_initial(&scene_with(0), 10);
        journal.commit(&scene_with(1));
        journal.undo();
        journal.patch_entries(|scene| scene.set_background_color(crate::Color::BLACK));

        assert_eq!(journal.cursor(), 0);
        assert_eq!(journal.current().map(|s| s.background.color), Some(crate::Color::BLACK));
        assert_eq!(
            journal.redo().map(|s| s.background.color),
            Some(crate::Color::BLACK)
        );
    }
}
