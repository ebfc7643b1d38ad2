use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identity of an element.
///
/// Ids are never persisted; they exist so that asynchronous completions
/// (image decodes) can tell whether the element they target still exists.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        ElementId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of a scene instance.
///
/// A new document, a loaded file, or a template each get a fresh
/// generation. Undo/redo snapshots keep the generation of the scene
/// they were taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneGeneration(u64);

impl SceneGeneration {
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        SceneGeneration(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}
