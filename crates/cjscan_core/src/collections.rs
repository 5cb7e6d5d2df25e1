//! Collection types used by the lexer's result builder.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;

/// A set that remembers insertion order and ignores repeated inserts.
/// Used where JavaScript would use a `Set` (which iterates in insertion order).
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    items: IndexSet<T, FxBuildHasher>,
}

impl<T: Eq + Hash> OrderedSet<T> {
    pub fn new() -> Self {
        Self {
            items: IndexSet::with_hasher(FxBuildHasher),
        }
    }

    /// Insert a value. Returns `false` if it was already present, in which
    /// case its original position is kept.
    pub fn insert(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drain the set into a `Vec` in insertion order, leaving it empty but
    /// with its allocation intact for reuse.
    pub fn drain_to_vec(&mut self) -> Vec<T> {
        self.items.drain(..).collect()
    }
}

impl<T: Eq + Hash> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-export FxHashMap for convenience.
pub type FxMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A set that uses FxHash; iteration order is unspecified.
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
