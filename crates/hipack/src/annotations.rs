//! Per-value annotation sets.
//!
//! The original HiPack implementation models a value's annotations as a
//! dictionary mapping each annotation name to the boolean constant `true` —
//! storage for a set, built out of the one container type the format
//! already has. In a language with a real set type that indirection buys
//! nothing, so `Annotations` is a proper ordered set of names instead; it
//! preserves the same "absent or non-empty" invariant and the same
//! insertion-order iteration the dict-of-true encoding gave for free.

use indexmap::IndexSet;

#[derive(Clone, Debug, Default)]
pub struct Annotations(IndexSet<String>);

impl Annotations {
    pub fn new() -> Self {
        Annotations(IndexSet::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Adds `name` to the set. Returns `false` if it was already present —
    /// the parser treats that as the hard "duplicate annotation" error.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn del(&mut self, name: &str) -> bool {
        self.0.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl PartialEq for Annotations {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Annotations {}
