//! The HiPack dictionary: an insertion-ordered string-keyed map.
//!
//! The reference implementation hand-rolls a chained hash table (bucket
//! array plus a doubly linked insertion list) to get O(1) lookup with
//! stable insertion-order iteration. [`indexmap::IndexMap`] is exactly that
//! data structure — a dense entry vector plus a hash index into it — so
//! `Dict` is a thin wrapper rather than a reimplementation: growth,
//! rehashing, and the chain-vs-list bookkeeping it would otherwise need are the
//! internal mechanics `IndexMap` already provides. What the wrapper adds is
//! the domain's invariants: no duplicate keys (re-insertion replaces, never
//! appends) and an insertion-ordered iterator callers can rely on across
//! rehashes.

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;

use crate::value::Value;

#[derive(Clone, Debug, Default)]
pub struct Dict {
    entries: IndexMap<String, Value>,
}

impl Dict {
    pub fn new() -> Self {
        Dict {
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `value` under `key`, replacing and returning any prior value.
    /// A fresh key is appended to the end of the insertion order; an
    /// existing key keeps its original position.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, preserving the relative order of the remaining
    /// entries (an O(n) shift, trading speed for the ordering guarantee).
    pub fn del(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl IntoIterator for Dict {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, Value)> for Dict {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Dict {
            entries: IndexMap::from_iter(iter),
        }
    }
}

/// Dict equality per the format's data model: counts must match, and every
/// key in `self` must exist in `other` with an equal value. Given the
/// no-duplicate-keys invariant, equal counts plus one-directional key
/// coverage implies the dicts contain the same keys.
impl PartialEq for Dict {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|ov| v == ov))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place_without_reordering() {
        let mut d = Dict::new();
        d.set("a", Value::integer(1));
        d.set("b", Value::integer(2));
        d.set("a", Value::integer(3));
        let keys: Vec<_> = d.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(d.get("a"), Some(&Value::integer(3)));
    }

    #[test]
    fn del_preserves_remaining_order() {
        let mut d = Dict::new();
        d.set("a", Value::integer(1));
        d.set("b", Value::integer(2));
        d.set("c", Value::integer(3));
        d.del("b");
        assert_eq!(d.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn equality_ignores_order() {
        let mut a = Dict::new();
        a.set("x", Value::integer(1));
        a.set("y", Value::integer(2));
        let mut b = Dict::new();
        b.set("y", Value::integer(2));
        b.set("x", Value::integer(1));
        assert_eq!(a, b);
    }
}
