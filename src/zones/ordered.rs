//! Ordered, unique-keyed card storage.
//!
//! `OrderedCards` pairs an `FxHashMap` for O(1) lookup by `CardId` with a
//! `Vec` that remembers insertion order. Hands and the table both need
//! stable iteration order (display, recency) and fast membership checks.
//!
//! ```
//! use potluck::core::CardId;
//! use potluck::zones::OrderedCards;
//!
//! let mut cards = OrderedCards::new();
//! assert!(cards.insert(CardId(3), "c"));
//! assert!(cards.insert(CardId(1), "a"));
//! assert!(!cards.insert(CardId(3), "dup"));
//!
//! let ids: Vec<_> = cards.ids().collect();
//! assert_eq!(ids, vec![CardId(3), CardId(1)]);
//! ```

use rustc_hash::FxHashMap;

use crate::core::entity::CardId;

/// Insertion-ordered map keyed by `CardId`.
///
/// Invariant: every key in `entries` appears exactly once in `order`, and
/// every ID in `order` has an entry.
#[derive(Clone, Debug)]
pub struct OrderedCards<V> {
    entries: FxHashMap<CardId, V>,
    order: Vec<CardId>,
}

impl<V> Default for OrderedCards<V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
            order: Vec::new(),
        }
    }
}

impl<V> OrderedCards<V> {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `id`.
    ///
    /// Returns `false` and leaves the collection untouched if `id` is
    /// already present.
    pub fn insert(&mut self, id: CardId, value: V) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, value);
        self.order.push(id);
        true
    }

    /// Remove the value stored under `id`, keeping the rest in order.
    pub fn remove(&mut self, id: CardId) -> Option<V> {
        let value = self.entries.remove(&id)?;
        if let Some(pos) = self.order.iter().position(|&c| c == id) {
            self.order.remove(pos);
        }
        Some(value)
    }

    /// Look up a value by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&V> {
        self.entries.get(&id)
    }

    /// Check whether `id` is present.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// IDs in insertion order.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = CardId> + '_ {
        self.order.iter().copied()
    }

    /// Values in insertion order (oldest first).
    ///
    /// Reverse it with `.rev()` for newest first.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + '_ {
        self.order.iter().filter_map(move |id| self.entries.get(id))
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
