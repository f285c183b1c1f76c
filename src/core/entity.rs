//! Card and ingredient identifiers.
//!
//! Every card instance in a match has a unique `CardId`. IDs are handed out
//! by a monotonic allocator owned by the deck manager, so they stay unique
//! across reloads and are never reused once a card leaves the game.
//!
//! `IngredientKind` names a catalog entry ("flour", "egg"). Many card
//! instances can share one kind; recipes list the kinds they need.
//!
//! ## Usage
//!
//! ```
//! use potluck::core::{CardId, CardIdAllocator, IngredientKind};
//!
//! let mut ids = CardIdAllocator::default();
//! let first = ids.alloc();
//! let second = ids.alloc();
//! assert_ne!(first, second);
//!
//! let flour = IngredientKind::new("flour");
//! assert_eq!(flour.as_str(), "flour");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
///
/// Immutable once assigned. Two cards built from the same catalog entry
/// still get distinct IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Hands out fresh card IDs.
///
/// Never rewinds, so reloading a deck cannot collide with cards that are
/// still referenced elsewhere.
#[derive(Clone, Debug, Default)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Allocate the next card ID.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

/// An ingredient catalog entry ID, e.g. `"flour"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientKind(String);

impl IngredientKind {
    /// Create an ingredient kind.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the catalog ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IngredientKind {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
