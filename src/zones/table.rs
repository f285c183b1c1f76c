//! The shared table.
//!
//! The `Table` is the authoritative record of which cards are in play and
//! who played each one (provenance). It keeps play order (oldest to newest)
//! for recency tie-breaks in dish matching.
//!
//! All queries return fresh iterators over the current state. They borrow
//! the table, so the table cannot change while one is being consumed.
//!
//! ## Usage
//!
//! ```
//! use potluck::cards::Card;
//! use potluck::core::{CardId, IngredientKind, PlayerId};
//! use potluck::zones::Table;
//!
//! let mut table = Table::new();
//! let alice = PlayerId::new(0);
//!
//! let flour = Card::ingredient(CardId(1), "Flour", IngredientKind::new("flour"));
//! assert!(table.add_card(flour, alice).is_none());
//!
//! assert!(table.has_player_cards(alice));
//! assert_eq!(table.cards_in_play_order().count(), 1);
//!
//! table.remove_card(CardId(1));
//! assert!(!table.has_player_cards(alice));
//! ```

use serde::{Deserialize, Serialize};

use super::ordered::OrderedCards;
use crate::cards::{Card, CardKind};
use crate::core::entity::CardId;
use crate::core::player::PlayerId;

/// A card on the table and the player who put it there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub card: Card,
    pub player: PlayerId,
}

/// Cards currently in play.
#[derive(Clone, Debug, Default)]
pub struct Table {
    entries: OrderedCards<TableEntry>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card on the table, tagged with the player who played it.
    ///
    /// If a card with the same ID is already on the table nothing changes
    /// and the card is handed back.
    #[must_use = "a rejected card is returned and would be dropped"]
    pub fn add_card(&mut self, card: Card, player: PlayerId) -> Option<Card> {
        if self.entries.contains(card.id) {
            return Some(card);
        }
        self.entries.insert(card.id, TableEntry { card, player });
        None
    }

    /// Take a card off the table. No-op if it isn't there.
    pub fn remove_card(&mut self, id: CardId) -> Option<TableEntry> {
        self.entries.remove(id)
    }

    /// Look up a card on the table.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&TableEntry> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.entries.contains(id)
    }

    /// Cards, oldest first.
    pub fn cards_in_play_order(&self) -> impl Iterator<Item = &Card> + '_ {
        self.entries.values().map(|e| &e.card)
    }

    /// Cards, newest first.
    pub fn cards_in_reverse_play_order(&self) -> impl Iterator<Item = &Card> + '_ {
        self.entries.values().rev().map(|e| &e.card)
    }

    /// Cards of one kind, oldest first.
    pub fn cards_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &Card> + '_ {
        self.cards_in_play_order().filter(move |c| c.kind() == kind)
    }

    /// Cards played by one player, oldest first.
    pub fn cards_by_player(&self, player: PlayerId) -> impl Iterator<Item = &Card> + '_ {
        self.entries
            .values()
            .filter(move |e| e.player == player)
            .map(|e| &e.card)
    }

    /// Whether any card on the table was played by `player`.
    #[must_use]
    pub fn has_player_cards(&self, player: PlayerId) -> bool {
        self.entries.values().any(|e| e.player == player)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
