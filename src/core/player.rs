//! Players and their hands.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting up to 255 players. IDs are
//! assigned in seating order when a match is set up.
//!
//! ## Hand
//!
//! Ordered, unique-keyed card collection. Insertion order is kept for
//! display and selection; rules never depend on it.

use serde::{Deserialize, Serialize};

use super::entity::CardId;
use crate::cards::Card;
use crate::zones::OrderedCards;

/// Player identifier.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player's hand.
///
/// ```
/// use potluck::cards::Card;
/// use potluck::core::{CardId, Hand, IngredientKind};
///
/// let mut hand = Hand::default();
/// hand.add(Card::ingredient(CardId(4), "Egg", IngredientKind::new("egg")));
/// hand.add(Card::ingredient(CardId(2), "Rice", IngredientKind::new("rice")));
///
/// let order: Vec<_> = hand.cards().map(|c| c.id).collect();
/// assert_eq!(order, vec![CardId(4), CardId(2)]);
///
/// assert!(hand.remove(CardId(4)).is_some());
/// assert!(hand.remove(CardId(4)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: OrderedCards<Card>,
}

impl Hand {
    /// Add a card to the end of the hand.
    ///
    /// Returns `false` if a card with the same ID is already held.
    pub fn add(&mut self, card: Card) -> bool {
        self.cards.insert(card.id, card)
    }

    /// Take a card out of the hand.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        self.cards.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains(id)
    }

    /// Cards in the order they were added.
    pub fn cards(&self) -> impl DoubleEndedIterator<Item = &Card> + '_ {
        self.cards.values()
    }

    /// Card IDs in the order they were added.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = CardId> + '_ {
        self.cards.ids()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A seated player.
#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_bot: bool,
    pub hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_bot: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_bot,
            hand: Hand::default(),
        }
    }
}
