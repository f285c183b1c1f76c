//! The actor-facing capability interface.
//!
//! Humans (through a UI) and bots act on a match only through
//! `MatchActions`: read one player's view, play a card, or pass. They never
//! see the deck manager, the table internals or the turn sequencer.
//!
//! `Match` is the production implementation. Tests can supply a stub.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::entity::CardId;
use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::deck::Dish;

/// Read-only snapshot of one player, as a bot or UI sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub is_bot: bool,
    pub passed: bool,
    pub finished: bool,
    /// Hand contents in insertion order.
    pub hand: Vec<Card>,
}

/// Result of an accepted `play_card`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Dishes completed by this play, in resolution order.
    pub dishes: Vec<Dish>,
    /// The actor keeps the turn (made a dish and still holds cards).
    pub extra_turn: bool,
}

impl PlayOutcome {
    #[must_use]
    pub fn made_dish(&self) -> bool {
        !self.dishes.is_empty()
    }
}

/// Actions and queries available to actors.
pub trait MatchActions {
    /// Whose turn it is.
    fn current_player(&self) -> Option<PlayerId>;

    /// Snapshot of a player's state, or `None` for an unknown ID.
    fn player_view(&self, player: PlayerId) -> Option<PlayerView>;

    /// Play `card` from `player`'s hand.
    fn play_card(&mut self, player: PlayerId, card: CardId) -> Result<PlayOutcome, ActionError>;

    /// Pass for the current cycle.
    fn pass(&mut self, player: PlayerId) -> Result<(), ActionError>;
}
