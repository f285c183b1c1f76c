//! Game event types.
//!
//! Events are notifications for presentation (sounds, animations, logs).
//! They never feed back into the rules.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{CardId, PlayerId};

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card moved from `player`'s hand to the table.
    CardPlayed { player: PlayerId, card: Card },

    /// A recipe was completed; the recipe and `ingredients` left the game.
    DishMade {
        recipe: Card,
        /// Who played the recipe card.
        cook: PlayerId,
        ingredients: Vec<CardId>,
    },

    /// A player passed.
    Passed { player: PlayerId },

    /// A player's hand became empty for the first time.
    HandEmptied { player: PlayerId },

    /// A player finished. `rank` is 1 for the first finisher.
    ///
    /// Players finished by the same dish are ranked in seat order, not
    /// with the acting player first.
    PlayerFinished { player: PlayerId, rank: usize },

    /// Every player has finished.
    RoundOver { ranking: Vec<PlayerId> },
}

impl GameEvent {
    /// The player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::CardPlayed { player, .. }
            | GameEvent::Passed { player }
            | GameEvent::HandEmptied { player }
            | GameEvent::PlayerFinished { player, .. } => Some(*player),
            GameEvent::DishMade { cook, .. } => Some(*cook),
            GameEvent::RoundOver { .. } => None,
        }
    }
}
