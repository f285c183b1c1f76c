//! Actor actions and the accepted-action history.
//!
//! Actors (human UI or bots) submit one of two actions. Accepted actions are
//! recorded with a sequence number so a presentation layer or a test can
//! replay what happened.
//!
//! ```
//! use potluck::core::{Action, CardId, PlayerId};
//!
//! let play = Action::PlayCard { player: PlayerId::new(0), card: CardId(12) };
//! let pass = Action::Pass { player: PlayerId::new(1) };
//!
//! assert_eq!(play.player(), PlayerId::new(0));
//! assert_eq!(pass.player(), PlayerId::new(1));
//! ```

use serde::{Deserialize, Serialize};

use super::entity::CardId;
use super::player::PlayerId;

/// An action submitted by an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play a card from hand onto the table.
    PlayCard { player: PlayerId, card: CardId },
    /// Skip for the current pass-cycle.
    Pass { player: PlayerId },
}

impl Action {
    /// The acting player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            Action::PlayCard { player, .. } | Action::Pass { player } => player,
        }
    }
}

/// An accepted action with its effect summary.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the match history (starts at 0).
    pub sequence: u32,

    pub action: Action,

    /// Dishes completed as a result.
    pub dishes_made: u32,

    /// Whether the actor kept the turn.
    pub extra_turn: bool,
}

impl ActionRecord {
    #[must_use]
    pub fn new(sequence: u32, action: Action) -> Self {
        Self {
            sequence,
            action,
            dishes_made: 0,
            extra_turn: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults() {
        let record = ActionRecord::new(3, Action::Pass { player: PlayerId::new(2) });
        assert_eq!(record.sequence, 3);
        assert_eq!(record.dishes_made, 0);
        assert!(!record.extra_turn);
        assert_eq!(record.action.player(), PlayerId::new(2));
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::PlayCard {
            player: PlayerId::new(1),
            card: CardId(40),
        };
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }
}
