//! Turn rotation.
//!
//! The `TurnSequencer` is a small state machine over the seated players.
//! Each player is either active (passed or not) or finished; finishing is
//! one-way. It knows nothing about hands or cards, only IDs and flags.
//!
//! ```
//! use potluck::core::PlayerId;
//! use potluck::rules::TurnSequencer;
//!
//! let mut turns = TurnSequencer::new();
//! turns.add_player(PlayerId::new(0), false);
//! turns.add_player(PlayerId::new(1), true);
//!
//! assert_eq!(turns.current().map(|p| p.id), Some(PlayerId::new(0)));
//! turns.next();
//! assert_eq!(turns.current().map(|p| p.id), Some(PlayerId::new(1)));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::ActionError;
use crate::core::player::PlayerId;

/// Rotation state for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTurn {
    pub id: PlayerId,
    pub is_bot: bool,
    /// Skipped this pass-cycle; cleared by the next successful play.
    pub passed: bool,
    /// Terminal: hand empty and nothing left on the table.
    pub finished: bool,
    /// Hand has run out. Informational only; does not affect rotation.
    pub hand_empty: bool,
}

impl PlayerTurn {
    fn new(id: PlayerId, is_bot: bool) -> Self {
        Self {
            id,
            is_bot,
            passed: false,
            finished: false,
            hand_empty: false,
        }
    }

    /// Can be rotated to.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        !self.finished && !self.passed
    }
}

/// Turn order, pass flags and finishing order.
#[derive(Clone, Debug, Default)]
pub struct TurnSequencer {
    players: Vec<PlayerTurn>,
    index: usize,
    finished: Vec<PlayerId>,
}

impl TurnSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a player at the end of the rotation. Setup only.
    ///
    /// Returns `false` if the ID is already seated.
    pub fn add_player(&mut self, id: PlayerId, is_bot: bool) -> bool {
        if self.get_player(id).is_some() {
            return false;
        }
        self.players.push(PlayerTurn::new(id, is_bot));
        true
    }

    /// Clear all players and state for a new round.
    pub fn reset(&mut self) {
        self.players.clear();
        self.index = 0;
        self.finished.clear();
    }

    /// Whose turn it is, or `None` with no players seated.
    #[must_use]
    pub fn current(&self) -> Option<&PlayerTurn> {
        if self.players.is_empty() {
            return None;
        }
        self.players.get(self.index % self.players.len())
    }

    /// Move to the next player who is neither finished nor passed.
    ///
    /// Scans forward from the current seat, wrapping, without reconsidering
    /// the current seat. If nobody is eligible the turn stays where it is
    /// and `false` is returned; the caller has to notice that everyone has
    /// passed or finished.
    pub fn next(&mut self) -> bool {
        let count = self.players.len();
        for step in 1..count {
            let idx = (self.index + step) % count;
            if self.players[idx].is_eligible() {
                self.index = idx;
                tracing::debug!(player = %self.players[idx].id, "turn moved");
                return true;
            }
        }
        false
    }

    /// Mark a player as passed for this cycle.
    pub fn pass(&mut self, id: PlayerId) -> Result<(), ActionError> {
        match self.get_player_mut(id) {
            Some(player) if !player.finished => {
                player.passed = true;
                Ok(())
            }
            _ => Err(ActionError::InvalidPass(id)),
        }
    }

    /// Clear every pass flag.
    pub fn mark_all_unpassed(&mut self) {
        for player in &mut self.players {
            player.passed = false;
        }
    }

    /// Mark a player finished and record their rank.
    ///
    /// Idempotent. Returns `true` only on the first transition.
    pub fn mark_finished(&mut self, id: PlayerId) -> bool {
        let Some(player) = self.get_player_mut(id) else {
            return false;
        };
        if player.finished {
            return false;
        }
        player.finished = true;
        self.finished.push(id);
        true
    }

    /// Note that a player's hand has run out.
    ///
    /// Returns `true` the first time.
    pub fn mark_hand_empty(&mut self, id: PlayerId) -> bool {
        match self.get_player_mut(id) {
            Some(player) if !player.hand_empty => {
                player.hand_empty = true;
                true
            }
            _ => false,
        }
    }

    /// Players who have finished, first finisher first.
    #[must_use]
    pub fn finished_order(&self) -> &[PlayerId] {
        &self.finished
    }

    #[must_use]
    pub fn get_player(&self, id: PlayerId) -> Option<&PlayerTurn> {
        self.players.iter().find(|p| p.id == id)
    }

    fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut PlayerTurn> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Seated players in rotation order.
    #[must_use]
    pub fn players(&self) -> &[PlayerTurn] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Every seated player has finished.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        !self.players.is_empty() && self.finished.len() == self.players.len()
    }
}
