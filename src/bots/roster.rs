//! Routing turns to bots.

use rustc_hash::FxHashMap;

use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::rules::MatchActions;

use super::bot::Bot;

/// Bots keyed by the seat they control.
#[derive(Default)]
pub struct BotRoster {
    bots: FxHashMap<PlayerId, Box<dyn Bot>>,
}

impl BotRoster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `bot` in control of `player`, replacing any previous bot.
    pub fn register(&mut self, player: PlayerId, bot: impl Bot + 'static) {
        self.bots.insert(player, Box::new(bot));
    }

    #[must_use]
    pub fn controls(&self, player: PlayerId) -> bool {
        self.bots.contains_key(&player)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }

    /// One step of the poll loop.
    ///
    /// If the current player is one of ours, its bot acts once and `true` is
    /// returned. Returns `false` when it is a human's turn or nobody is
    /// seated.
    pub fn tick(&mut self, game: &mut dyn MatchActions) -> Result<bool, ActionError> {
        let Some(current) = game.current_player() else {
            return Ok(false);
        };
        let Some(bot) = self.bots.get_mut(&current) else {
            return Ok(false);
        };

        bot.play_turn(game, current)?;
        Ok(true)
    }
}

impl std::fmt::Debug for BotRoster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut seats: Vec<_> = self.bots.keys().copied().collect();
        seats.sort();
        f.debug_struct("BotRoster").field("seats", &seats).finish()
    }
}
