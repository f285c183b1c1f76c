//! Bot players.
//!
//! A bot acts only through [`MatchActions`]: it reads its own view and
//! submits a play or a pass. Choosing *when* to act (pacing, think time) is
//! the caller's job.

use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::rules::MatchActions;

/// A computer-controlled player.
pub trait Bot: Send {
    /// Take one action for `me`.
    ///
    /// Does nothing if `me` has already finished.
    fn play_turn(&mut self, game: &mut dyn MatchActions, me: PlayerId) -> Result<(), ActionError>;
}

/// Plays a uniformly random card, or passes with an empty hand.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
}

impl RandomBot {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// A bot whose choices are reproducible from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl Bot for RandomBot {
    fn play_turn(&mut self, game: &mut dyn MatchActions, me: PlayerId) -> Result<(), ActionError> {
        let view = game.player_view(me).ok_or(ActionError::UnknownPlayer(me))?;
        if view.finished {
            return Ok(());
        }

        match self.rng.choose(&view.hand) {
            Some(card) => {
                tracing::debug!(player = %me, card = %card, "bot plays");
                game.play_card(me, card.id).map(|_| ())
            }
            None => {
                tracing::debug!(player = %me, "bot passes");
                game.pass(me)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{CardId, IngredientKind};
    use crate::rules::{PlayOutcome, PlayerView};

    /// Records what a bot submits without running any rules.
    #[derive(Default)]
    pub(crate) struct StubMatch {
        pub views: Vec<PlayerView>,
        pub current: Option<PlayerId>,
        pub played: Vec<(PlayerId, CardId)>,
        pub passed: Vec<PlayerId>,
    }

    impl StubMatch {
        pub fn with_player(mut self, id: u8, hand: Vec<Card>, finished: bool) -> Self {
            self.views.push(PlayerView {
                id: PlayerId::new(id),
                is_bot: true,
                passed: false,
                finished,
                hand,
            });
            self
        }
    }

    impl MatchActions for StubMatch {
        fn current_player(&self) -> Option<PlayerId> {
            self.current
        }

        fn player_view(&self, player: PlayerId) -> Option<PlayerView> {
            self.views.iter().find(|v| v.id == player).cloned()
        }

        fn play_card(&mut self, player: PlayerId, card: CardId) -> Result<PlayOutcome, ActionError> {
            self.played.push((player, card));
            Ok(PlayOutcome::default())
        }

        fn pass(&mut self, player: PlayerId) -> Result<(), ActionError> {
            self.passed.push(player);
            Ok(())
        }
    }

    pub(crate) fn egg(id: u32) -> Card {
        Card::ingredient(CardId(id), "Egg", IngredientKind::new("egg"))
    }

    #[test]
    fn test_plays_a_card_from_its_hand() {
        let mut game = StubMatch::default().with_player(1, vec![egg(4), egg(5), egg(6)], false);
        let mut bot = RandomBot::seeded(3);

        bot.play_turn(&mut game, PlayerId::new(1)).unwrap();

        assert_eq!(game.played.len(), 1);
        let (player, card) = game.played[0];
        assert_eq!(player, PlayerId::new(1));
        assert!([CardId(4), CardId(5), CardId(6)].contains(&card));
        assert!(game.passed.is_empty());
    }

    #[test]
    fn test_passes_with_empty_hand() {
        let mut game = StubMatch::default().with_player(2, Vec::new(), false);
        let mut bot = RandomBot::seeded(3);

        bot.play_turn(&mut game, PlayerId::new(2)).unwrap();

        assert_eq!(game.passed, vec![PlayerId::new(2)]);
        assert!(game.played.is_empty());
    }

    #[test]
    fn test_finished_bot_does_nothing() {
        let mut game = StubMatch::default().with_player(1, vec![egg(1)], true);
        let mut bot = RandomBot::seeded(3);

        bot.play_turn(&mut game, PlayerId::new(1)).unwrap();
        assert!(game.played.is_empty() && game.passed.is_empty());
    }

    #[test]
    fn test_unknown_player() {
        let mut game = StubMatch::default();
        let mut bot = RandomBot::seeded(3);

        let err = bot.play_turn(&mut game, PlayerId::new(7)).unwrap_err();
        assert_eq!(err, ActionError::UnknownPlayer(PlayerId::new(7)));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let pick = |seed| {
            let hand = (0..10).map(egg).collect();
            let mut game = StubMatch::default().with_player(0, hand, false);
            RandomBot::seeded(seed).play_turn(&mut game, PlayerId::new(0)).unwrap();
            game.played[0].1
        };
        assert_eq!(pick(21), pick(21));
    }
}
