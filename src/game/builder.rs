//! Match setup.
//!
//! Setup order matters: the deck is built and shuffled before any player
//! exists, then players are seated (humans first, then bots), registered
//! with the turn sequencer in seating order, and dealt the whole deck.

use std::path::PathBuf;

use crate::cards::DeckDefinition;
use crate::core::config::{MatchConfig, DEFAULT_THEME, MAX_PLAYERS};
use crate::core::error::SetupError;
use crate::core::player::{Player, PlayerId};
use crate::core::rng::GameRng;
use crate::deck::DeckManager;

use super::orchestrator::Match;

/// Directory searched for non-default themes when no root is given.
pub const DEFAULT_DECK_ROOT: &str = "decks";

/// Builder for a [`Match`].
///
/// ## Example
///
/// ```
/// use potluck::game::MatchBuilder;
///
/// let game = MatchBuilder::new().humans(1).bots(3).seed(42).build().unwrap();
///
/// assert_eq!(game.players().len(), 4);
/// assert!(game.players()[1].is_bot);
/// assert!(game.deck().deck().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    config: MatchConfig,
    definition: Option<DeckDefinition>,
    deck_root: Option<PathBuf>,
    seats: Vec<(String, bool)>,
}

impl MatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration.
    #[must_use]
    pub fn from_config(config: MatchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn humans(mut self, count: usize) -> Self {
        self.config.humans = count;
        self
    }

    #[must_use]
    pub fn bots(mut self, count: usize) -> Self {
        self.config.bots = count;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.theme = theme.into();
        self
    }

    /// Use this deck instead of loading a theme.
    #[must_use]
    pub fn deck(mut self, definition: DeckDefinition) -> Self {
        self.definition = Some(definition);
        self
    }

    /// Load themes from `<root>/<theme>/`.
    #[must_use]
    pub fn deck_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.deck_root = Some(root.into());
        self
    }

    /// Seat a named player explicitly.
    ///
    /// Once any seat is added this way the human and bot counts are
    /// ignored.
    #[must_use]
    pub fn seat(mut self, name: impl Into<String>, is_bot: bool) -> Self {
        self.seats.push((name.into(), is_bot));
        self
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Load the deck, seat and deal.
    pub fn build(self) -> Result<Match, SetupError> {
        let seats = if self.seats.is_empty() {
            self.config.validate()?;
            default_seats(self.config.humans, self.config.bots)
        } else {
            match self.seats.len() {
                n if n > MAX_PLAYERS => return Err(SetupError::TooManyPlayers(n)),
                _ => self.seats,
            }
        };

        let definition = match (self.definition, self.deck_root) {
            (Some(definition), _) => definition,
            (None, Some(root)) => DeckDefinition::load_theme(root, &self.config.theme)?,
            (None, None) if self.config.theme == DEFAULT_THEME => DeckDefinition::embedded_default()?,
            (None, None) => DeckDefinition::load_theme(DEFAULT_DECK_ROOT, &self.config.theme)?,
        };

        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut deck = DeckManager::with_rng(rng);
        deck.load_deck(&definition)?;

        let mut players: Vec<Player> = seats
            .into_iter()
            .enumerate()
            .map(|(i, (name, is_bot))| Player::new(PlayerId::new(i as u8), name, is_bot))
            .collect();
        deck.deal_hands(&mut players);

        Ok(Match::new(players, deck))
    }
}

/// Humans are named `P0, P1, ...`; bots `B1, B2, ...`.
fn default_seats(humans: usize, bots: usize) -> Vec<(String, bool)> {
    let humans = (0..humans).map(|i| (format!("P{i}"), false));
    let bots = (1..=bots).map(|i| (format!("B{i}"), true));
    humans.chain(bots).collect()
}
