//! Match configuration.
//!
//! `MatchConfig` is plain data: how many human and bot seats, which deck
//! theme, and an optional seed for reproducible shuffles. It deserializes
//! from JSON so hosts can keep it next to their deck files.
//!
//! ```
//! use potluck::core::MatchConfig;
//!
//! let config = MatchConfig::default().with_bots(2).with_seed(7);
//! assert_eq!(config.player_count(), 3);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::SetupError;

/// Maximum seats at one table.
pub const MAX_PLAYERS: usize = 8;

/// Theme loaded when none is given.
pub const DEFAULT_THEME: &str = "default";

/// Settings for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Human seats, seated first.
    pub humans: usize,

    /// Bot seats, seated after the humans.
    pub bots: usize,

    /// Shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Deck theme directory name.
    pub theme: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            humans: 1,
            bots: 3,
            seed: None,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl MatchConfig {
    /// Set the number of human seats.
    #[must_use]
    pub fn with_humans(mut self, humans: usize) -> Self {
        self.humans = humans;
        self
    }

    /// Set the number of bot seats.
    #[must_use]
    pub fn with_bots(mut self, bots: usize) -> Self {
        self.bots = bots;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the deck theme.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Total seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.humans + self.bots
    }

    /// Check seat counts.
    pub fn validate(&self) -> Result<(), SetupError> {
        match self.player_count() {
            0 => Err(SetupError::NoPlayers),
            n if n > MAX_PLAYERS => Err(SetupError::TooManyPlayers(n)),
            _ => Ok(()),
        }
    }
}
