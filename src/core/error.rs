//! Error types.
//!
//! - `DeckError`: a deck definition could not be loaded or is invalid.
//!   Fatal to starting a match.
//! - `ActionError`: a submitted action was rejected. Local and non-fatal;
//!   state is left exactly as it was.
//! - `SetupError`: a match could not be built.

use std::path::PathBuf;

use thiserror::Error;

use super::entity::CardId;
use super::player::PlayerId;

/// Deck definition loading and validation errors.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("recipe {recipe:?} requires unknown ingredient {ingredient:?}")]
    UnknownIngredient { recipe: String, ingredient: String },
    #[error("ingredient {0:?} is listed more than once")]
    DuplicateIngredient(String),
    #[error("recipe {0:?} is listed more than once")]
    DuplicateRecipe(String),
    #[error("recipe {0:?} has no requirements")]
    EmptyRecipe(String),
    #[error("deck definition has no recipes")]
    EmptyCatalog,
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejected player actions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("not your turn: {player} acted while it is {current}'s turn")]
    NotYourTurn { player: PlayerId, current: PlayerId },
    #[error("no players registered")]
    NoCurrentPlayer,
    #[error("{0} has already finished")]
    PlayerFinished(PlayerId),
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("invalid card id: {card} is not in {player}'s hand")]
    InvalidCardId { player: PlayerId, card: CardId },
    #[error("invalid pass by {0}")]
    InvalidPass(PlayerId),
}

/// Match setup errors.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("a match needs at least one player")]
    NoPlayers,
    #[error("{0} players requested, at most {max} supported", max = super::config::MAX_PLAYERS)]
    TooManyPlayers(usize),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_messages() {
        let err = ActionError::NotYourTurn {
            player: PlayerId::new(2),
            current: PlayerId::new(0),
        };
        assert_eq!(
            err.to_string(),
            "not your turn: Player 2 acted while it is Player 0's turn"
        );

        let err = ActionError::InvalidCardId {
            player: PlayerId::new(1),
            card: CardId(9),
        };
        assert_eq!(err.to_string(), "invalid card id: Card(9) is not in Player 1's hand");
    }

    #[test]
    fn test_setup_error_wraps_deck_error() {
        let err: SetupError = DeckError::EmptyCatalog.into();
        assert!(matches!(err, SetupError::Deck(DeckError::EmptyCatalog)));
        assert_eq!(err.to_string(), "deck definition has no recipes");
    }

    #[test]
    fn test_too_many_players_message() {
        let err = SetupError::TooManyPlayers(12);
        assert_eq!(err.to_string(), "12 players requested, at most 8 supported");
    }
}
