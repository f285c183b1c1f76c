//! Core types: identifiers, players, RNG, configuration, actions, errors.
//!
//! These are the building blocks shared by the table, the deck manager,
//! the turn sequencer and the match orchestrator.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use entity::{CardId, CardIdAllocator, IngredientKind};
pub use player::{Hand, Player, PlayerId};
pub use rng::GameRng;
pub use config::{MatchConfig, DEFAULT_THEME, MAX_PLAYERS};
pub use action::{Action, ActionRecord};
pub use error::{ActionError, DeckError, SetupError};
