//! # potluck
//!
//! Rules engine for a turn-based card-matching game. Players hold
//! ingredient and recipe cards; playing cards onto a shared table can
//! complete a recipe ("make a dish"), consuming the matching ingredients.
//! A player finishes once their hand is empty and none of their cards are
//! left on the table. The round ends when everyone has finished.
//!
//! ## Design Principles
//!
//! 1. **Cards move by value**: a card lives in exactly one hand or on the
//!    table, and leaves the game only when a dish consumes it.
//!
//! 2. **One entry point**: humans and bots act only through
//!    [`MatchActions`]; they never touch the deck, the table or the turn
//!    sequencer directly.
//!
//! 3. **Events out, never in**: presentation observes [`GameEvent`]s through
//!    an [`EventSink`]. Events never feed back into the rules.
//!
//! ## Modules
//!
//! - `core`: IDs, players and hands, RNG, configuration, actions, errors
//! - `cards`: Card instances and the JSON deck definition
//! - `zones`: Ordered card container and the table
//! - `deck`: Deck building, dealing, playing and dish matching
//! - `rules`: Turn sequencing and the actor interface
//! - `events`: Game events and sinks
//! - `game`: The match orchestrator and its builder
//! - `bots`: Computer players
//!
//! ## Example
//!
//! ```
//! use potluck::{MatchBuilder, BotRoster, RandomBot};
//!
//! let mut game = MatchBuilder::new().humans(0).bots(4).seed(7).build().unwrap();
//!
//! let mut roster = BotRoster::new();
//! for player in game.players() {
//!     roster.register(player.id, RandomBot::seeded(u64::from(player.id.0)));
//! }
//!
//! while !game.is_round_over() && !game.is_stalled() {
//!     roster.tick(&mut game).unwrap();
//! }
//!
//! assert_eq!(game.finished_order().len(), 4);
//! assert!(game.table().is_empty());
//! ```

pub mod core;
pub mod zones;
pub mod cards;
pub mod deck;
pub mod rules;
pub mod events;
pub mod game;
pub mod bots;

// Re-export commonly used types
pub use crate::core::{
    CardId, IngredientKind, PlayerId, Player, Hand,
    GameRng, MatchConfig,
    Action, ActionRecord,
    ActionError, DeckError, SetupError,
};

pub use crate::cards::{Card, CardKind, DeckDefinition, IngredientConfig, RecipeConfig};

pub use crate::zones::{Table, TableEntry};

pub use crate::deck::{DeckManager, Dish, RecipeProgress};

pub use crate::rules::{MatchActions, PlayOutcome, PlayerView, TurnSequencer};

pub use crate::events::{EventLog, EventSink, GameEvent};

pub use crate::game::{Match, MatchBuilder};

pub use crate::bots::{Bot, BotRoster, RandomBot};
