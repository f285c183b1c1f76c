//! Match orchestration.
//!
//! - `Match`: owns one round's state and accepts actions
//! - `MatchBuilder`: loads the deck, seats players and deals

pub mod builder;
pub mod orchestrator;

pub use builder::{MatchBuilder, DEFAULT_DECK_ROOT};
pub use orchestrator::Match;
