//! Turn rules and the actor interface.
//!
//! - `TurnSequencer`: rotation, pass flags and finishing order
//! - `MatchActions`: the narrow interface actors use to act on a match

pub mod engine;
pub mod turns;

pub use engine::{MatchActions, PlayOutcome, PlayerView};
pub use turns::{PlayerTurn, TurnSequencer};
