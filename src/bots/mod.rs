//! Computer players.
//!
//! - `Bot`: acts for one seat through `MatchActions`
//! - `RandomBot`: uniform random card choice
//! - `BotRoster`: maps seats to bots and runs one tick of the poll loop

pub mod bot;
pub mod roster;

pub use bot::{Bot, RandomBot};
pub use roster::BotRoster;
