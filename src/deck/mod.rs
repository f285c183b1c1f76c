//! Deck and match manager.
//!
//! Builds and shuffles the deck, deals hands, executes plays, and runs
//! dish matching against the table.

pub mod manager;

pub use manager::{DeckManager, Dish, RecipeProgress};
