//! Card locations: the ordered container and the table.
//!
//! A card is always in exactly one place: a player's hand or the table.
//! Both are backed by `OrderedCards`, and cards move between them by value,
//! so a card can never be in two places at once.
//!
//! ## Key Types
//!
//! - `OrderedCards`: Insertion-ordered map keyed by `CardId`
//! - `Table`: Cards in play with provenance and play order
//! - `TableEntry`: A card on the table plus who played it

pub mod ordered;
pub mod table;

pub use ordered::OrderedCards;
pub use table::{Table, TableEntry};
