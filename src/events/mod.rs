//! Event notifications.
//!
//! The engine reports what happened (cards played, dishes made, players
//! finishing) through the `EventSink` observer trait instead of stored
//! callbacks, so matching and turn logic stay testable without any
//! presentation wiring.

pub mod event;
pub mod sink;

pub use event::GameEvent;
pub use sink::{EventLog, EventSink};
