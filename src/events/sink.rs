//! Event delivery.
//!
//! Rules code writes events into an `EventSink`. `EventLog` is the
//! in-memory sink used by the orchestrator and in tests; presentation layers
//! plug in their own sink or a closure.
//!
//! ```
//! use potluck::events::{EventLog, EventSink, GameEvent};
//! use potluck::core::PlayerId;
//!
//! let mut log = EventLog::new();
//! log.emit(GameEvent::Passed { player: PlayerId::new(0) });
//! assert_eq!(log.len(), 1);
//!
//! let mut seen = 0;
//! let mut counter = |_: &GameEvent| seen += 1;
//! counter.emit(GameEvent::Passed { player: PlayerId::new(1) });
//! assert_eq!(seen, 1);
//! ```

use super::event::GameEvent;

/// Receiver of game events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn emit(&mut self, event: GameEvent) {
        self(&event);
    }
}

/// Events collected in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every recorded event, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
