//! Board events.
//!
//! Mutators on `Board` return the events they caused instead of calling
//! listeners themselves. Callers decide how to propagate them: push them
//! through an [`Observers`] list, send them down a channel, or drop them.
//!
//! ## Event Order
//!
//! A successful `place_card` or `pass` returns its own event first. If the
//! move ended the game, a `GameOver` event follows.

use serde::{Deserialize, Serialize};

use super::side::Side;
use crate::cards::CardRef;

/// Something that happened on a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// Hands dealt, border pawns seeded.
    Started {
        /// Side to move first.
        first: Side,
    },

    /// A card left a hand and now occupies `(row, col)`.
    CardPlaced {
        side: Side,
        card: CardRef,
        row: usize,
        col: usize,
        /// Number of cells whose pawns changed.
        influenced: usize,
        /// True if a replacement was drawn from the deck.
        drew: bool,
    },

    /// The side to move passed.
    Passed { side: Side },

    /// Terminal state reached.
    GameOver {
        winner: Side,
        red_score: u64,
        blue_score: u64,
    },
}

impl BoardEvent {
    /// The acting side, if the event has one.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        match self {
            BoardEvent::CardPlaced { side, .. } | BoardEvent::Passed { side } => Some(*side),
            BoardEvent::Started { .. } | BoardEvent::GameOver { .. } => None,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, BoardEvent::GameOver { .. })
    }
}

/// Identifier returned by [`Observers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

type Callback = Box<dyn FnMut(&BoardEvent) + Send>;

/// Synchronous observer list.
///
/// Callbacks run in registration order, once per event. A callback only
/// receives the event; it has no handle to the board and cannot re-enter
/// a mutation.
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use queens_board::core::{BoardEvent, Observers, Side};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let mut observers = Observers::new();
///
/// let sink = Arc::clone(&seen);
/// observers.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
///
/// observers.notify_all(&[BoardEvent::Passed { side: Side::Red }]);
/// assert_eq!(seen.lock().unwrap().len(), 1);
/// ```
#[derive(Default)]
pub struct Observers {
    callbacks: Vec<(ObserverId, Callback)>,
    next_id: u32,
}

impl Observers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe(&mut self, callback: impl FnMut(&BoardEvent) + Send + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(cid, _)| *cid != id);
        self.callbacks.len() != before
    }

    /// Deliver one event to every callback.
    pub fn notify(&mut self, event: &BoardEvent) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }

    /// Deliver events in order.
    pub fn notify_all(&mut self, events: &[BoardEvent]) {
        for event in events {
            self.notify(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
