//! Deck lifecycle events and load outcomes.

use serde::Serialize;

use crate::content::CardKey;

/// Events published on the deck's broadcast channel.
///
/// Subscribe via [`CardStackController::subscribe()`](crate::CardStackController::subscribe).
#[derive(Clone, Debug, PartialEq)]
pub enum DeckEvent<I> {
    /// Initial load joined and the first window is mounted.
    Loaded { cards: usize, missed: usize },
    /// The front card was advanced past.
    Advanced { id: I, front_index: usize },
    /// No cards remain (advanced past the last, or nothing resolved).
    Emptied,
    /// The deck was torn down.
    Disposed { unmounted: usize },
}

/// Result of [`CardStackController::initialize`](crate::CardStackController::initialize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// At least one identifier resolved; the window is mounted.
    Loaded { cards: usize, missed: usize },
    /// Every identifier missed; the deck is empty.
    Empty { missed: usize },
    /// No identifiers were supplied; nothing changed.
    Rejected,
    /// The deck was disposed or re-initialized before the lookups joined.
    Superseded,
}

/// Point-in-time view of the stack, for hosts and logs.
#[derive(Debug, Clone, PartialEq)]
pub struct StackSnapshot<I> {
    pub front_index: usize,
    pub backing_len: usize,
    /// Mounted cards, front first.
    pub window: Vec<(CardKey, I)>,
}
