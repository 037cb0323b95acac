//! The visual container that hosts card views.
//!
//! The deck owns the container exclusively and is the only thing that
//! attaches, restyles, or removes card views. Animations requested through
//! it are fire-and-forget.

use crate::content::CardKey;
use crate::transition::Transition;
use crate::visual::CardVisual;

/// Host-side view container for the card stack.
pub trait DeckContainer {
    /// Create an empty view slot for a new card.
    fn attach(&mut self, key: CardKey);

    /// Set a card's visual immediately.
    fn apply(&mut self, key: CardKey, visual: &CardVisual);

    /// Animate a card towards `transition.target`.
    fn animate(&mut self, key: CardKey, transition: Transition);

    /// Play `exit` on a card, then remove its view.
    fn dismiss(&mut self, key: CardKey, exit: Transition);

    /// Remove a card's view without animation.
    fn detach(&mut self, key: CardKey);
}

/// Container for headless hosts: accepts and discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullContainer;

impl DeckContainer for NullContainer {
    fn attach(&mut self, _key: CardKey) {}

    fn apply(&mut self, _key: CardKey, _visual: &CardVisual) {}

    fn animate(&mut self, _key: CardKey, _transition: Transition) {}

    fn dismiss(&mut self, _key: CardKey, _exit: Transition) {}

    fn detach(&mut self, _key: CardKey) {}
}
