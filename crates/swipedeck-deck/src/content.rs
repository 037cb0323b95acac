//! Card content: the heavyweight, stateful unit each card displays.
//!
//! The deck never looks inside content. It builds one per card through a
//! [`CardContentFactory`], hands it a [`CardSlot`] on mount, forwards layout,
//! and calls `unmount` exactly once when the card leaves the window.

use std::fmt;

use swipedeck_types::Bounds;

/// Unique key for one mounted card.
///
/// Keys are never reused within a deck, so two cards for the same identifier
/// stay distinguishable.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct CardKey(pub(crate) u64);

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// Where a content unit is being mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot {
    pub key: CardKey,
    /// Last bounds the host reported, if any.
    pub bounds: Option<Bounds>,
}

/// Lifecycle hooks of a mounted card's content.
pub trait CardContent {
    /// Attach to the container slot the deck created for this card.
    fn mount(&mut self, slot: CardSlot);

    /// Container bounds changed.
    fn layout(&mut self, bounds: Bounds);

    /// Tear down internal state. Called at most once per content.
    fn unmount(&mut self);
}

/// Builds card content for a resolved entity.
pub trait CardContentFactory {
    type Entity;
    type Content: CardContent;

    fn build(&self, entity: &Self::Entity) -> Self::Content;
}
