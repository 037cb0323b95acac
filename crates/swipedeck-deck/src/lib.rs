//! Swipeable card deck for chat previews.
//!
//! A fixed-size window of stacked, offset cards over an ordered list of
//! identifiers. The front card can be dragged; a release far enough to the
//! right dismisses it and reveals the next.
//!
//! # Components
//!
//! - [`CardStackController`] - resolves identifiers, mounts a sliding window
//!   of card content, and advances through it
//! - [`SwipeGestureInterpreter`] - turns drag events into live previews and a
//!   commit / snap-back decision
//!
//! # Collaborators
//!
//! The deck never renders anything itself. Hosts provide:
//!
//! - an [`EntityResolver`] (identifier → entity, may miss)
//! - a [`CardContentFactory`] (entity → mountable [`CardContent`])
//! - a [`DeckContainer`] (attaches, styles, and animates card views)
//!
//! # Threading
//!
//! Single-threaded. The controller is `!Send`; drive it from one task (a
//! `LocalSet` or a current-thread runtime). Resolutions fan out concurrently
//! inside `initialize`, which is the only `async` operation.

pub mod config;
pub mod constants;
pub mod container;
pub mod content;
pub mod error;
pub mod events;
pub mod gesture;
pub mod resolver;
pub mod stack;
pub mod transition;
pub mod visual;

pub use config::DeckConfig;
pub use container::{DeckContainer, NullContainer};
pub use content::{CardContent, CardContentFactory, CardKey, CardSlot};
pub use error::{ConfigError, DeckError, Result};
pub use events::{DeckEvent, LoadOutcome, StackSnapshot};
pub use gesture::{DragTransform, GestureOutcome, GesturePhase, SwipeGestureInterpreter, SwipeTarget};
pub use resolver::{EntityResolver, MemoryResolver};
pub use stack::CardStackController;
pub use transition::{Easing, Transition};
pub use visual::{CardVisual, stack_visual};
