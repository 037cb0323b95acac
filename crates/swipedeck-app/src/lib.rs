//! Headless host for the swipedeck card stack.
//!
//! - [`deck_file`] - RON deck files: config, known chats, load order, script
//! - [`host`] - tracing-backed card content and container, script replay

pub mod deck_file;
pub mod host;

pub use deck_file::{ChatEntry, DeckFile, DeckFileError, Step};
pub use host::{HeadlessDeck, LogContainer, PreviewCard, PreviewFactory, Report, Session, StepReport};
