//! RON deck files for the headless host.
//!
//! ```ron
//! (
//!     config: (window_size: 3),
//!     chats: [
//!         (handle: "alice", title: "Alice", last_message: Some("lunch?"), unread: 2),
//!         (handle: "bob", title: "Bob", latency_ms: Some(120)),
//!     ],
//!     order: ["alice", "ghost", "bob"],
//!     bounds: Some((origin: (x: 0.0, y: 0.0), width: 375.0, height: 667.0)),
//!     script: [DragStart(10.0, 300.0), DragMove(170.0, 310.0), DragEnd(170.0, 310.0)],
//! )
//! ```
//!
//! Handles map to [`ChatId::from_handle`], so `order` may name chats that are
//! not in `chats`; those simply never resolve.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use strum::Display;
use swipedeck_deck::{ConfigError, DeckConfig, MemoryResolver};
use swipedeck_types::{Bounds, ChatId, ChatPreview};

/// A known chat and how slowly it resolves.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatEntry {
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub unread: u32,
    /// Artificial resolve latency.
    #[serde(default)]
    pub latency_ms: Option<u64>,
}

impl ChatEntry {
    pub fn id(&self) -> ChatId {
        ChatId::from_handle(&self.handle)
    }

    pub fn preview(&self) -> ChatPreview {
        let preview = ChatPreview::new(self.id(), self.title.clone()).with_unread(self.unread);
        match &self.last_message {
            Some(text) => preview.with_last_message(text.clone()),
            None => preview,
        }
    }
}

/// One scripted input. Coordinates are container points.
#[derive(Debug, Clone, PartialEq, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Step {
    DragStart(f32, f32),
    DragMove(f32, f32),
    DragEnd(f32, f32),
    Cancel,
    /// Programmatic advance (e.g. a "skip" button).
    Advance,
    /// Let any snap-back finish.
    Settle,
    Layout(Bounds),
    /// Initialize again with the same order.
    Reload,
    Dispose,
}

/// A deck file: configuration, known chats, load order, and a script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeckFile {
    #[serde(default)]
    pub config: DeckConfig,
    #[serde(default)]
    pub chats: Vec<ChatEntry>,
    pub order: Vec<String>,
    #[serde(default)]
    pub bounds: Option<Bounds>,
    #[serde(default)]
    pub script: Vec<Step>,
}

/// Error type for deck file loading.
#[derive(Debug, thiserror::Error)]
pub enum DeckFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("chat handle listed twice: {0}")]
    DuplicateHandle(String),
}

impl DeckFile {
    pub fn from_ron_str(text: &str) -> Result<Self, DeckFileError> {
        let file: DeckFile = ron::from_str(text)?;
        file.validate()?;
        Ok(file)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeckFileError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn validate(&self) -> Result<(), DeckFileError> {
        self.config.validate()?;
        let mut seen = HashSet::new();
        for chat in &self.chats {
            if !seen.insert(chat.handle.as_str()) {
                return Err(DeckFileError::DuplicateHandle(chat.handle.clone()));
            }
        }
        Ok(())
    }

    /// Resolver over the known chats, with their latencies.
    pub fn resolver(&self) -> MemoryResolver<ChatId, ChatPreview> {
        let mut resolver = MemoryResolver::new();
        for chat in &self.chats {
            resolver.insert(chat.id(), chat.preview());
            if let Some(ms) = chat.latency_ms {
                resolver.set_latency(chat.id(), Duration::from_millis(ms));
            }
        }
        resolver
    }

    /// Load order as chat ids.
    pub fn order_ids(&self) -> Vec<ChatId> {
        self.order.iter().map(|h| ChatId::from_handle(h)).collect()
    }

    /// Title for `id`, or its short form when the chat is unknown.
    pub fn title_of(&self, id: ChatId) -> String {
        self.chats
            .iter()
            .find(|chat| chat.id() == id)
            .map(|chat| chat.title.clone())
            .unwrap_or_else(|| id.short())
    }
}
