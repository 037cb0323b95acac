//! Chat preview entity.

use serde::{Deserialize, Serialize};

use crate::ChatId;

/// A resolved chat, ready to be rendered as a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPreview {
    pub id: ChatId,
    pub title: String,
    /// Most recent message text, if the chat has any history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
    #[serde(default)]
    pub unread: u32,
}

impl ChatPreview {
    pub fn new(id: ChatId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            last_message: None,
            unread: 0,
        }
    }

    /// Set the most recent message.
    pub fn with_last_message(mut self, text: impl Into<String>) -> Self {
        self.last_message = Some(text.into());
        self
    }

    /// Set the unread counter.
    pub fn with_unread(mut self, unread: u32) -> Self {
        self.unread = unread;
        self
    }

    /// One-line summary used in logs and headless rendering.
    pub fn headline(&self) -> String {
        match (&self.last_message, self.unread) {
            (Some(msg), 0) => format!("{}: {msg}", self.title),
            (Some(msg), n) => format!("{} ({n} unread): {msg}", self.title),
            (None, _) => format!("{} (no messages)", self.title),
        }
    }
}
