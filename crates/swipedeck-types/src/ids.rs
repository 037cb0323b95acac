//! Typed chat identifiers.
//!
//! `ChatId` wraps a UUID. Fresh ids are UUIDv7 (time-ordered); ids derived
//! from a human handle are UUIDv5 so the same handle always maps to the same
//! chat. The `short()` form (first 8 hex chars) is for logs and UI only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Namespace for handle-derived chat ids.
const CHAT_NAMESPACE: uuid::Uuid = uuid::Uuid::from_bytes([
    0x6b, 0x61, 0x72, 0x64, 0x73, 0x77, 0x69, 0x70, 0x65, 0x64, 0x65, 0x63, 0x6b, 0x2d, 0x69, 0x64,
]);

/// A chat identifier (UUIDv7, or UUIDv5 when derived from a handle).
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(uuid::Uuid);

impl ChatId {
    /// Create a new time-ordered id.
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Deterministic id for a chat handle such as `"alice"`.
    pub fn from_handle(handle: &str) -> Self {
        Self(uuid::Uuid::new_v5(&CHAT_NAMESPACE, handle.as_bytes()))
    }

    /// First 8 hex characters, for display only.
    pub fn short(&self) -> String {
        self.0.as_simple().to_string()[..8].to_string()
    }

    /// Parse from a hex string (32 chars, no hyphens) or standard UUID format.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}

impl Default for ChatId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<uuid::Uuid> for ChatId {
    fn from(u: uuid::Uuid) -> Self {
        Self(u)
    }
}

impl From<ChatId> for uuid::Uuid {
    fn from(id: ChatId) -> uuid::Uuid {
        id.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChatId({})", self.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_handle_is_deterministic() {
        assert_eq!(ChatId::from_handle("alice"), ChatId::from_handle("alice"));
        assert_ne!(ChatId::from_handle("alice"), ChatId::from_handle("bob"));
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(ChatId::new(), ChatId::new());
    }

    #[test]
    fn test_short_and_parse() {
        let id = ChatId::from_handle("carol");
        assert_eq!(id.short().len(), 8);
        assert_eq!(ChatId::parse(&id.to_string()).unwrap(), id);
        assert!(ChatId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = ChatId::from_handle("dave");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
