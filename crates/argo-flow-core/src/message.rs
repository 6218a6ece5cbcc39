//! Chat messages and the append-only message store.

use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::time::SystemTime;
#[cfg(target_arch = "wasm32")]
use web_time::SystemTime;

fn now() -> SystemTime {
    SystemTime::now()
}

/// A single chat message. Immutable once created; lifetime is the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier within the store.
    pub id: String,
    /// Raw message text. Blank content is legal and carried through as-is.
    pub content: String,
    /// True for user submissions, false for assistant replies.
    pub is_user: bool,
    /// Creation time.
    #[serde(skip, default = "now")]
    pub timestamp: SystemTime,
}

/// Ordered, append-only sequence of chat messages.
///
/// Messages are never mutated or deleted. Consumers detect change through
/// [`MessageStore::revision`], which increments on every append.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageStore {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message and return a reference to it.
    pub fn push_user(&mut self, content: impl Into<String>) -> &Message {
        self.push(content.into(), true)
    }

    /// Append an assistant message and return a reference to it.
    pub fn push_assistant(&mut self, content: impl Into<String>) -> &Message {
        self.push(content.into(), false)
    }

    fn push(&mut self, content: String, is_user: bool) -> &Message {
        self.next_id += 1;
        self.messages.push(Message {
            id: self.next_id.to_string(),
            content,
            is_user,
            timestamp: now(),
        });
        self.messages.last().expect("just pushed")
    }

    /// Ordered read view of all messages.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages appended so far.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if no message has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Monotonic counter that changes exactly when the store changes.
    pub fn revision(&self) -> u64 {
        self.next_id
    }
}
