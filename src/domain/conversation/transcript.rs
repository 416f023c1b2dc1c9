//! Transcript - the ordered conversation handed to the AI gateway.

use serde::{Deserialize, Serialize};

use super::{Message, MessageRole};

/// A single role-tagged entry of a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub role: MessageRole,
    pub content: String,
}

impl ChatEntry {
    /// Creates a new entry.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user entry.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Creates an assistant entry.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

impl From<&Message> for ChatEntry {
    fn from(message: &Message) -> Self {
        Self::new(message.role(), message.content())
    }
}

/// The full input to one AI generation: a system instruction followed by the
/// conversation history, oldest first. Entry order is preserved verbatim -
/// the transcript never reorders or rewrites what it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    system: String,
    entries: Vec<ChatEntry>,
}

impl Transcript {
    /// Assembles a transcript from a system instruction and prior history.
    pub fn new(system: impl Into<String>, entries: Vec<ChatEntry>) -> Self {
        Self {
            system: system.into(),
            entries,
        }
    }

    /// Returns the system instruction.
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Returns the conversation entries, oldest first.
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }
}
