//! Message entity for case conversations.
//!
//! Messages are immutable records of user/assistant exchanges within a case.
//! Within a case, messages are totally ordered by creation time and that
//! order is the transcript fed to the AI gateway.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::case::CaseError;
use crate::domain::foundation::{CaseId, MessageId, Timestamp, ValidationError};

/// Role of a message sender within a case conversation.
///
/// The system instruction is not a conversation role here - it travels
/// separately in the [`Transcript`](super::Transcript), so persisted
/// conversations can only ever contain user and assistant turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// A turn written by the case owner.
    User,
    /// A turn generated by the AI assistant.
    Assistant,
}

impl MessageRole {
    /// Returns the canonical storage string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }

    /// Returns the human-readable label used when rendering prompts.
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "User",
            MessageRole::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("Invalid message role: {}", other)),
        }
    }
}

/// A single immutable conversation turn belonging to a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    case_id: CaseId,
    role: MessageRole,
    content: String,
    created_at: Timestamp,
}

impl Message {
    /// Creates a new message with a server-assigned timestamp.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the content is empty
    pub fn new(
        id: MessageId,
        case_id: CaseId,
        role: MessageRole,
        content: String,
    ) -> Result<Self, CaseError> {
        if content.is_empty() {
            return Err(ValidationError::field("content", "Message cannot be empty").into());
        }

        Ok(Self {
            id,
            case_id,
            role,
            content,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a message from persistence (no validation).
    pub fn reconstitute(
        id: MessageId,
        case_id: CaseId,
        role: MessageRole,
        content: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            case_id,
            role,
            content,
            created_at,
        }
    }

    /// Returns the message ID.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the owning case's ID.
    pub fn case_id(&self) -> &CaseId {
        &self.case_id
    }

    /// Returns the sender role.
    pub fn role(&self) -> MessageRole {
        self.role
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the message was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_assigns_timestamp() {
        let before = Timestamp::now();
        let message = Message::new(
            MessageId::new(),
            CaseId::new(),
            MessageRole::User,
            "My landlord won't return my deposit".to_string(),
        )
        .unwrap();

        assert!(!message.created_at().is_before(&before));
        assert_eq!(message.role(), MessageRole::User);
    }

    #[test]
    fn new_message_rejects_empty_content() {
        let result = Message::new(
            MessageId::new(),
            CaseId::new(),
            MessageRole::User,
            String::new(),
        );
        assert!(matches!(result, Err(CaseError::ValidationFailed { .. })));
    }

    #[test]
    fn role_labels_match_prompt_convention() {
        assert_eq!(MessageRole::User.label(), "User");
        assert_eq!(MessageRole::Assistant.label(), "Assistant");
    }

    #[test]
    fn role_roundtrips_through_storage_string() {
        for role in [MessageRole::User, MessageRole::Assistant] {
            assert_eq!(role.as_str().parse::<MessageRole>().unwrap(), role);
        }
    }

    #[test]
    fn role_rejects_system_string() {
        assert!("system".parse::<MessageRole>().is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
