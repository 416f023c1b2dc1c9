//! AppendMessageHandler - adds a user message to an active case.

use std::sync::Arc;

use crate::domain::case::CaseError;
use crate::domain::conversation::{Message, MessageRole};
use crate::domain::foundation::{CaseId, MessageId, ValidationError};
use crate::ports::{CaseRepository, MessageRepository, UserDirectory};

/// Command to append a user message to a case.
#[derive(Debug, Clone)]
pub struct AppendMessageCommand {
    /// Email identity of the authenticated caller.
    pub email: String,
    pub case_id: CaseId,
    pub content: String,
}

/// Handler for appending user messages.
pub struct AppendMessageHandler {
    users: Arc<dyn UserDirectory>,
    cases: Arc<dyn CaseRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl AppendMessageHandler {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        cases: Arc<dyn CaseRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            users,
            cases,
            messages,
        }
    }

    pub async fn handle(&self, cmd: AppendMessageCommand) -> Result<Message, CaseError> {
        if cmd.content.is_empty() {
            return Err(ValidationError::field("content", "Message cannot be empty").into());
        }

        let user = self
            .users
            .find_by_email(&cmd.email)
            .await?
            .ok_or(CaseError::UserNotFound)?;

        let case = self
            .cases
            .find_by_id(&cmd.case_id)
            .await?
            .filter(|c| c.is_owner(user.id()))
            .ok_or(CaseError::NotFound(cmd.case_id))?;

        case.ensure_accepts_messages()?;

        let message = Message::new(MessageId::new(), *case.id(), MessageRole::User, cmd.content)?;
        self.messages.save(&message).await?;
        self.cases.touch(case.id()).await?;

        Ok(message)
    }
}
