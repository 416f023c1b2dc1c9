//! RequestFollowUpHandler - solicits the next AI clarifying question.
//!
//! The caller supplies the full message history; the handler prepends the
//! follow-up system instruction, invokes the gateway once, and scans the
//! reply for the readiness sentinel. On gateway failure nothing is
//! persisted. Requests are not deduplicated: two concurrent follow-ups for
//! the same case can both store an assistant message.

use std::sync::Arc;

use crate::domain::case::CaseError;
use crate::domain::conversation::{ChatEntry, Message, MessageRole, Transcript};
use crate::domain::foundation::{CaseId, MessageId};
use crate::domain::intake::{FollowUpReply, FOLLOWUP_SYSTEM_PROMPT};
use crate::ports::{AiGateway, CaseRepository, MessageRepository, UserDirectory};

/// Command to request the next follow-up question.
#[derive(Debug, Clone)]
pub struct RequestFollowUpCommand {
    /// Email identity of the authenticated caller.
    pub email: String,
    pub case_id: CaseId,
    /// Full conversation history, oldest first.
    pub history: Vec<ChatEntry>,
}

/// Result of a follow-up request.
#[derive(Debug, Clone)]
pub struct FollowUpResult {
    /// The stored assistant message (the fixed notice when ready).
    pub message: Message,
    /// True when the model signalled it has enough information.
    pub ready_for_solution: bool,
}

/// Handler for follow-up requests.
pub struct RequestFollowUpHandler {
    users: Arc<dyn UserDirectory>,
    cases: Arc<dyn CaseRepository>,
    messages: Arc<dyn MessageRepository>,
    gateway: Arc<dyn AiGateway>,
}

impl RequestFollowUpHandler {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        cases: Arc<dyn CaseRepository>,
        messages: Arc<dyn MessageRepository>,
        gateway: Arc<dyn AiGateway>,
    ) -> Self {
        Self {
            users,
            cases,
            messages,
            gateway,
        }
    }

    pub async fn handle(&self, cmd: RequestFollowUpCommand) -> Result<FollowUpResult, CaseError> {
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

        case.ensure_active()?;

        let transcript = Transcript::new(FOLLOWUP_SYSTEM_PROMPT, cmd.history);
        let raw = self
            .gateway
            .generate(&transcript)
            .await
            .map_err(|e| CaseError::generation(e.to_string()))?;

        let reply = FollowUpReply::interpret(raw);
        let message = Message::new(
            MessageId::new(),
            *case.id(),
            MessageRole::Assistant,
            reply.persisted_content().to_string(),
        )?;
        self.messages.save(&message).await?;
        self.cases.touch(case.id()).await?;

        Ok(FollowUpResult {
            message,
            ready_for_solution: reply.is_ready(),
        })
    }
}
