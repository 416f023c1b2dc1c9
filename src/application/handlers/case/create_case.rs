//! CreateCaseHandler - opens a new case with its initial problem description.

use std::sync::Arc;

use crate::domain::case::{Case, CaseError, MIN_INITIAL_MESSAGE_LENGTH};
use crate::domain::conversation::{Message, MessageRole};
use crate::domain::foundation::{CaseId, MessageId};
use crate::ports::{CaseRepository, MessageRepository, UserDirectory};

/// Command to create a new case.
#[derive(Debug, Clone)]
pub struct CreateCaseCommand {
    /// Email identity of the authenticated caller.
    pub email: String,
    pub title: String,
    pub initial_message: String,
}

/// Result of successful case creation.
#[derive(Debug, Clone)]
pub struct CreateCaseResult {
    pub case: Case,
    pub initial_message: Message,
}

/// Handler for creating cases.
pub struct CreateCaseHandler {
    users: Arc<dyn UserDirectory>,
    cases: Arc<dyn CaseRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl CreateCaseHandler {
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

    pub async fn handle(&self, cmd: CreateCaseCommand) -> Result<CreateCaseResult, CaseError> {
        // Validation first, in schema field order: nothing is persisted on a
        // bad request and the first offending field is the one reported.
        Case::validate_title(&cmd.title)?;
        if cmd.initial_message.chars().count() < MIN_INITIAL_MESSAGE_LENGTH {
            return Err(CaseError::validation(
                "initialMessage",
                format!(
                    "Please describe your legal issue in at least {} characters",
                    MIN_INITIAL_MESSAGE_LENGTH
                ),
            ));
        }

        let user = self
            .users
            .find_by_email(&cmd.email)
            .await?
            .ok_or(CaseError::UserNotFound)?;

        let case = Case::new(CaseId::new(), *user.id(), cmd.title)?;
        self.cases.save(&case).await?;

        let initial_message = Message::new(
            MessageId::new(),
            *case.id(),
            MessageRole::User,
            cmd.initial_message,
        )?;
        self.messages.save(&initial_message).await?;

        Ok(CreateCaseResult {
            case,
            initial_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryCaseRepository, InMemoryMessageRepository, InMemoryUserDirectory,
    };
    use crate::domain::case::CaseStatus;
    use crate::domain::foundation::{AuthenticatedIdentity, UserId};
    use crate::domain::user::UserProfile;

    fn seeded_directory(email: &str) -> InMemoryUserDirectory {
        let identity = AuthenticatedIdentity::new(email, None, None, "google");
        let profile = UserProfile::from_identity(UserId::new(), &identity).unwrap();
        InMemoryUserDirectory::new().with_profile(profile)
    }

    fn handler_with(
        users: InMemoryUserDirectory,
    ) -> (
        CreateCaseHandler,
        Arc<InMemoryCaseRepository>,
        Arc<InMemoryMessageRepository>,
    ) {
        let cases = Arc::new(InMemoryCaseRepository::new());
        let messages = Arc::new(InMemoryMessageRepository::new());
        let handler = CreateCaseHandler::new(Arc::new(users), cases.clone(), messages.clone());
        (handler, cases, messages)
    }

    fn command(email: &str) -> CreateCaseCommand {
        CreateCaseCommand {
            email: email.to_string(),
            title: "Rent Dispute".to_string(),
            initial_message: "My landlord won't return my deposit of ₹20,000".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_active_case_with_initial_user_message() {
        let (handler, cases, messages) = handler_with(seeded_directory("alice@example.com"));

        let result = handler.handle(command("alice@example.com")).await.unwrap();

        assert_eq!(result.case.status(), CaseStatus::Active);
        assert!(result.case.solution().is_none());
        assert_eq!(result.initial_message.role(), MessageRole::User);
        assert_eq!(cases.len(), 1);
        assert_eq!(messages.len(), 1);
    }

    #[tokio::test]
    async fn rejects_short_initial_message_without_persisting() {
        let (handler, cases, messages) = handler_with(seeded_directory("alice@example.com"));

        let cmd = CreateCaseCommand {
            initial_message: "too short".to_string(),
            ..command("alice@example.com")
        };
        let result = handler.handle(cmd).await;

        assert!(
            matches!(result, Err(CaseError::ValidationFailed { ref field, .. }) if field == "initialMessage")
        );
        assert!(cases.is_empty());
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn rejects_empty_title_without_persisting() {
        let (handler, cases, _) = handler_with(seeded_directory("alice@example.com"));

        let cmd = CreateCaseCommand {
            title: "  ".to_string(),
            ..command("alice@example.com")
        };
        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(CaseError::ValidationFailed { .. })));
        assert!(cases.is_empty());
    }

    #[tokio::test]
    async fn unknown_identity_is_user_not_found() {
        let (handler, _, _) = handler_with(InMemoryUserDirectory::new());

        let result = handler.handle(command("stranger@example.com")).await;
        assert!(matches!(result, Err(CaseError::UserNotFound)));
    }
}
