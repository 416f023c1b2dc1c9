//! RequestSolutionHandler - generates the final solution document.
//!
//! One gateway call produces the solution; the case's solution field and its
//! completed status are written in a single repository update, then the
//! solution is appended to the transcript as an assistant message. A crash
//! between those two writes leaves a completed case whose transcript lacks
//! the final message - prior committed steps are never rolled back.

use std::sync::Arc;

use crate::domain::case::CaseError;
use crate::domain::conversation::{ChatEntry, Message, MessageRole, Transcript};
use crate::domain::foundation::{CaseId, MessageId};
use crate::domain::intake::SOLUTION_SYSTEM_PROMPT;
use crate::ports::{AiGateway, CaseRepository, MessageRepository, UserDirectory};

/// Command to generate the solution and complete the case.
#[derive(Debug, Clone)]
pub struct RequestSolutionCommand {
    /// Email identity of the authenticated caller.
    pub email: String,
    pub case_id: CaseId,
    /// Full conversation history, oldest first.
    pub history: Vec<ChatEntry>,
}

/// Result of a solution request.
#[derive(Debug, Clone)]
pub struct SolutionResult {
    pub solution: String,
}

/// Handler for solution requests.
pub struct RequestSolutionHandler {
    users: Arc<dyn UserDirectory>,
    cases: Arc<dyn CaseRepository>,
    messages: Arc<dyn MessageRepository>,
    gateway: Arc<dyn AiGateway>,
}

impl RequestSolutionHandler {
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

    pub async fn handle(&self, cmd: RequestSolutionCommand) -> Result<SolutionResult, CaseError> {
        let user = self
            .users
            .find_by_email(&cmd.email)
            .await?
            .ok_or(CaseError::UserNotFound)?;

        let mut case = self
            .cases
            .find_by_id(&cmd.case_id)
            .await?
            .filter(|c| c.is_owner(user.id()))
            .ok_or(CaseError::NotFound(cmd.case_id))?;

        case.ensure_active()?;

        let transcript = Transcript::new(SOLUTION_SYSTEM_PROMPT, cmd.history);
        let solution = self
            .gateway
            .generate(&transcript)
            .await
            .map_err(|e| CaseError::generation(e.to_string()))?;

        if solution.trim().is_empty() {
            return Err(CaseError::generation("model returned an empty solution"));
        }

        case.complete(solution.clone())?;
        self.cases.update(&case).await?;

        let message = Message::new(
            MessageId::new(),
            *case.id(),
            MessageRole::Assistant,
            solution.clone(),
        )?;
        self.messages.save(&message).await?;

        Ok(SolutionResult { solution })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAiGateway;
    use crate::adapters::memory::{
        InMemoryCaseRepository, InMemoryMessageRepository, InMemoryUserDirectory,
    };
    use crate::domain::case::{Case, CaseStatus};
    use crate::domain::foundation::{AuthenticatedIdentity, UserId};
    use crate::domain::user::UserProfile;
    use crate::ports::{AiError, CaseRepository as _};

    struct Fixture {
        handler: RequestSolutionHandler,
        cases: Arc<InMemoryCaseRepository>,
        messages: Arc<InMemoryMessageRepository>,
        gateway: MockAiGateway,
        case_id: CaseId,
    }

    async fn fixture(gateway: MockAiGateway, completed: bool) -> Fixture {
        let identity = AuthenticatedIdentity::new("alice@example.com", None, None, "google");
        let alice = UserProfile::from_identity(UserId::new(), &identity).unwrap();

        let cases = Arc::new(InMemoryCaseRepository::new());
        let mut case = Case::new(CaseId::new(), *alice.id(), "Deposit".to_string()).unwrap();
        if completed {
            case.complete("Earlier solution.".to_string()).unwrap();
        }
        cases.save(&case).await.unwrap();

        let messages = Arc::new(InMemoryMessageRepository::new());
        let users = Arc::new(InMemoryUserDirectory::new().with_profile(alice));

        Fixture {
            handler: RequestSolutionHandler::new(
                users,
                cases.clone(),
                messages.clone(),
                Arc::new(gateway.clone()),
            ),
            cases,
            messages,
            gateway,
            case_id: *case.id(),
        }
    }

    fn command(case_id: CaseId) -> RequestSolutionCommand {
        RequestSolutionCommand {
            email: "alice@example.com".to_string(),
            case_id,
            history: vec![
                ChatEntry::user("My landlord won't return my deposit"),
                ChatEntry::assistant("Which state are you in?"),
                ChatEntry::user("Maharashtra"),
            ],
        }
    }

    #[tokio::test]
    async fn solution_completes_case_and_appends_assistant_message() {
        let gateway = MockAiGateway::new().with_reply("# Legal Analysis & Solution\n...");
        let f = fixture(gateway, false).await;

        let result = f.handler.handle(command(f.case_id)).await.unwrap();
        assert_eq!(result.solution, "# Legal Analysis & Solution\n...");

        let stored = f.cases.find_by_id(&f.case_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), CaseStatus::Completed);
        assert_eq!(stored.solution(), Some("# Legal Analysis & Solution\n..."));

        let messages = f.messages.find_by_case_id(&f.case_id).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role(), MessageRole::Assistant);
        assert_eq!(messages[0].content(), result.solution);
    }

    #[tokio::test]
    async fn transcript_uses_the_solution_system_prompt() {
        let gateway = MockAiGateway::new().with_reply("The solution.");
        let f = fixture(gateway, false).await;

        f.handler.handle(command(f.case_id)).await.unwrap();

        let calls = f.gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system(), SOLUTION_SYSTEM_PROMPT);
        assert_eq!(calls[0].entries().len(), 3);
    }

    #[tokio::test]
    async fn gateway_failure_leaves_case_active_with_no_solution() {
        let gateway = MockAiGateway::new().with_error(AiError::provider(503, "overloaded"));
        let f = fixture(gateway, false).await;

        let result = f.handler.handle(command(f.case_id)).await;
        assert!(matches!(result, Err(CaseError::Generation(_))));

        let stored = f.cases.find_by_id(&f.case_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), CaseStatus::Active);
        assert!(stored.solution().is_none());
        assert!(f.messages.is_empty());
    }

    #[tokio::test]
    async fn blank_model_output_is_a_generation_failure() {
        let gateway = MockAiGateway::new().with_reply("   \n  ");
        let f = fixture(gateway, false).await;

        let result = f.handler.handle(command(f.case_id)).await;
        assert!(matches!(result, Err(CaseError::Generation(_))));

        let stored = f.cases.find_by_id(&f.case_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), CaseStatus::Active);
    }

    #[tokio::test]
    async fn completed_case_rejects_a_second_solution() {
        let gateway = MockAiGateway::new().with_reply("Should never be used");
        let f = fixture(gateway, true).await;

        let result = f.handler.handle(command(f.case_id)).await;

        assert!(matches!(result, Err(CaseError::InvalidState(_))));
        assert_eq!(f.gateway.call_count(), 0);

        let stored = f.cases.find_by_id(&f.case_id).await.unwrap().unwrap();
        assert_eq!(stored.solution(), Some("Earlier solution."));
    }
}
