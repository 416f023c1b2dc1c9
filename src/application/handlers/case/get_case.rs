//! GetCaseHandler - fetches one case with its ordered transcript.

use std::sync::Arc;

use crate::domain::case::{Case, CaseError};
use crate::domain::conversation::Message;
use crate::domain::foundation::CaseId;
use crate::ports::{CaseRepository, MessageRepository, UserDirectory};

/// Query for fetching a single case.
#[derive(Debug, Clone)]
pub struct GetCaseQuery {
    /// Email identity of the authenticated caller.
    pub email: String,
    pub case_id: CaseId,
}

/// A case together with its messages, oldest first.
#[derive(Debug, Clone)]
pub struct CaseDetail {
    pub case: Case,
    pub messages: Vec<Message>,
}

/// Handler for fetching case detail.
pub struct GetCaseHandler {
    users: Arc<dyn UserDirectory>,
    cases: Arc<dyn CaseRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl GetCaseHandler {
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

    pub async fn handle(&self, query: GetCaseQuery) -> Result<CaseDetail, CaseError> {
        let user = self
            .users
            .find_by_email(&query.email)
            .await?
            .ok_or(CaseError::UserNotFound)?;

        // An ownership mismatch reads as not-found so callers cannot probe
        // for the existence of other users' cases.
        let case = self
            .cases
            .find_by_id(&query.case_id)
            .await?
            .filter(|c| c.is_owner(user.id()))
            .ok_or(CaseError::NotFound(query.case_id))?;

        let messages = self.messages.find_by_case_id(case.id()).await?;

        Ok(CaseDetail { case, messages })
    }
}
