//! ListCasesHandler - lists the caller's cases, newest first.

use std::sync::Arc;

use crate::domain::case::{Case, CaseError};
use crate::ports::{CaseRepository, UserDirectory};

/// Query for listing a user's cases.
#[derive(Debug, Clone)]
pub struct ListCasesQuery {
    /// Email identity of the authenticated caller.
    pub email: String,
}

/// Handler for listing cases.
pub struct ListCasesHandler {
    users: Arc<dyn UserDirectory>,
    cases: Arc<dyn CaseRepository>,
}

impl ListCasesHandler {
    pub fn new(users: Arc<dyn UserDirectory>, cases: Arc<dyn CaseRepository>) -> Self {
        Self { users, cases }
    }

    pub async fn handle(&self, query: ListCasesQuery) -> Result<Vec<Case>, CaseError> {
        let user = self
            .users
            .find_by_email(&query.email)
            .await?
            .ok_or(CaseError::UserNotFound)?;

        self.cases.find_by_user_id(user.id()).await
    }
}
