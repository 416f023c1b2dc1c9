//! Case repository port.

use async_trait::async_trait;

use crate::domain::case::{Case, CaseError};
use crate::domain::foundation::{CaseId, UserId};

/// Persistence contract for case aggregates.
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Inserts a newly created case.
    async fn save(&self, case: &Case) -> Result<(), CaseError>;

    /// Writes the case's mutable fields (status, solution, updated_at) in a
    /// single statement, so the completed-transition is atomic.
    ///
    /// Returns `NotFound` if the case no longer exists.
    async fn update(&self, case: &Case) -> Result<(), CaseError>;

    /// Fetches a case by id. Ownership is checked by the caller.
    async fn find_by_id(&self, id: &CaseId) -> Result<Option<Case>, CaseError>;

    /// Fetches all cases owned by a user, newest first.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Case>, CaseError>;

    /// Bumps a case's `updated_at` to the current time to record message
    /// activity.
    async fn touch(&self, id: &CaseId) -> Result<(), CaseError>;
}
