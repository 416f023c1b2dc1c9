//! Message repository port.

use async_trait::async_trait;

use crate::domain::case::CaseError;
use crate::domain::conversation::Message;
use crate::domain::foundation::CaseId;

/// Persistence contract for conversation messages.
///
/// Messages are append-only; there is no update or delete.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Inserts a new message.
    async fn save(&self, message: &Message) -> Result<(), CaseError>;

    /// Fetches a case's messages ordered by creation time, oldest first.
    async fn find_by_case_id(&self, case_id: &CaseId) -> Result<Vec<Message>, CaseError>;
}
