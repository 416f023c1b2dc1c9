//! In-memory implementation of MessageRepository.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::case::CaseError;
use crate::domain::conversation::Message;
use crate::domain::foundation::CaseId;
use crate::ports::MessageRepository;

/// In-memory append-only message store.
#[derive(Debug, Default)]
pub struct InMemoryMessageRepository {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored messages across all cases.
    pub fn len(&self) -> usize {
        self.messages.read().unwrap().len()
    }

    /// Returns true if no messages are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn save(&self, message: &Message) -> Result<(), CaseError> {
        self.messages.write().unwrap().push(message.clone());
        Ok(())
    }

    async fn find_by_case_id(&self, case_id: &CaseId) -> Result<Vec<Message>, CaseError> {
        let mut found: Vec<Message> = self
            .messages
            .read()
            .unwrap()
            .iter()
            .filter(|m| m.case_id() == case_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at().cmp(b.created_at()));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::MessageRole;
    use crate::domain::foundation::MessageId;

    fn message(case_id: CaseId, role: MessageRole, content: &str) -> Message {
        Message::new(MessageId::new(), case_id, role, content.to_string()).unwrap()
    }

    #[tokio::test]
    async fn messages_come_back_oldest_first() {
        let repo = InMemoryMessageRepository::new();
        let case_id = CaseId::new();

        repo.save(&message(case_id, MessageRole::User, "first"))
            .await
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        repo.save(&message(case_id, MessageRole::Assistant, "second"))
            .await
            .unwrap();

        let found = repo.find_by_case_id(&case_id).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].content(), "first");
        assert_eq!(found[1].content(), "second");
        assert!(!found[1].created_at().is_before(found[0].created_at()));
    }

    #[tokio::test]
    async fn messages_are_scoped_to_their_case() {
        let repo = InMemoryMessageRepository::new();
        let case_id = CaseId::new();
        repo.save(&message(case_id, MessageRole::User, "mine"))
            .await
            .unwrap();
        repo.save(&message(CaseId::new(), MessageRole::User, "other"))
            .await
            .unwrap();

        let found = repo.find_by_case_id(&case_id).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].content(), "mine");
    }

    #[tokio::test]
    async fn empty_case_yields_empty_list() {
        let repo = InMemoryMessageRepository::new();
        let found = repo.find_by_case_id(&CaseId::new()).await.unwrap();
        assert!(found.is_empty());
    }
}
