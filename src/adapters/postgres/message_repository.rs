//! PostgreSQL implementation of MessageRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::str::FromStr;

use crate::domain::case::CaseError;
use crate::domain::conversation::{Message, MessageRole};
use crate::domain::foundation::{CaseId, MessageId, Timestamp};
use crate::ports::MessageRepository;

/// PostgreSQL implementation of MessageRepository.
#[derive(Clone)]
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    /// Creates a new PostgresMessageRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn save(&self, message: &Message) -> Result<(), CaseError> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, case_id, role, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(message.id().as_uuid())
        .bind(message.case_id().as_uuid())
        .bind(message.role().as_str())
        .bind(message.content())
        .bind(message.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| CaseError::infrastructure(format!("Failed to insert message: {}", e)))?;

        Ok(())
    }

    async fn find_by_case_id(&self, case_id: &CaseId) -> Result<Vec<Message>, CaseError> {
        let rows = sqlx::query(
            r#"
            SELECT id, case_id, role, content, created_at
            FROM messages
            WHERE case_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(case_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            CaseError::infrastructure(format!("Failed to fetch messages by case: {}", e))
        })?;

        rows.into_iter().map(row_to_message).collect()
    }
}

fn row_to_message(row: sqlx::postgres::PgRow) -> Result<Message, CaseError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get id: {}", e)))?;

    let case_id: uuid::Uuid = row
        .try_get("case_id")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get case_id: {}", e)))?;

    let role_str: String = row
        .try_get("role")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get role: {}", e)))?;
    let role = MessageRole::from_str(&role_str).map_err(CaseError::infrastructure)?;

    let content: String = row
        .try_get("content")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get content: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get created_at: {}", e)))?;

    Ok(Message::reconstitute(
        MessageId::from_uuid(id),
        CaseId::from_uuid(case_id),
        role,
        content,
        Timestamp::from_datetime(created_at),
    ))
}
