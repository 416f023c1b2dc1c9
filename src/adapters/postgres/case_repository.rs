//! PostgreSQL implementation of CaseRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::str::FromStr;

use crate::domain::case::{Case, CaseError, CaseStatus};
use crate::domain::foundation::{CaseId, Timestamp, UserId};
use crate::ports::CaseRepository;

/// PostgreSQL implementation of CaseRepository.
#[derive(Clone)]
pub struct PostgresCaseRepository {
    pool: PgPool,
}

impl PostgresCaseRepository {
    /// Creates a new PostgresCaseRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CaseRepository for PostgresCaseRepository {
    async fn save(&self, case: &Case) -> Result<(), CaseError> {
        sqlx::query(
            r#"
            INSERT INTO cases (id, user_id, title, status, solution, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(case.id().as_uuid())
        .bind(case.user_id().as_uuid())
        .bind(case.title())
        .bind(case.status().as_str())
        .bind(case.solution())
        .bind(case.created_at().as_datetime())
        .bind(case.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| CaseError::infrastructure(format!("Failed to insert case: {}", e)))?;

        Ok(())
    }

    async fn update(&self, case: &Case) -> Result<(), CaseError> {
        // Status, solution, and updated_at land in one statement so the
        // completed-transition is never observable half-applied.
        let result = sqlx::query(
            r#"
            UPDATE cases SET
                status = $2,
                solution = $3,
                updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(case.id().as_uuid())
        .bind(case.status().as_str())
        .bind(case.solution())
        .bind(case.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| CaseError::infrastructure(format!("Failed to update case: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(CaseError::NotFound(*case.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &CaseId) -> Result<Option<Case>, CaseError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, title, status, solution, created_at, updated_at
            FROM cases
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CaseError::infrastructure(format!("Failed to fetch case: {}", e)))?;

        row.map(row_to_case).transpose()
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Case>, CaseError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, status, solution, created_at, updated_at
            FROM cases
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CaseError::infrastructure(format!("Failed to fetch cases by user: {}", e)))?;

        rows.into_iter().map(row_to_case).collect()
    }

    async fn touch(&self, id: &CaseId) -> Result<(), CaseError> {
        let result = sqlx::query("UPDATE cases SET updated_at = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(Timestamp::now().as_datetime())
            .execute(&self.pool)
            .await
            .map_err(|e| CaseError::infrastructure(format!("Failed to touch case: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(CaseError::NotFound(*id));
        }

        Ok(())
    }
}

fn row_to_case(row: sqlx::postgres::PgRow) -> Result<Case, CaseError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get id: {}", e)))?;

    let user_id: uuid::Uuid = row
        .try_get("user_id")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get user_id: {}", e)))?;

    let title: String = row
        .try_get("title")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get title: {}", e)))?;

    let status_str: String = row
        .try_get("status")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get status: {}", e)))?;
    let status = CaseStatus::from_str(&status_str).map_err(CaseError::infrastructure)?;

    let solution: Option<String> = row
        .try_get("solution")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get solution: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get created_at: {}", e)))?;

    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get updated_at: {}", e)))?;

    Ok(Case::reconstitute(
        CaseId::from_uuid(id),
        UserId::from_uuid(user_id),
        title,
        status,
        solution,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
