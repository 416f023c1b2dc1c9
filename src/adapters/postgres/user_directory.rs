//! PostgreSQL implementation of UserDirectory.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::case::CaseError;
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::user::UserProfile;
use crate::ports::UserDirectory;

/// PostgreSQL implementation of UserDirectory.
#[derive(Clone)]
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    /// Creates a new PostgresUserDirectory.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, CaseError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, name, avatar_url, provider, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CaseError::infrastructure(format!("Failed to fetch user: {}", e)))?;

        row.map(row_to_profile).transpose()
    }

    async fn upsert_by_email(&self, profile: &UserProfile) -> Result<UserProfile, CaseError> {
        // The no-op DO UPDATE makes RETURNING yield the existing row on
        // conflict, so concurrent first sign-ins converge on one record.
        let row = sqlx::query(
            r#"
            INSERT INTO users (id, email, name, avatar_url, provider, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
            RETURNING id, email, name, avatar_url, provider, created_at
            "#,
        )
        .bind(profile.id().as_uuid())
        .bind(profile.email())
        .bind(profile.name())
        .bind(profile.avatar_url())
        .bind(profile.provider())
        .bind(profile.created_at().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CaseError::infrastructure(format!("Failed to upsert user: {}", e)))?;

        row_to_profile(row)
    }
}

fn row_to_profile(row: sqlx::postgres::PgRow) -> Result<UserProfile, CaseError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get id: {}", e)))?;

    let email: String = row
        .try_get("email")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get email: {}", e)))?;

    let name: String = row
        .try_get("name")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get name: {}", e)))?;

    let avatar_url: Option<String> = row
        .try_get("avatar_url")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get avatar_url: {}", e)))?;

    let provider: String = row
        .try_get("provider")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get provider: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| CaseError::infrastructure(format!("Failed to get created_at: {}", e)))?;

    Ok(UserProfile::reconstitute(
        UserId::from_uuid(id),
        email,
        name,
        avatar_url,
        provider,
        Timestamp::from_datetime(created_at),
    ))
}
