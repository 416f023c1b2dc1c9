//! Explicit schema definitions, applied once at startup.
//!
//! All tables and indexes are declared here and created by the composition
//! root before the server accepts traffic. Nothing registers schema lazily
//! per call.

use sqlx::PgPool;

/// DDL statements, in dependency order.
const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id          UUID PRIMARY KEY,
        email       TEXT NOT NULL UNIQUE,
        name        TEXT NOT NULL,
        avatar_url  TEXT,
        provider    TEXT NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS cases (
        id          UUID PRIMARY KEY,
        user_id     UUID NOT NULL REFERENCES users(id),
        title       TEXT NOT NULL,
        status      TEXT NOT NULL,
        solution    TEXT,
        created_at  TIMESTAMPTZ NOT NULL,
        updated_at  TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS messages (
        id          UUID PRIMARY KEY,
        case_id     UUID NOT NULL REFERENCES cases(id),
        role        TEXT NOT NULL,
        content     TEXT NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL
    )
    "#,
    // Listing is always per-user, newest first.
    "CREATE INDEX IF NOT EXISTS idx_cases_user_created ON cases (user_id, created_at DESC)",
    // Transcripts are always per-case, oldest first.
    "CREATE INDEX IF NOT EXISTS idx_messages_case_created ON messages (case_id, created_at)",
];

/// Creates all tables and indexes if they do not already exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
