//! HTTP handlers for the session endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::user::{EnsureUserCommand, EnsureUserHandler};

use super::dto::UserResponse;

/// Handler state for session endpoints.
#[derive(Clone)]
pub struct SessionHandlers {
    ensure_handler: Arc<EnsureUserHandler>,
}

impl SessionHandlers {
    pub fn new(ensure_handler: Arc<EnsureUserHandler>) -> Self {
        Self { ensure_handler }
    }
}

/// GET /api/auth/me - Current user's profile; creates the directory record
/// on first sign-in.
pub async fn me(
    State(handlers): State<SessionHandlers>,
    RequireAuth(identity): RequireAuth,
) -> Result<Json<UserResponse>, ApiError> {
    let profile = handlers
        .ensure_handler
        .handle(EnsureUserCommand { identity })
        .await?;

    Ok(Json(UserResponse::from(&profile)))
}
