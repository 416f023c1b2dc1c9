//! HTTP routes for the session endpoint.

use axum::{routing::get, Router};

use super::handlers::{me, SessionHandlers};

/// Creates the session router.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new().route("/me", get(me)).with_state(handlers)
}
