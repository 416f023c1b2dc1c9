//! HTTP routes for intake endpoints.

use axum::{routing::post, Router};

use super::handlers::{request_followup, request_solution, IntakeHandlers};

/// Creates the intake router with all endpoints.
pub fn intake_routes(handlers: IntakeHandlers) -> Router {
    Router::new()
        .route("/followup", post(request_followup))
        .route("/solution", post(request_solution))
        .with_state(handlers)
}
