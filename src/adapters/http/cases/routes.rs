//! HTTP routes for case endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{append_message, create_case, get_case, list_cases, CaseHandlers};

/// Creates the case router with all endpoints.
pub fn case_routes(handlers: CaseHandlers) -> Router {
    Router::new()
        .route("/create", post(create_case))
        .route("/list", get(list_cases))
        .route("/:caseId", get(get_case))
        .route("/:caseId/message", post(append_message))
        .with_state(handlers)
}
