//! HTTP error mapping.
//!
//! Every failure leaves the API as `{"error": "<message>"}` with a non-2xx
//! status. Only the human-readable message crosses the boundary; generation
//! and infrastructure causes are logged here and never shown.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::case::CaseError;

/// The single error body shape of the API.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error body with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Wrapper turning domain errors into HTTP responses, so handlers can use
/// `?` on application results.
#[derive(Debug)]
pub struct ApiError(pub CaseError);

impl From<CaseError> for ApiError {
    fn from(err: CaseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CaseError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            CaseError::UserNotFound => StatusCode::NOT_FOUND,
            CaseError::NotFound(_) => StatusCode::NOT_FOUND,
            CaseError::InvalidState(_) => StatusCode::BAD_REQUEST,
            CaseError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CaseError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self.0 {
            CaseError::Generation(cause) => {
                tracing::error!(cause = %cause, "AI generation failed");
            }
            CaseError::Infrastructure(cause) => {
                tracing::error!(cause = %cause, "Internal error");
            }
            _ => {}
        }

        // Display impls hide internal causes; what they render is exactly
        // what the caller may see.
        (status, Json(ErrorResponse::new(self.0.to_string()))).into_response()
    }
}

/// Builds the 400 response for an unparseable case id in the path.
pub fn invalid_case_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("Invalid case ID")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CaseId;

    #[test]
    fn validation_maps_to_400() {
        let response = ApiError(CaseError::validation("title", "Title is required")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError(CaseError::NotFound(CaseId::new())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError(CaseError::UserNotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_state_maps_to_400() {
        let response =
            ApiError(CaseError::invalid_state("Cannot add messages to a completed case"))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn generation_and_infrastructure_map_to_500() {
        let response = ApiError(CaseError::generation("timeout")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError(CaseError::infrastructure("db down")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_serializes_to_single_field() {
        let json = serde_json::to_string(&ErrorResponse::new("Case not found")).unwrap();
        assert_eq!(json, r#"{"error":"Case not found"}"#);
    }
}
