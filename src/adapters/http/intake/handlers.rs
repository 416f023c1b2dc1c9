//! HTTP handlers for intake endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::cases::MessageResponse;
use crate::adapters::http::error::{invalid_case_id, ApiError};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::intake::{
    RequestFollowUpCommand, RequestFollowUpHandler, RequestSolutionCommand,
    RequestSolutionHandler,
};
use crate::domain::foundation::CaseId;

use super::dto::{FollowUpRequest, FollowUpResponse, SolutionRequest, SolutionResponse};

/// Handler state for intake endpoints.
#[derive(Clone)]
pub struct IntakeHandlers {
    followup_handler: Arc<RequestFollowUpHandler>,
    solution_handler: Arc<RequestSolutionHandler>,
}

impl IntakeHandlers {
    pub fn new(
        followup_handler: Arc<RequestFollowUpHandler>,
        solution_handler: Arc<RequestSolutionHandler>,
    ) -> Self {
        Self {
            followup_handler,
            solution_handler,
        }
    }
}

/// POST /api/ai/followup - Solicit the next AI clarifying question
pub async fn request_followup(
    State(handlers): State<IntakeHandlers>,
    RequireAuth(identity): RequireAuth,
    Json(req): Json<FollowUpRequest>,
) -> Result<Response, ApiError> {
    let case_id = match req.case_id.parse::<CaseId>() {
        Ok(id) => id,
        Err(_) => return Ok(invalid_case_id()),
    };

    let result = handlers
        .followup_handler
        .handle(RequestFollowUpCommand {
            email: identity.email,
            case_id,
            history: req.messages.into_iter().map(Into::into).collect(),
        })
        .await?;

    let response = FollowUpResponse {
        message: MessageResponse::from(&result.message),
        ready_for_solution: result.ready_for_solution,
    };
    Ok(Json(response).into_response())
}

/// POST /api/ai/solution - Generate the solution and complete the case
pub async fn request_solution(
    State(handlers): State<IntakeHandlers>,
    RequireAuth(identity): RequireAuth,
    Json(req): Json<SolutionRequest>,
) -> Result<Response, ApiError> {
    let case_id = match req.case_id.parse::<CaseId>() {
        Ok(id) => id,
        Err(_) => return Ok(invalid_case_id()),
    };

    let result = handlers
        .solution_handler
        .handle(RequestSolutionCommand {
            email: identity.email,
            case_id,
            history: req.messages.into_iter().map(Into::into).collect(),
        })
        .await?;

    Ok(Json(SolutionResponse {
        solution: result.solution,
    })
    .into_response())
}
