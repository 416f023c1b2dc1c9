//! HTTP handlers for case endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{invalid_case_id, ApiError};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::case::{
    AppendMessageCommand, AppendMessageHandler, CreateCaseCommand, CreateCaseHandler,
    GetCaseHandler, GetCaseQuery, ListCasesHandler, ListCasesQuery,
};
use crate::domain::foundation::CaseId;

use super::dto::{
    AppendMessageRequest, CaseDetailResponse, CaseListResponse, CaseResponse,
    CaseSummaryResponse, CreateCaseRequest, CreateCaseResponse, MessageResponse,
};

/// Handler state for case endpoints.
#[derive(Clone)]
pub struct CaseHandlers {
    create_handler: Arc<CreateCaseHandler>,
    list_handler: Arc<ListCasesHandler>,
    get_handler: Arc<GetCaseHandler>,
    append_handler: Arc<AppendMessageHandler>,
}

impl CaseHandlers {
    pub fn new(
        create_handler: Arc<CreateCaseHandler>,
        list_handler: Arc<ListCasesHandler>,
        get_handler: Arc<GetCaseHandler>,
        append_handler: Arc<AppendMessageHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            append_handler,
        }
    }
}

/// POST /api/cases/create - Open a new case with its initial message
pub async fn create_case(
    State(handlers): State<CaseHandlers>,
    RequireAuth(identity): RequireAuth,
    Json(req): Json<CreateCaseRequest>,
) -> Result<Response, ApiError> {
    let cmd = CreateCaseCommand {
        email: identity.email,
        title: req.title,
        initial_message: req.initial_message,
    };

    let result = handlers.create_handler.handle(cmd).await?;

    let response = CreateCaseResponse {
        case_id: result.case.id().to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// GET /api/cases/list - List the caller's cases, newest first
pub async fn list_cases(
    State(handlers): State<CaseHandlers>,
    RequireAuth(identity): RequireAuth,
) -> Result<Json<CaseListResponse>, ApiError> {
    let cases = handlers
        .list_handler
        .handle(ListCasesQuery {
            email: identity.email,
        })
        .await?;

    Ok(Json(CaseListResponse {
        cases: cases.iter().map(CaseSummaryResponse::from).collect(),
    }))
}

/// GET /api/cases/:caseId - Case detail with ordered transcript
pub async fn get_case(
    State(handlers): State<CaseHandlers>,
    RequireAuth(identity): RequireAuth,
    Path(case_id): Path<String>,
) -> Result<Response, ApiError> {
    let case_id = match case_id.parse::<CaseId>() {
        Ok(id) => id,
        Err(_) => return Ok(invalid_case_id()),
    };

    let detail = handlers
        .get_handler
        .handle(GetCaseQuery {
            email: identity.email,
            case_id,
        })
        .await?;

    let response = CaseDetailResponse {
        case: CaseResponse::from(&detail.case),
        messages: detail.messages.iter().map(MessageResponse::from).collect(),
    };
    Ok(Json(response).into_response())
}

/// POST /api/cases/:caseId/message - Append a user message
pub async fn append_message(
    State(handlers): State<CaseHandlers>,
    RequireAuth(identity): RequireAuth,
    Path(case_id): Path<String>,
    Json(req): Json<AppendMessageRequest>,
) -> Result<Response, ApiError> {
    let case_id = match case_id.parse::<CaseId>() {
        Ok(id) => id,
        Err(_) => return Ok(invalid_case_id()),
    };

    let message = handlers
        .append_handler
        .handle(AppendMessageCommand {
            email: identity.email,
            case_id,
            content: req.content,
        })
        .await?;

    Ok(Json(MessageResponse::from(&message)).into_response())
}
