//! HTTP DTOs for case endpoints.
//!
//! Field names are camelCase on the wire, decoupled from domain naming.

use serde::{Deserialize, Serialize};

use crate::domain::case::{Case, CaseStatus};
use crate::domain::conversation::{Message, MessageRole};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new case.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    pub title: String,
    pub initial_message: String,
}

/// Request to append a user message to a case.
#[derive(Debug, Clone, Deserialize)]
pub struct AppendMessageRequest {
    pub content: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for case creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseResponse {
    pub case_id: String,
}

/// Case summary for list responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummaryResponse {
    pub id: String,
    pub title: String,
    pub status: CaseStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Case> for CaseSummaryResponse {
    fn from(case: &Case) -> Self {
        Self {
            id: case.id().to_string(),
            title: case.title().to_string(),
            status: case.status(),
            created_at: case.created_at().to_rfc3339(),
            updated_at: case.updated_at().to_rfc3339(),
        }
    }
}

/// List of the caller's cases, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct CaseListResponse {
    pub cases: Vec<CaseSummaryResponse>,
}

/// Detailed case view including the solution once completed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseResponse {
    pub id: String,
    pub title: String,
    pub status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Case> for CaseResponse {
    fn from(case: &Case) -> Self {
        Self {
            id: case.id().to_string(),
            title: case.title().to_string(),
            status: case.status(),
            solution: case.solution().map(str::to_string),
            created_at: case.created_at().to_rfc3339(),
            updated_at: case.updated_at().to_rfc3339(),
        }
    }
}

/// A single stored conversation message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: String,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            role: message.role(),
            content: message.content().to_string(),
            created_at: message.created_at().to_rfc3339(),
        }
    }
}

/// Case detail plus its ordered transcript.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetailResponse {
    pub case: CaseResponse,
    pub messages: Vec<MessageResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CaseId, UserId};

    #[test]
    fn create_request_reads_camel_case_fields() {
        let json = r#"{"title": "Rent Dispute", "initialMessage": "My landlord kept my deposit"}"#;
        let request: CreateCaseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "Rent Dispute");
        assert_eq!(request.initial_message, "My landlord kept my deposit");
    }

    #[test]
    fn create_response_writes_camel_case_case_id() {
        let json = serde_json::to_string(&CreateCaseResponse {
            case_id: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"caseId":"abc"}"#);
    }

    #[test]
    fn case_summary_carries_status_and_timestamps() {
        let case = Case::new(CaseId::new(), UserId::new(), "Rent Dispute".to_string()).unwrap();
        let summary = CaseSummaryResponse::from(&case);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["status"], "active");
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
    }

    #[test]
    fn case_response_omits_missing_solution() {
        let case = Case::new(CaseId::new(), UserId::new(), "Rent Dispute".to_string()).unwrap();
        let json = serde_json::to_value(CaseResponse::from(&case)).unwrap();
        assert!(json.get("solution").is_none());
    }

    #[test]
    fn case_response_includes_solution_when_completed() {
        let mut case = Case::new(CaseId::new(), UserId::new(), "Rent Dispute".to_string()).unwrap();
        case.complete("The solution.".to_string()).unwrap();

        let json = serde_json::to_value(CaseResponse::from(&case)).unwrap();
        assert_eq!(json["solution"], "The solution.");
        assert_eq!(json["status"], "completed");
    }
}
