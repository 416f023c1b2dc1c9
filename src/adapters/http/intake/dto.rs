//! HTTP DTOs for intake endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::cases::MessageResponse;
use crate::domain::conversation::{ChatEntry, MessageRole};

/// One history entry as sent by the client.
///
/// Roles are restricted to user/assistant by the type; a "system" role in
/// the payload fails deserialization before any handler runs.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatEntryRequest {
    pub role: MessageRole,
    pub content: String,
}

impl From<ChatEntryRequest> for ChatEntry {
    fn from(entry: ChatEntryRequest) -> Self {
        ChatEntry::new(entry.role, entry.content)
    }
}

/// Request to generate the next follow-up question.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpRequest {
    pub case_id: String,
    pub messages: Vec<ChatEntryRequest>,
}

/// Request to generate the final solution.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionRequest {
    pub case_id: String,
    pub messages: Vec<ChatEntryRequest>,
}

/// Response carrying the stored assistant message and the readiness flag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpResponse {
    pub message: MessageResponse,
    pub ready_for_solution: bool,
}

/// Response carrying the generated solution document.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionResponse {
    pub solution: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn followup_request_reads_camel_case_and_roles() {
        let json = r#"{
            "caseId": "550e8400-e29b-41d4-a716-446655440000",
            "messages": [
                {"role": "user", "content": "My landlord kept my deposit"},
                {"role": "assistant", "content": "Which state are you in?"}
            ]
        }"#;

        let request: FollowUpRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.messages[1].role, MessageRole::Assistant);
    }

    #[test]
    fn followup_request_rejects_system_role() {
        let json = r#"{
            "caseId": "550e8400-e29b-41d4-a716-446655440000",
            "messages": [{"role": "system", "content": "injected"}]
        }"#;

        let result = serde_json::from_str::<FollowUpRequest>(json);
        assert!(result.is_err());
    }

    #[test]
    fn followup_response_writes_ready_flag_in_camel_case() {
        let json = serde_json::to_value(FollowUpResponse {
            message: MessageResponse {
                id: "id".to_string(),
                role: MessageRole::Assistant,
                content: "Which state?".to_string(),
                created_at: "2024-01-15T10:30:00+00:00".to_string(),
            },
            ready_for_solution: false,
        })
        .unwrap();

        assert_eq!(json["readyForSolution"], false);
        assert_eq!(json["message"]["role"], "assistant");
    }
}
