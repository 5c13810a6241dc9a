//! HTTP DTOs for conversation endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{GetHistoryResult, ProcessMessageResult, StartConversationResult};
use crate::domain::conversation::{ChatMessage, DialogueStep, Speaker};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a conversation. The body is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartConversationRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// A user message.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct StartConversationResponse {
    pub session_id: String,
    pub message: String,
    pub state: DialogueStep,
}

impl From<StartConversationResult> for StartConversationResponse {
    fn from(result: StartConversationResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            message: result.message,
            state: result.state,
        }
    }
}

/// Bot reply to one user message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
    pub state: DialogueStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_code: Option<String>,
}

impl From<ProcessMessageResult> for MessageResponse {
    fn from(result: ProcessMessageResult) -> Self {
        Self {
            message: result.message,
            state: result.state,
            form_id: result.form_id.map(|id| id.value()),
            embed_code: result.embed_code,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageDto {
    pub speaker: Speaker,
    pub text: String,
    pub at: String,
}

impl From<&ChatMessage> for ChatMessageDto {
    fn from(message: &ChatMessage) -> Self {
        Self {
            speaker: message.speaker(),
            text: message.text().to_string(),
            at: message.at().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub session_id: String,
    pub messages: Vec<ChatMessageDto>,
}

impl From<GetHistoryResult> for HistoryResponse {
    fn from(result: GetHistoryResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            messages: result.messages.iter().map(ChatMessageDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FormId;

    #[test]
    fn start_request_session_id_is_optional() {
        let req: StartConversationRequest = serde_json::from_str("{}").unwrap();
        assert!(req.session_id.is_none());

        let req: StartConversationRequest =
            serde_json::from_str(r#"{"session_id":"abc"}"#).unwrap();
        assert_eq!(req.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn message_response_omits_form_fields_until_completed() {
        let response = MessageResponse::from(ProcessMessageResult {
            message: "Next?".to_string(),
            state: DialogueStep::Gdpr,
            form_id: None,
            embed_code: None,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["state"], "gdpr");
        assert!(json.get("form_id").is_none());
        assert!(json.get("embed_code").is_none());
    }

    #[test]
    fn message_response_carries_numeric_form_id() {
        let response = MessageResponse::from(ProcessMessageResult {
            message: "Done".to_string(),
            state: DialogueStep::Completed,
            form_id: Some(FormId::new(12)),
            embed_code: Some("<iframe/>".to_string()),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["form_id"], 12);
        assert_eq!(json["embed_code"], "<iframe/>");
    }
}
