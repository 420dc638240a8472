//! Shared types between the console core and the browser UI
//!
//! These types mirror the runtime backend's JSON API:
//! - conversation history and message sending (`/chat/*`)
//! - the DSL document endpoints (`/dsl/content`)
//! - the health probe (`/health`)
//!
//! Serializable with serde for JSON over HTTP

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Conversation Types
// ============================================================================

/// Opaque conversation identifier issued by the backend
///
/// Never blank: both `parse` and deserialization reject empty values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../../console-ui/src/types/generated.ts")]
#[serde(try_from = "String", into = "String")]
pub struct ConversationId(String);

impl ConversationId {
    /// Wraps a raw id, rejecting blank values.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("conversation id must not be blank")]
pub struct BlankConversationId;

impl TryFrom<String> for ConversationId {
    type Error = BlankConversationId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw).ok_or(BlankConversationId)
    }
}

impl From<ConversationId> for String {
    fn from(id: ConversationId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../console-ui/src/types/generated.ts")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the conversation log, as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../console-ui/src/types/generated.ts")]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Body of `POST /chat/send`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../console-ui/src/types/generated.ts")]
pub struct ChatSendRequest {
    pub query: String,
    pub conversation_id: Option<ConversationId>,
}

/// Response of `POST /chat/send`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../console-ui/src/types/generated.ts")]
pub struct ChatSendResponse {
    pub conversation_id: ConversationId,
    pub response: String,
}

// ============================================================================
// DSL Document Types
// ============================================================================

/// Body of `GET /dsl/content` and `POST /dsl/content`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../console-ui/src/types/generated.ts")]
pub struct DslContent {
    pub content: String,
}

/// Acknowledgement returned after the backend stored and reloaded the DSL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../console-ui/src/types/generated.ts")]
pub struct DslSaveAck {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Backend Status
// ============================================================================

/// Error body produced by the backend for rejected requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../console-ui/src/types/generated.ts")]
pub struct ErrorDetail {
    pub detail: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../console-ui/src/types/generated.ts")]
pub struct BackendHealth {
    pub status: String,
    pub workflow_loaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::Config;

    #[test]
    fn test_conversation_id_rejects_blank() {
        assert!(ConversationId::parse("").is_none());
        assert!(ConversationId::parse("   ").is_none());
        assert_eq!(
            ConversationId::parse("abc123").map(|id| id.to_string()),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_message_wire_shape() {
        let json = serde_json::to_value(Message::assistant("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "hi"}));

        let history: Vec<Message> = serde_json::from_str(
            r#"[{"role":"user","content":"My EC2 instance is down"},{"role":"assistant","content":"..."}]"#,
        )
        .unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].is_user());
        assert_eq!(history[1].role, Role::Assistant);
    }

    #[test]
    fn test_send_request_serializes_absent_id_as_null() {
        let req = ChatSendRequest {
            query: "hello".to_string(),
            conversation_id: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"query": "hello", "conversation_id": null})
        );
    }

    #[test]
    fn test_send_response_parses_plain_string_id() {
        let resp: ChatSendResponse =
            serde_json::from_str(r#"{"conversation_id":"abc123","response":"..."}"#).unwrap();
        assert_eq!(resp.conversation_id.as_str(), "abc123");
        assert_eq!(resp.response, "...");
    }

    #[test]
    fn test_send_response_rejects_blank_id() {
        for body in [
            r#"{"conversation_id":"","response":"hi"}"#,
            r#"{"conversation_id":"  ","response":"hi"}"#,
        ] {
            let err = serde_json::from_str::<ChatSendResponse>(body).unwrap_err();
            assert!(err.to_string().contains("must not be blank"));
        }

        let req: ChatSendRequest =
            serde_json::from_str(r#"{"query":"q","conversation_id":null}"#).unwrap();
        assert!(req.conversation_id.is_none());
    }

    #[test]
    fn test_save_ack_tolerates_missing_message() {
        let ack: DslSaveAck = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(ack.status, "ok");
        assert!(ack.message.is_none());
    }

    #[test]
    fn export_types() {
        let config = Config::default();
        ConversationId::export(&config).unwrap();
        Role::export(&config).unwrap();
        Message::export(&config).unwrap();
        ChatSendRequest::export(&config).unwrap();
        ChatSendResponse::export(&config).unwrap();
        DslContent::export(&config).unwrap();
        DslSaveAck::export(&config).unwrap();
        ErrorDetail::export(&config).unwrap();
        BackendHealth::export(&config).unwrap();
    }
}
