//! Session log entries
//!
//! One JSON object per entry:
//! ```json
//! {"type":"message","id":"a1","parentId":null,"timestamp":"2025-01-15T14:30:00Z",
//!  "message":{"role":"toolResult","toolCallId":"c1","toolName":"todowrite",
//!             "content":[{"type":"text","text":"Plan updated: 0/1 completed"}],
//!             "details":{"steps":[{"step":"Ship","status":"pending"}]}}}
//! ```
//!
//! Entry kinds other than `message` are opaque here: they are recognized so
//! they can be skipped explicitly, and their payload is not kept.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single entry in the session log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    pub id: String,
    /// Previous entry on this branch (`None` for the root)
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub kind: EntryKind,
}

impl SessionEntry {
    pub fn new(id: impl Into<String>, parent_id: Option<String>, kind: EntryKind) -> Self {
        Self {
            id: id.into(),
            parent_id,
            timestamp: None,
            kind,
        }
    }

    /// Stamp with the current time
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// The message carried by a `message` entry
    pub fn message(&self) -> Option<&AgentMessage> {
        match &self.kind {
            EntryKind::Message { message } => Some(message),
            _ => None,
        }
    }
}

/// Entry kinds, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryKind {
    Message { message: AgentMessage },
    ModelChange,
    ThinkingLevelChange,
    Compaction,
    BranchSummary,
    Custom,
    CustomMessage,
    Label,
    #[serde(other)]
    Unknown,
}

/// Conversation messages, tagged by `role`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "camelCase")]
pub enum AgentMessage {
    /// User input (plain string or content blocks, kept as-is)
    User {
        #[serde(default)]
        content: Value,
    },
    Assistant {
        #[serde(default)]
        content: Vec<ContentBlock>,
    },
    ToolResult(ToolResultMessage),
    #[serde(other)]
    Other,
}

/// Result of a completed tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResultMessage {
    #[serde(default)]
    pub tool_call_id: String,
    pub tool_name: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// Structured payload persisted verbatim from the tool's return value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(default)]
    pub is_error: bool,
}

/// Message content blocks, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    ToolCall {
        id: String,
        name: String,
        #[serde(default)]
        arguments: Value,
    },
    #[serde(other)]
    Other,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_tool_result_entry() {
        let raw = json!({
            "type": "message",
            "id": "a1",
            "parentId": "a0",
            "timestamp": "2025-01-15T14:30:00Z",
            "message": {
                "role": "toolResult",
                "toolCallId": "c1",
                "toolName": "todowrite",
                "content": [{"type": "text", "text": "Plan updated: 0/1 completed"}],
                "details": {"steps": [{"step": "Ship", "status": "pending"}]}
            }
        });

        let entry: SessionEntry = serde_json::from_value(raw).unwrap();
        assert_eq!(entry.id, "a1");
        assert_eq!(entry.parent_id.as_deref(), Some("a0"));
        assert!(entry.timestamp.is_some());

        let Some(AgentMessage::ToolResult(result)) = entry.message() else {
            panic!("expected tool result, got {:?}", entry.kind);
        };
        assert_eq!(result.tool_name, "todowrite");
        assert_eq!(result.content[0].as_text(), Some("Plan updated: 0/1 completed"));
        assert!(result.details.is_some());
    }

    #[test]
    fn test_other_kinds_decode_without_payload() {
        let entry: SessionEntry = serde_json::from_value(json!({
            "type": "model_change",
            "id": "m1",
            "provider": "anthropic",
            "modelId": "some-model"
        }))
        .unwrap();
        assert_eq!(entry.kind, EntryKind::ModelChange);

        let entry: SessionEntry = serde_json::from_value(json!({
            "type": "something_new",
            "id": "x1",
            "data": [1, 2, 3]
        }))
        .unwrap();
        assert_eq!(entry.kind, EntryKind::Unknown);
    }

    #[test]
    fn test_user_content_may_be_plain_text() {
        let entry: SessionEntry = serde_json::from_value(json!({
            "type": "message",
            "id": "u1",
            "message": {"role": "user", "content": "make a plan"}
        }))
        .unwrap();
        assert!(matches!(entry.message(), Some(AgentMessage::User { .. })));
        assert!(entry.parent_id.is_none());
    }

    #[test]
    fn test_unknown_roles_and_blocks() {
        let entry: SessionEntry = serde_json::from_value(json!({
            "type": "message",
            "id": "b1",
            "message": {"role": "bashExecution", "command": "ls"}
        }))
        .unwrap();
        assert_eq!(entry.message(), Some(&AgentMessage::Other));

        let block: ContentBlock =
            serde_json::from_value(json!({"type": "thinking", "thinking": "hmm"})).unwrap();
        assert_eq!(block, ContentBlock::Other);
        assert!(block.as_text().is_none());
    }

    #[test]
    fn test_round_trip_keeps_details_verbatim() {
        let details = json!({"steps": [{"step": "Ship", "status": "completed"}], "explanation": "why"});
        let entry = SessionEntry::new(
            "r1",
            Some("r0".to_string()),
            EntryKind::Message {
                message: AgentMessage::ToolResult(ToolResultMessage {
                    tool_call_id: "c9".to_string(),
                    tool_name: "todowrite".to_string(),
                    content: vec![ContentBlock::text("Plan updated: 1/1 completed")],
                    details: Some(details.clone()),
                    is_error: false,
                }),
            },
        );

        let line = serde_json::to_string(&entry).unwrap();
        let back: SessionEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(back, entry);

        let Some(AgentMessage::ToolResult(result)) = back.message() else {
            panic!("expected tool result");
        };
        assert_eq!(result.details.as_ref(), Some(&details));
    }
}
