use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/ai/chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Free-text visitor message.
    #[serde(default)]
    pub message: Option<String>,
    /// Conversation to continue. A new one is minted when absent.
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Canned assistant reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub success: bool,
    pub response: String,
    pub conversation_id: String,
    pub timestamp: DateTime<Utc>,
}
