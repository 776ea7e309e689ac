//! Mock assistant chat endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::Utc;

use crate::assistant;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use folio_protocol::{ChatReply, ChatRequest};

/// POST /api/ai/chat — answer a visitor message with a canned response.
///
/// The reply is held back by the configured chat delay to mimic model latency.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatReply>> {
    let Json(req) = payload?;
    let message = req
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Message is required".into()))?;

    let classification = assistant::classify(&state.rules, &message);
    let response = classification.response.to_string();
    let conversation_id = req
        .conversation_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Utc::now().timestamp_millis().to_string());

    tracing::debug!(
        intent = classification.intent.as_str(),
        conversation_id = %conversation_id,
        "chat message classified"
    );

    tokio::time::sleep(state.chat_delay.sample()).await;

    Ok(Json(ChatReply {
        success: true,
        response,
        conversation_id,
        timestamp: Utc::now(),
    }))
}
