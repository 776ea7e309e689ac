//! AI service proxy endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use folio_protocol::{ProcessReply, ProcessRequest};

/// POST /api/ai/process — run the external AI service with `action` and `data`.
pub async fn process(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> ApiResult<Json<ProcessReply>> {
    let Json(req) = payload?;
    let action = req
        .action
        .filter(|a| !a.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Action is required".into()))?;

    tracing::info!(action = %action, "forwarding to AI service");

    let result = state.bridge.invoke(&action, &req.data).await?;

    Ok(Json(ProcessReply {
        success: true,
        result,
    }))
}
