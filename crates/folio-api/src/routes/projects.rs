//! Project recommendation endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;

use crate::catalog::DEFAULT_SKILL_LEVEL;
use crate::state::AppState;
use folio_protocol::{RecommendReply, RecommendRequest};

/// POST /api/projects/recommend — rank catalog projects by interest.
///
/// Never fails: a body that is not JSON is treated as an empty request, and
/// no matches is an empty list. `skillLevel` is echoed but does not
/// influence ranking.
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Json<RecommendReply> {
    let req = payload
        .map(|Json(body)| read_request(&body))
        .unwrap_or_default();

    let recommendations: Vec<_> = state
        .catalog
        .recommend(req.interests.as_deref())
        .into_iter()
        .cloned()
        .collect();

    Json(RecommendReply {
        success: true,
        total_matches: recommendations.len(),
        recommendations,
        interests: req.interests,
        skill_level: req
            .skill_level
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SKILL_LEVEL.to_string()),
    })
}

/// Each field is read on its own, so a malformed `skillLevel` cannot discard
/// a well-formed `interests` list. Non-string interest entries are skipped.
fn read_request(body: &Value) -> RecommendRequest {
    let interests = body.get("interests").and_then(Value::as_array).map(|list| {
        list.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    });
    let skill_level = body
        .get("skillLevel")
        .and_then(Value::as_str)
        .map(str::to_string);

    RecommendRequest {
        interests,
        skill_level,
    }
}
