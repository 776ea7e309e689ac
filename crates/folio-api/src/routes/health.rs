//! Health check endpoint.

use axum::Json;
use chrono::Utc;
use serde_json::{Value, json};

/// GET /api/health — liveness check.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
