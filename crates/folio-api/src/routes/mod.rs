//! API route definitions and router builders.

pub mod analytics;
pub mod chat;
pub mod contact;
pub mod health;
pub mod process;
pub mod projects;
pub mod ws;

use std::path::Path;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::state::AppState;

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/contact", post(contact::submit_contact))
        .route("/ai/chat", post(chat::chat))
        .route("/ai/process", post(process::process))
        .route("/projects/recommend", post(projects::recommend))
        .route("/analytics", get(analytics::analytics))
}

/// CORS policy: any origin when `origins` is empty, otherwise exactly those.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the API router (under `/api`) with permissive CORS.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&[]))
        .with_state(state)
}

/// Build the full site: API routes, static files from `config.site_root`
/// with `index.html` as the catch-all document, and the configured CORS policy.
pub fn build_app(state: AppState, config: &ApiConfig) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback_service(static_site(&config.site_root))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}

fn static_site(root: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(root).fallback(ServeFile::new(root.join("index.html")))
}

/// Build the status channel router served on its own port. Every path upgrades.
pub fn build_channel_router(state: AppState) -> Router {
    Router::new()
        .fallback(get(ws::ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
