//! Shared test harness for E2E integration tests.
//!
//! Drives the real router through `tower::oneshot`, and can start the status
//! channel on an ephemeral port for WebSocket tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

use folio_api::bridge::{MockRunner, ProcessRunner};
use folio_api::routes::{build_channel_router, build_router};
use folio_api::state::{AppState, ChatDelay};

/// End-to-end test harness around one in-memory `AppState`.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// No chat delay, AI service that answers `{"ok":true}`.
    pub fn new() -> Self {
        Self::with_state(
            AppState::with_runner(Arc::new(MockRunner::exit(0, r#"{"ok":true}"#, "")))
                .with_chat_delay(ChatDelay::none()),
        )
    }

    /// Production timings (800-1200 ms chat delay).
    pub fn with_default_delay() -> Self {
        Self::with_state(AppState::with_runner(Arc::new(MockRunner::exit(0, "{}", ""))))
    }

    /// No chat delay and a custom AI service runner.
    pub fn with_runner(runner: Arc<dyn ProcessRunner>) -> Self {
        Self::with_state(AppState::with_runner(runner).with_chat_delay(ChatDelay::none()))
    }

    pub fn with_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { state, router }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read_json(response).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read_json(response).await
    }

    /// Serve the status channel on 127.0.0.1 with the given update interval.
    pub async fn spawn_channel(&self, update_interval: Duration) -> SocketAddr {
        let state = self.state.clone().with_update_interval(update_interval);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_channel_router(state))
                .await
                .unwrap();
        });
        addr
    }
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
