//! E2E tests for the REST endpoints as the site front-end uses them.

mod helpers;

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::json;

use folio_protocol::{ChatReply, ContactReply, RecommendReply};
use helpers::TestHarness;

#[tokio::test]
async fn e2e_health() {
    let h = TestHarness::new();
    let (status, json) = h.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

/// Valid submission is echoed back with a receive time no earlier than the request.
#[tokio::test]
async fn e2e_contact_roundtrip() {
    let h = TestHarness::new();
    let sent_at = Utc::now();

    let (status, json) = h
        .post(
            "/api/contact",
            json!({
                "name": "A",
                "email": "a@example.com",
                "subject": "Collaboration",
                "message": "Let's build something."
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let reply: ContactReply = serde_json::from_value(json).unwrap();
    assert!(reply.success);
    assert_eq!(reply.data.name, "A");
    assert_eq!(reply.data.subject, "Collaboration");
    assert!(reply.data.received_at >= sent_at);
}

#[tokio::test]
async fn e2e_contact_bad_email() {
    let h = TestHarness::new();
    let (status, json) = h
        .post(
            "/api/contact",
            json!({"name": "A", "email": "bad-email", "subject": "s", "message": "m"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid email address");
    assert_eq!(json["success"], false);
}

/// Chat replies are held back by 800-1200 ms of simulated latency.
#[tokio::test]
async fn e2e_chat_latency_is_bounded() {
    let h = TestHarness::with_default_delay();

    let started = Instant::now();
    let (status, json) = h
        .post("/api/ai/chat", json!({"message": "tell me about your skills"}))
        .await;
    let elapsed = started.elapsed();

    assert_eq!(status, StatusCode::OK);
    assert!(elapsed >= Duration::from_millis(800), "too fast: {elapsed:?}");
    assert!(elapsed <= Duration::from_millis(2000), "too slow: {elapsed:?}");

    let reply: ChatReply = serde_json::from_value(json).unwrap();
    assert!(reply.response.starts_with("My technical proficiency"));
}

/// Validation errors are returned immediately, without the simulated delay.
#[tokio::test]
async fn e2e_chat_rejection_is_immediate() {
    let h = TestHarness::with_default_delay();
    let started = Instant::now();
    let (status, _) = h.post("/api/ai/chat", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(started.elapsed() < Duration::from_millis(800));
}

#[tokio::test]
async fn e2e_chat_priority_order() {
    let h = TestHarness::new();
    let cases = [
        ("Do you offer a contact SERVICE?", "I offer four main services"),
        ("Show me your work and skills", "My portfolio includes"),
        ("phone or email?", "You can reach me"),
        ("What's your background", "With over 7 years"),
        ("hey", "Hello! I'm your AI assistant."),
        ("zzz", "I understand you're asking"),
    ];
    for (message, expected) in cases {
        let (_, json) = h.post("/api/ai/chat", json!({"message": message})).await;
        let response = json["response"].as_str().unwrap();
        assert!(
            response.starts_with(expected),
            "{message:?} -> {response:?}"
        );
    }
}

#[tokio::test]
async fn e2e_chat_timestamp_is_recent() {
    let h = TestHarness::new();
    let before = Utc::now();
    let (_, json) = h.post("/api/ai/chat", json!({"message": "hello"})).await;
    let ts: DateTime<Utc> = serde_json::from_value(json["timestamp"].clone()).unwrap();
    assert!(ts >= before);
}

#[tokio::test]
async fn e2e_recommend_full_catalog() {
    let h = TestHarness::new();
    let (_, json) = h
        .post("/api/projects/recommend", json!({"interests": []}))
        .await;
    let reply: RecommendReply = serde_json::from_value(json).unwrap();
    let scores: Vec<u32> = reply.recommendations.iter().map(|r| r.match_score).collect();
    assert_eq!(scores, vec![95, 92, 90, 88]);
    assert_eq!(reply.total_matches, 4);
    assert_eq!(reply.interests, Some(vec![]));
}

#[tokio::test]
async fn e2e_recommend_ai_interest() {
    let h = TestHarness::new();
    let (_, json) = h
        .post("/api/projects/recommend", json!({"interests": ["ai"]}))
        .await;
    let reply: RecommendReply = serde_json::from_value(json).unwrap();
    for item in &reply.recommendations {
        assert!(
            item.category == "ai" || item.skills.iter().any(|s| s.to_lowercase() == "ai"),
            "unexpected item {}",
            item.title
        );
    }
    assert_eq!(reply.recommendations.len(), 1);
    assert_eq!(reply.recommendations[0].id, 1);
}

/// skillLevel is echoed but never changes the ranking.
#[tokio::test]
async fn e2e_recommend_ignores_skill_level() {
    let h = TestHarness::new();
    let (_, beginner) = h
        .post(
            "/api/projects/recommend",
            json!({"interests": ["python"], "skillLevel": "beginner"}),
        )
        .await;
    let (_, expert) = h
        .post(
            "/api/projects/recommend",
            json!({"interests": ["python"], "skillLevel": "expert"}),
        )
        .await;
    assert_eq!(beginner["recommendations"], expert["recommendations"]);
    assert_eq!(beginner["skillLevel"], "beginner");
    assert_eq!(expert["skillLevel"], "expert");
}

#[tokio::test]
async fn e2e_analytics() {
    let h = TestHarness::new();
    let (status, json) = h.get("/api/analytics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["analytics"]["performanceScore"], 96);
    assert_eq!(json["analytics"]["bounceRate"], "32%");
}
