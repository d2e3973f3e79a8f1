//! Gateway handler tests against the mock provider.

use std::sync::Arc;

use axum::{Router, body::Body, http::Request, http::StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use talon::{CandidateRecord, Corpus, EmbeddingCache, MatchEngine, MockTextProvider};

use crate::gateway::create_router_with_state;
use crate::gateway::state::AppState;

const DIM: usize = 8;

fn router_with(names: &[&str]) -> (Arc<MockTextProvider>, Router) {
    let provider = Arc::new(MockTextProvider::new(DIM));
    let cache = Arc::new(EmbeddingCache::new(Arc::clone(&provider), DIM));

    let records: Vec<CandidateRecord> = names
        .iter()
        .map(|name| CandidateRecord {
            name: name.to_string(),
            location: "Berlin, Germany".to_string(),
            skills: "video editing".to_string(),
            bio: format!("{} cuts videos", name),
            embedding: provider.embedding_for(&format!("{} profile", name)),
        })
        .collect();

    let corpus = Arc::new(Corpus::from_records(DIM, records).unwrap());
    let engine = Arc::new(MatchEngine::new(Arc::clone(&provider), cache, corpus, 5));
    let state = AppState::new(engine, 10, 32);

    (provider, create_router_with_state(state))
}

async fn post_json(router: Router, path: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, value)
}

#[tokio::test]
async fn test_health_reports_corpus() {
    let (_provider, router) = router_with(&["Alice", "Bob"]);

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["status"], "healthy");
    assert_eq!(value["talent_profiles_loaded"], 2);
    assert_eq!(value["embeddings_ready"], true);
}

#[tokio::test]
async fn test_health_with_empty_corpus() {
    let (_provider, router) = router_with(&[]);

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["talent_profiles_loaded"], 0);
    assert_eq!(value["embeddings_ready"], false);
}

#[tokio::test]
async fn test_recommend_returns_ranked_results() {
    let (_provider, router) = router_with(&["Alice", "Bob"]);

    let (status, value) = post_json(
        router,
        "/recommend",
        serde_json::json!({"job_description": "video editor for tech channel"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["strategy"], "basic");
    assert_eq!(value["top_k"], 10);

    let results = value["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["rank"], 1);
    assert!(results[0]["name"].is_string());
    assert!(results[0]["score"].is_number());
}

#[tokio::test]
async fn test_recommend_respects_top_k() {
    let (_provider, router) = router_with(&["Alice", "Bob", "Carol"]);

    let (status, value) = post_json(
        router,
        "/recommend",
        serde_json::json!({"job_description": "editor", "top_k": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_recommend_blank_description_is_400() {
    let (provider, router) = router_with(&["Alice"]);

    let (status, value) = post_json(
        router,
        "/recommend",
        serde_json::json!({"job_description": "   "}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].as_str().unwrap().contains("job_description"));
    assert_eq!(provider.embed_calls(), 0);
}

#[tokio::test]
async fn test_recommend_provider_failure_is_502() {
    let (provider, router) = router_with(&["Alice"]);
    provider.set_fail_embed(true);

    let (status, _value) = post_json(
        router,
        "/recommend",
        serde_json::json!({"job_description": "editor"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_weighted_recommend_accepts_weights() {
    let (_provider, router) = router_with(&["Alice", "Bob"]);

    let (status, value) = post_json(
        router,
        "/recommend/weighted",
        serde_json::json!({
            "job_description": "video editing in Berlin",
            "weights": {"skills": 0.5, "location": 0.2}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["strategy"], "weighted");
    assert_eq!(value["results"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_weighted_recommend_unknown_field_is_400() {
    let (_provider, router) = router_with(&["Alice"]);

    let (status, value) = post_json(
        router,
        "/recommend/weighted",
        serde_json::json!({
            "job_description": "editor",
            "weights": {"charisma": 0.9}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].as_str().unwrap().contains("charisma"));
}

#[tokio::test]
async fn test_chat_returns_reply_candidates_and_session() {
    let (provider, router) = router_with(&["Alice"]);
    provider.push_completion(r#"{"job_type": "video_editor"}"#);
    provider.push_completion("Alice is a strong match.");

    let (status, value) = post_json(
        router,
        "/chat",
        serde_json::json!({"message": "need a video editor"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["message"], "Alice is a strong match.");
    assert_eq!(value["success"], true);
    assert_eq!(value["candidates"].as_array().unwrap().len(), 1);
    assert!(value["session_id"].is_string());
}

#[tokio::test]
async fn test_chat_session_continuity() {
    let (_provider, router) = router_with(&["Alice"]);

    let (_, first) = post_json(
        router.clone(),
        "/chat",
        serde_json::json!({"message": "first message"}),
    )
    .await;
    let session_id = first["session_id"].as_str().unwrap().to_string();

    let (status, second) = post_json(
        router,
        "/chat",
        serde_json::json!({"message": "second message", "session_id": session_id}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["session_id"].as_str().unwrap(), session_id);
}

#[tokio::test]
async fn test_chat_blank_message_is_400() {
    let (_provider, router) = router_with(&["Alice"]);

    let (status, _value) =
        post_json(router, "/chat", serde_json::json!({"message": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_degrades_when_provider_down() {
    let (provider, router) = router_with(&["Alice"]);
    provider.set_fail_embed(true);
    provider.set_fail_complete(true);

    let (status, value) = post_json(
        router,
        "/chat",
        serde_json::json!({"message": "anyone available?"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["success"], true);
    assert_eq!(value["candidates"].as_array().unwrap().len(), 0);
    assert!(value["message"].as_str().unwrap().contains("rephrasing"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (_provider, router) = router_with(&["Alice"]);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
