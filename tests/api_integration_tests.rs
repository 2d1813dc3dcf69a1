//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use classroom_ai::{
    api::create_router,
    models::requests::MAX_UPLOAD_BYTES,
    provider::{CompletionProvider, GeminiClient},
    AppState, Config,
};
use common::{test_config, ScriptedProvider};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(provider: &Arc<ScriptedProvider>, config: &Config) -> Router {
    let provider: Arc<dyn CompletionProvider> = provider.clone();
    create_router(AppState::from_config(config, provider))
}

fn default_app() -> Router {
    create_test_app(&Arc::new(ScriptedProvider::new("plain text")), &test_config())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

const TAMIL_LESSON: &str = r#"{"subject":"Tamil","grade":"Grade 3","duration":45}"#;

// == Generation Endpoint Tests ==

#[tokio::test]
async fn test_lesson_plan_endpoint_fallback() {
    let response = default_app()
        .oneshot(post_json("/lesson-plan", TAMIL_LESSON))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["subject"], "Tamil");
    assert_eq!(json["grade"], "Grade 3");
    assert_eq!(json["duration"], 45);
    assert!(json["activities"].as_array().unwrap().len() >= 1);
}

#[tokio::test]
async fn test_lesson_plan_endpoint_rejects_zero_duration() {
    let response = default_app()
        .oneshot(post_json(
            "/lesson-plan",
            r#"{"subject":"Tamil","grade":"Grade 3","duration":0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("Duration"));
}

#[tokio::test]
async fn test_learning_pathway_endpoint() {
    let response = default_app()
        .oneshot(post_json(
            "/learning-pathway",
            r#"{"name":"Arun","grade":"Grade 6","strengths":["Geometry"]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["student_name"], "Arun");
}

#[tokio::test]
async fn test_content_analysis_endpoint() {
    let provider = Arc::new(ScriptedProvider::new("A diagram of the water cycle."));
    let app = create_test_app(&provider, &test_config());

    let response = app
        .oneshot(post_json(
            "/content-analysis",
            r#"{"grade":"Grade 4","mime_type":"image/png","image_base64":"iVBORw0KGgo="}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.image_calls(), 1);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["grade"], "Grade 4");
}

#[tokio::test]
async fn test_content_analysis_rejects_bad_base64() {
    let response = default_app()
        .oneshot(post_json(
            "/content-analysis",
            r#"{"grade":"Grade 4","mime_type":"image/png","image_base64":"***"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_visualizations_endpoint() {
    let response = default_app()
        .oneshot(post_json(
            "/visualizations",
            r#"{"content":"Photosynthesis turns light into sugar","grade":"Grade 5"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["grade"], "Grade 5");
    assert!(!json["visualizations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_rate_limited_request_returns_429() {
    let provider = Arc::new(ScriptedProvider::new("plain text"));
    let config = Config {
        rate_limit_max_requests: 1,
        ..test_config()
    };
    let app = create_test_app(&provider, &config);

    let first = app
        .clone()
        .oneshot(post_json("/lesson-plan", TAMIL_LESSON))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(post_json(
            "/lesson-plan",
            r#"{"subject":"Tamil","grade":"Grade 4","duration":45}"#,
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(second.headers().contains_key(header::RETRY_AFTER));

    let json = body_to_json(second.into_body()).await;
    assert!(json["retry_after_secs"].as_u64().unwrap() >= 1);
}

// == Diagnostics Endpoint Tests ==

#[tokio::test]
async fn test_stats_and_clear_cache() {
    let app = default_app();

    app.clone()
        .oneshot(post_json("/lesson-plan", TAMIL_LESSON))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_json("/lesson-plan", TAMIL_LESSON))
        .await
        .unwrap();

    let response = app.clone().oneshot(get("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["cache_size"], 1);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["rate_limit"]["remaining"], json["rate_limit"]["limit"].as_u64().unwrap() - 1);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["cleared"], 1);

    let response = app.oneshot(get("/stats")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["cache_size"], 0);
}

#[tokio::test]
async fn test_rate_limit_endpoint() {
    let response = default_app().oneshot(get("/rate-limit")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["limit"], 15);
    assert_eq!(json["remaining"], 15);
    assert_eq!(json["window_ms"], 60_000);
    assert_eq!(json["wait_time_ms"], 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = default_app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Feedback Endpoint Tests ==

#[tokio::test]
async fn test_feedback_summary_endpoint() {
    let response = default_app()
        .oneshot(post_json(
            "/feedback/summary",
            r#"[
                {"rating": 5, "comment": "Students loved the storytelling"},
                {"rating": 4, "comment": "Storytelling kept everyone engaged"},
                {"rating": 3, "comment": "Pacing felt rushed"}
            ]"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["total"], 3);
    assert_eq!(json["average_rating"], 4.0);
    assert_eq!(json["themes"][0]["term"], "storytelling");
    assert_eq!(json["themes"][0]["count"], 2);
}

#[tokio::test]
async fn test_feedback_summary_rejects_out_of_range_rating() {
    let response = default_app()
        .oneshot(post_json("/feedback/summary", r#"[{"rating": 9}]"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Document Endpoint Tests ==

#[tokio::test]
async fn test_document_lifecycle() {
    let app = default_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/documents/teacher-1",
            r#"{"file_name":"notes.txt","mime_type":"text/plain","data":"aGVsbG8="}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let record = body_to_json(response.into_body()).await;
    assert_eq!(record["size_bytes"], 5);
    assert!(record["url"].as_str().unwrap().starts_with("data:text/plain;base64,"));
    let id = record["id"].as_str().unwrap().to_string();

    let response = app.clone().oneshot(get("/documents/teacher-1")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let response = app.clone().oneshot(get("/documents/teacher-2")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert!(json.as_array().unwrap().is_empty());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/documents/teacher-1/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/documents/teacher-1")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert!(json.as_array().unwrap().is_empty());
}

fn upload_body(size: usize) -> String {
    serde_json::json!({
        "file_name": "scan.bin",
        "mime_type": "application/octet-stream",
        "data": STANDARD.encode(vec![7u8; size]),
    })
    .to_string()
}

#[tokio::test]
async fn test_upload_above_default_body_limit_accepted() {
    let response = default_app()
        .oneshot(post_json("/documents/teacher-1", &upload_body(3 * 1024 * 1024)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let record = body_to_json(response.into_body()).await;
    assert_eq!(record["size_bytes"], 3 * 1024 * 1024);
}

#[tokio::test]
async fn test_upload_at_max_size_accepted() {
    let response = default_app()
        .oneshot(post_json("/documents/teacher-1", &upload_body(MAX_UPLOAD_BYTES)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_upload_over_max_size_rejected() {
    let response = default_app()
        .oneshot(post_json(
            "/documents/teacher-1",
            &upload_body(MAX_UPLOAD_BYTES + 1),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("maximum size"));
}

// == Error Response Tests ==

#[tokio::test]
async fn test_invalid_json_request() {
    let response = default_app()
        .oneshot(post_json("/lesson-plan", r#"{"invalid json"#))
        .await
        .unwrap();

    // Axum returns 400 for syntax errors and 422 for shape errors
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn test_remote_failure_returns_bad_gateway() {
    let provider = Arc::new(ScriptedProvider::failing(3));
    let config = Config {
        retry_base_delay_ms: 1,
        ..test_config()
    };
    let app = create_test_app(&provider, &config);

    let response = app
        .oneshot(post_json("/lesson-plan", TAMIL_LESSON))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(provider.calls(), 3);
}

#[tokio::test]
async fn test_unreachable_endpoint_does_not_expose_key() {
    let config = Config {
        retry_max_attempts: 1,
        ..test_config()
    };
    // nothing listens on the discard port
    let provider: Arc<dyn CompletionProvider> = Arc::new(GeminiClient::new(
        "SECRET_KEY_123",
        "gemini-1.5-flash",
        "http://127.0.0.1:9",
    ));
    let app = create_router(AppState::from_config(&config, provider));

    let response = app
        .oneshot(post_json(
            "/visualizations",
            r#"{"content":"Rivers","grade":"Grade 4"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8_lossy(&bytes);
    assert!(!body.contains("SECRET_KEY_123"), "leaked: {}", body);
}
