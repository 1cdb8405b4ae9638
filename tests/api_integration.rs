//! Integration tests for the HTTP API
//!
//! Tests endpoint status codes and the unlock → compute flow on shared state

use lpo::core::{create_router, ScoringEngine};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use serde_json::Value;

fn create_test_router() -> Router {
    create_router(ScoringEngine::default())
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["unlocked"], false);
}

#[tokio::test]
async fn test_compute_locked() {
    let app = create_test_router();

    let response = app
        .oneshot(post_json("/compute", r#"{"snatch":"110","cleanJerk":"140","backSquat":"160"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::LOCKED);
}

#[tokio::test]
async fn test_unlock_wrong_passphrase() {
    let app = create_test_router();

    let response = app
        .oneshot(post_json("/unlock", r#"{"passphrase":"wrong-pass"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["unlocked"], false);
}

#[tokio::test]
async fn test_full_unlock_compute_flow() {
    // Router clones share the same engine
    let app = create_test_router();

    let response = app
        .clone()
        .oneshot(post_json("/unlock", r#"{"passphrase":"LPO2025"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["unlocked"], true);

    let response = app
        .clone()
        .oneshot(post_json("/compute", r#"{"snatch":"110","cleanJerk":140,"backSquat":"160"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["metrics"]["valid"], true);
    assert_eq!(json["metrics"]["efficiencyCleanJerk"], 87.5);
    assert_eq!(json["diagnostics"]["snatch"]["label"], "LIMIT");
    assert_eq!(json["diagnostics"]["backSquat"]["icon"], "UP");

    let response = app
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["state"], "UNLOCKED");
    assert_eq!(json["attempts"], 1);
}

#[tokio::test]
async fn test_compute_absorbs_null_and_bool_fields() {
    let app = create_test_router();

    let response = app
        .clone()
        .oneshot(post_json("/unlock", r#"{"passphrase":"LPO2025"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post_json(
            "/compute",
            r#"{"snatch":null,"cleanJerk":true,"backSquat":"160","bodyweight":{"kg":81}}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["inputs"]["snatch"], 0.0);
    assert_eq!(json["inputs"]["cleanJerk"], 0.0);
    assert_eq!(json["inputs"]["backSquat"], 160.0);
    assert_eq!(json["metrics"]["valid"], false);
    assert_eq!(json["diagnostics"]["snatch"]["label"], "UNAVAILABLE");
}

#[tokio::test]
async fn test_status_starts_locked() {
    let app = create_test_router();

    let response = app
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["state"], "LOCKED");
    assert_eq!(json["attempts"], 0);
}

#[tokio::test]
async fn test_compute_bad_json_rejected() {
    let app = create_test_router();

    let response = app
        .oneshot(post_json("/compute", "not json"))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
