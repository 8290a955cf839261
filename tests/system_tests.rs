mod common;

use axum::http::StatusCode;
use common::{FakeModel, body_json, get, post_json, send, spawn_app};
use std::sync::Arc;

#[tokio::test]
async fn liveness_probe_is_ok() {
    let app = spawn_app(Arc::new(FakeModel::default())).await;

    let response = send(&app, get("/health/live")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn readiness_probe_checks_database() {
    let app = spawn_app(Arc::new(FakeModel::default())).await;

    let response = send(&app, get("/health/ready")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["database"], true);
    assert_eq!(body["blogs"], 0);
}

#[tokio::test]
async fn readiness_probe_counts_stored_posts() {
    let app = spawn_app(Arc::new(FakeModel::default())).await;

    let response = send(
        &app,
        post_json(
            "/api/law-generator/admin/generate",
            &serde_json::json!({ "topic": "bail in India", "count": 2 }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(send(&app, get("/health/ready")).await).await;
    assert_eq!(body["blogs"], 2);
}

#[tokio::test]
async fn metrics_endpoint_is_absent_when_disabled() {
    let app = spawn_app(Arc::new(FakeModel::default())).await;

    let response = send(&app, get("/metrics")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = spawn_app(Arc::new(FakeModel::default())).await;

    let response = send(&app, get("/api/law-generator/nope")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
