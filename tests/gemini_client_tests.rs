use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use lawblog::clients::{GeminiClient, LlmError, TextGenerator};
use lawblog::config::LlmConfig;
use serde_json::{Value, json};

const API_KEY: &str = "test-key";

async fn fake_generate(
    Path(model_action): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some(API_KEY) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": { "message": "API key not valid" } })),
        )
            .into_response();
    }

    if model_action != "gemini-test:generateContent" {
        return StatusCode::NOT_FOUND.into_response();
    }

    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();

    if prompt == "blocked" {
        return Json(json!({ "promptFeedback": { "blockReason": "SAFETY" } })).into_response();
    }

    Json(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": format!("echo: {prompt}") }] },
            "finishReason": "STOP"
        }]
    }))
    .into_response()
}

async fn spawn_fake_gemini() -> String {
    let app = Router::new().route("/v1beta/models/{model_action}", post(fake_generate));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn config_for(base_url: String, api_key: &str) -> LlmConfig {
    LlmConfig {
        api_key: api_key.to_string(),
        base_url,
        model: "gemini-test".to_string(),
        request_timeout_seconds: 5,
        ..LlmConfig::default()
    }
}

#[tokio::test]
async fn returns_candidate_text() {
    let base_url = spawn_fake_gemini().await;
    let client = GeminiClient::new(&config_for(base_url, API_KEY)).unwrap();

    let text = client.generate("Is bail a right?").await.unwrap();
    assert_eq!(text, "echo: Is bail a right?");
}

#[tokio::test]
async fn surfaces_http_status_errors() {
    let base_url = spawn_fake_gemini().await;
    let client = GeminiClient::new(&config_for(base_url, "wrong-key")).unwrap();

    let err = client.generate("hello").await.unwrap_err();
    match err {
        LlmError::Status { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn reports_blocked_prompts() {
    let base_url = spawn_fake_gemini().await;
    let client = GeminiClient::new(&config_for(base_url, API_KEY)).unwrap();

    let err = client.generate("blocked").await.unwrap_err();
    assert!(matches!(err, LlmError::Blocked(reason) if reason == "SAFETY"));
}
