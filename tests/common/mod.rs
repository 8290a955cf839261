//! Shared harness: an in-memory app wired to a scripted model.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use lawblog::clients::{LlmError, TextGenerator};
use lawblog::config::Config;
use lawblog::prompts::DISCLAIMER;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

/// Answers each prompt kind the way a well-behaved model would.
pub struct FakeModel {
    pub trending: Vec<String>,
    pub ideas: Vec<String>,
    pub fail_lists: bool,
    calls: AtomicUsize,
}

impl Default for FakeModel {
    fn default() -> Self {
        Self {
            trending: (1..=6).map(|i| format!("Trending Legal Update {i}")).collect(),
            ideas: vec![
                "Understanding Anticipatory Bail".to_string(),
                "Default Bail Under the BNSS".to_string(),
                "Bail Conditions Explained".to_string(),
            ],
            fail_lists: false,
            calls: AtomicUsize::new(0),
        }
    }
}

impl FakeModel {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for FakeModel {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if prompt.contains("Is it related to the Indian legal system") {
            let answer = if prompt.to_lowercase().contains("pizza") {
                "No"
            } else {
                "Yes"
            };
            return Ok(answer.to_string());
        }

        if prompt.contains("legal news aggregator") || prompt.contains("legal content strategist") {
            if self.fail_lists {
                return Err(LlmError::Status {
                    status: 503,
                    body: "overloaded".to_string(),
                });
            }
            let titles = if prompt.contains("news aggregator") {
                &self.trending
            } else {
                &self.ideas
            };
            return Ok(format!(
                "Here you go:\n{}",
                serde_json::to_string(titles).unwrap()
            ));
        }

        if let Some(rest) = prompt.split("Blog Title: \"").nth(1) {
            let title = rest.split('"').next().unwrap_or_default();
            return Ok(format!(
                "# {title}\n\n## Introduction\n\nSome body text.\n\n{DISCLAIMER}\n"
            ));
        }

        Err(LlmError::EmptyResponse)
    }
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.general.database_url = "sqlite::memory:".to_string();
    config.llm.api_key = "test-key".to_string();
    config.generation.min_call_interval_ms = 0;
    config.observability.metrics_enabled = false;
    config
}

pub async fn spawn_app_with(config: Config, model: Arc<FakeModel>) -> Router {
    let state = lawblog::api::create_app_state_with_generator(config, model, None)
        .await
        .expect("Failed to create app state");
    lawblog::api::router(state)
}

pub async fn spawn_app(model: Arc<FakeModel>) -> Router {
    spawn_app_with(test_config(), model).await
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
