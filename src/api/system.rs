use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use super::{AppState, MessageResponse};

#[derive(Debug, Serialize)]
pub struct HealthLiveResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthReadyResponse {
    pub ready: bool,
    pub database: bool,
    pub blogs: Option<u64>,
    pub uptime_seconds: u64,
    pub version: &'static str,
}

/// `GET /`
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Indian Law Blog Generator AI".to_string(),
    })
}

/// `GET /health/live`
pub async fn health_live() -> Json<HealthLiveResponse> {
    Json(HealthLiveResponse { status: "ok" })
}

/// `GET /health/ready`
///
/// Readiness probe that checks database connectivity and reports the stored post count.
pub async fn health_ready(State(state): State<Arc<AppState>>) -> Response {
    let database = state.store.ping().await.is_ok();
    let blogs = if database {
        state.store.count_blogs().await.ok()
    } else {
        None
    };
    let status = if database {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthReadyResponse {
            ready: database,
            database,
            blogs,
            uptime_seconds: state.start_time.elapsed().as_secs(),
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
        .into_response()
}
