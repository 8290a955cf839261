use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::clients::{GeminiClient, TextGenerator};
use crate::config::Config;
use crate::db::Store;
use crate::services::{BlogGenerator, BlogService, CallThrottle, SeaOrmBlogService};

mod auth;
mod blogs;
mod error;
mod observability;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

/// Prefix shared by every law blog route.
pub const API_PREFIX: &str = "/api/law-generator";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub store: Store,

    pub blog_service: Arc<dyn BlogService>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

/// Builds the state with the real Gemini client.
pub async fn create_app_state(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let llm = Arc::new(
        GeminiClient::new(&config.llm)
            .map_err(|e| anyhow::anyhow!("Failed to build Gemini client: {e}"))?,
    );
    create_app_state_with_generator(config, llm, prometheus_handle).await
}

/// Builds the state around any text generator. Tests plug scripted models in here.
pub async fn create_app_state_with_generator(
    config: Config,
    llm: Arc<dyn TextGenerator>,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_url,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let throttle = Arc::new(CallThrottle::from_config(&config.generation));
    let generator = BlogGenerator::new(
        llm,
        throttle,
        store.clone(),
        config.generation.clone(),
    );
    let blog_service = Arc::new(SeaOrmBlogService::new(
        store.clone(),
        generator,
        config.generation.default_count,
    )) as Arc<dyn BlogService>;

    Ok(Arc::new(AppState {
        config: Arc::new(config),
        store,
        blog_service,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.config.server.cors_allowed_origins;
    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    let admin_routes = Router::new()
        .route("/generate", post(blogs::generate_blogs))
        .route("/blog/{id}", delete(blogs::delete_blog))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::admin_key_middleware,
        ));

    let blog_routes = Router::new()
        .route("/all-blogs", get(blogs::list_blogs))
        .route("/blog/{id}", get(blogs::get_blog))
        .nest("/admin", admin_routes);

    Router::new()
        .route("/", get(system::root))
        .route("/health/live", get(system::health_live))
        .route("/health/ready", get(system::health_ready))
        .route("/metrics", get(observability::get_metrics))
        .nest(API_PREFIX, blog_routes)
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::track_metrics))
}
