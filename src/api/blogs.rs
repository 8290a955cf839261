//! Law blog endpoints.
//!
//! Listing and single-post reads are public. Generation and deletion live
//! under `/admin` and sit behind the admin key check when one is configured.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::{validate_count, validate_topic};
use super::{
    ApiError, AppState, BlogDto, BlogListResponse, DeleteResponse, GenerateRequest,
};

/// `GET /api/law-generator/all-blogs`
///
/// Every stored blog, newest first. Filtering and pagination happen client-side.
pub async fn list_blogs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BlogListResponse>, ApiError> {
    let blogs = state.blog_service.list_blogs().await?;
    Ok(Json(BlogListResponse::from(blogs)))
}

/// `GET /api/law-generator/blog/{id}`
pub async fn get_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<BlogDto>, ApiError> {
    let blog = state.blog_service.get_blog(id).await?;
    Ok(Json(BlogDto::from(blog)))
}

/// `POST /api/law-generator/admin/generate`
///
/// Runs a generation batch for a topic or the trending sentinel and returns
/// the posts that were newly stored.
pub async fn generate_blogs(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<BlogListResponse>, ApiError> {
    validate_topic(&payload.topic)?;
    let count = validate_count(payload.count, state.config.generation.max_count)?;

    let blogs = state
        .blog_service
        .generate_blogs(&payload.topic, count)
        .await?;
    Ok(Json(BlogListResponse::from(blogs)))
}

/// `DELETE /api/law-generator/admin/blog/{id}`
pub async fn delete_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.blog_service.delete_blog(id).await?;
    Ok(Json(DeleteResponse {
        success: true,
        message: format!("Blog {id} deleted successfully."),
    }))
}
