//! Domain service for generated law blogs.
//!
//! Read access is public; generation and deletion are admin operations.

use crate::models::BlogPost;
use crate::services::generation::GenerationError;
use thiserror::Error;

/// Errors specific to blog operations.
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Blog not found: {0}")]
    NotFound(i32),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Topic rejected: {0}")]
    InvalidTopic(String),

    #[error("Upstream AI failure: {0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for BlogError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for BlogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<GenerationError> for BlogError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Validation(msg) => Self::Validation(msg),
            err @ GenerationError::InvalidTopic => Self::InvalidTopic(err.to_string()),
            GenerationError::Upstream(msg) => Self::Upstream(msg),
            GenerationError::Database(msg) => Self::Database(msg),
        }
    }
}

/// Domain service trait for blogs.
#[async_trait::async_trait]
pub trait BlogService: Send + Sync {
    /// Lists every stored blog, newest first.
    async fn list_blogs(&self) -> Result<Vec<BlogPost>, BlogError>;

    /// Gets a single blog by id.
    async fn get_blog(&self, id: i32) -> Result<BlogPost, BlogError>;

    /// Generates and stores a batch for `topic`, returning only newly stored posts.
    async fn generate_blogs(
        &self,
        topic: &str,
        count: Option<i32>,
    ) -> Result<Vec<BlogPost>, BlogError>;

    /// Deletes a blog by id.
    async fn delete_blog(&self, id: i32) -> Result<(), BlogError>;
}
