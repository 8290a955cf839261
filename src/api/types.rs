use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::BlogPost;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BlogDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<BlogPost> for BlogDto {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BlogListResponse {
    pub blogs: Vec<BlogDto>,
}

impl From<Vec<BlogPost>> for BlogListResponse {
    fn from(posts: Vec<BlogPost>) -> Self {
        Self {
            blogs: posts.into_iter().map(BlogDto::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    /// Falls back to `generation.default_count` when absent.
    #[serde(default)]
    pub count: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
