//! `SeaORM` implementation of the `BlogService` trait.

use crate::db::Store;
use crate::models::BlogPost;
use crate::services::blog_service::{BlogError, BlogService};
use crate::services::generation::BlogGenerator;
use async_trait::async_trait;
use tracing::info;

pub struct SeaOrmBlogService {
    store: Store,
    generator: BlogGenerator,
    default_count: i32,
}

impl SeaOrmBlogService {
    #[must_use]
    pub const fn new(store: Store, generator: BlogGenerator, default_count: i32) -> Self {
        Self {
            store,
            generator,
            default_count,
        }
    }
}

#[async_trait]
impl BlogService for SeaOrmBlogService {
    async fn list_blogs(&self) -> Result<Vec<BlogPost>, BlogError> {
        Ok(self.store.list_blogs().await?)
    }

    async fn get_blog(&self, id: i32) -> Result<BlogPost, BlogError> {
        self.store
            .get_blog(id)
            .await?
            .ok_or(BlogError::NotFound(id))
    }

    async fn generate_blogs(
        &self,
        topic: &str,
        count: Option<i32>,
    ) -> Result<Vec<BlogPost>, BlogError> {
        let count = count.unwrap_or(self.default_count);
        info!(topic = %topic, count, "Starting blog generation");
        Ok(self.generator.generate(topic, count).await?)
    }

    async fn delete_blog(&self, id: i32) -> Result<(), BlogError> {
        if self.store.delete_blog(id).await? {
            metrics::counter!("blogs_deleted_total").increment(1);
            info!(blog_id = id, "Deleted blog");
            Ok(())
        } else {
            Err(BlogError::NotFound(id))
        }
    }
}
