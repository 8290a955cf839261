use crate::entities::{generated_law_blogs, prelude::*};
use crate::models::BlogPost;
use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set, SqlErr,
    TryInsertResult, sea_query::OnConflict,
};
use tracing::{debug, info};

/// Repository for generated blog posts
pub struct BlogRepository {
    conn: DatabaseConnection,
}

impl BlogRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: generated_law_blogs::Model) -> BlogPost {
        BlogPost {
            id: m.id,
            search_topic: m.search_topic,
            title: m.title,
            content: m.content,
            created_at: m.created_at,
        }
    }

    /// Newest first. Ties on the timestamp fall back to insertion order.
    pub async fn list_all(&self) -> Result<Vec<BlogPost>> {
        let rows = GeneratedLawBlogs::find()
            .order_by_desc(generated_law_blogs::Column::CreatedAt)
            .order_by_desc(generated_law_blogs::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<BlogPost>> {
        let row = GeneratedLawBlogs::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    /// Inserts a post unless the title is already taken, in which case `None` is returned.
    pub async fn create(&self, topic: &str, title: &str, content: &str) -> Result<Option<BlogPost>> {
        let active_model = generated_law_blogs::ActiveModel {
            search_topic: Set(topic.to_string()),
            title: Set(title.to_string()),
            content: Set(content.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = GeneratedLawBlogs::insert(active_model)
            .on_conflict(
                OnConflict::column(generated_law_blogs::Column::Title)
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(&self.conn)
            .await;

        let inserted = match result {
            Ok(TryInsertResult::Inserted(res)) => res,
            Ok(TryInsertResult::Conflicted | TryInsertResult::Empty) => {
                debug!(title = %title, "Blog title already exists, skipping insert");
                return Ok(None);
            }
            Err(err) if is_unique_violation(&err) => {
                debug!(title = %title, "Blog title already exists, skipping insert");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let post = self.get(inserted.last_insert_id).await?;
        if let Some(post) = &post {
            info!(blog_id = post.id, title = %post.title, "Stored generated blog");
        }
        Ok(post)
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = GeneratedLawBlogs::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(GeneratedLawBlogs::find().count(&self.conn).await?)
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
