use crate::models::BlogPost;
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        prepare_sqlite_file(db_url).await?;

        // Every in-memory SQLite connection is its own database, so pin the pool
        // to one connection that is never recycled.
        let in_memory = is_in_memory(db_url);
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);
        if !in_memory {
            opt.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
        }

        let conn = Database::connect(opt)
            .await
            .context("Failed to connect to database")?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn blog_repo(&self) -> repositories::blog::BlogRepository {
        repositories::blog::BlogRepository::new(self.conn.clone())
    }

    pub async fn list_blogs(&self) -> Result<Vec<BlogPost>> {
        self.blog_repo().list_all().await
    }

    pub async fn get_blog(&self, id: i32) -> Result<Option<BlogPost>> {
        self.blog_repo().get(id).await
    }

    pub async fn create_blog(
        &self,
        topic: &str,
        title: &str,
        content: &str,
    ) -> Result<Option<BlogPost>> {
        self.blog_repo().create(topic, title, content).await
    }

    pub async fn delete_blog(&self, id: i32) -> Result<bool> {
        self.blog_repo().delete(id).await
    }

    pub async fn count_blogs(&self) -> Result<u64> {
        self.blog_repo().count().await
    }
}

fn sqlite_path(db_url: &str) -> Option<&str> {
    let path_str = db_url.strip_prefix("sqlite:")?.trim_start_matches("//");
    Some(path_str.split('?').next().unwrap_or(path_str))
}

fn is_in_memory(db_url: &str) -> bool {
    sqlite_path(db_url).is_some_and(|p| p.is_empty() || p.starts_with(":memory:"))
        || db_url.contains("mode=memory")
}

/// sqlx won't create a missing SQLite file on its own.
async fn prepare_sqlite_file(db_url: &str) -> Result<()> {
    let Some(path_str) = sqlite_path(db_url) else {
        return Ok(());
    };

    if is_in_memory(db_url) {
        return Ok(());
    }

    let path = Path::new(path_str);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }
    if !path.exists() {
        tokio::fs::File::create(path)
            .await
            .with_context(|| format!("Failed to create database file: {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> Store {
        Store::new("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn create_then_get_roundtrips_fields() {
        let store = memory_store().await;

        let post = store
            .create_blog("bail", "Anticipatory Bail Explained", "body")
            .await
            .unwrap()
            .expect("post should be inserted");

        assert!(post.id > 0);
        let fetched = store.get_blog(post.id).await.unwrap().unwrap();
        assert_eq!(fetched, post);
        assert_eq!(fetched.search_topic, "bail");
    }

    #[tokio::test]
    async fn duplicate_title_is_a_noop() {
        let store = memory_store().await;

        store.create_blog("a", "Same Title", "first").await.unwrap();
        let second = store.create_blog("b", "Same Title", "second").await.unwrap();

        assert!(second.is_none());
        assert_eq!(store.count_blogs().await.unwrap(), 1);
        let all = store.list_blogs().await.unwrap();
        assert_eq!(all[0].content, "first");
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = memory_store().await;

        for title in ["one", "two", "three"] {
            store.create_blog("t", title, "c").await.unwrap();
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let all = store.list_blogs().await.unwrap();
        let titles: Vec<_> = all.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["three", "two", "one"]);
        assert!(all.windows(2).all(|w| w[0].created_at > w[1].created_at));
    }

    #[tokio::test]
    async fn delete_missing_id_leaves_store_untouched() {
        let store = memory_store().await;
        let kept = store.create_blog("t", "Kept", "c").await.unwrap().unwrap();

        assert!(!store.delete_blog(kept.id + 100).await.unwrap());
        assert_eq!(store.count_blogs().await.unwrap(), 1);

        assert!(store.delete_blog(kept.id).await.unwrap());
        assert_eq!(store.count_blogs().await.unwrap(), 0);
        assert!(store.get_blog(kept.id).await.unwrap().is_none());
    }

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://:memory:"));
        assert!(is_in_memory("sqlite:file:blogs?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite:data/lawblog.db"));
        assert!(!is_in_memory("postgres://localhost/lawblog"));
    }

    #[tokio::test]
    async fn ping_succeeds() {
        memory_store().await.ping().await.unwrap();
    }
}
