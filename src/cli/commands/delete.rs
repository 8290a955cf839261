//! Delete blog command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_delete_blog(config: &Config, id: i32) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_url).await?;

    let Some(blog) = store.get_blog(id).await? else {
        println!("Blog {} not found", id);
        println!("Use 'lawblog list' to see IDs");
        return Ok(());
    };

    if store.delete_blog(id).await? {
        println!("✓ Deleted blog {}: {}", id, blog.title);
    } else {
        println!("Blog {} was already removed", id);
    }

    Ok(())
}
