//! List blogs command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_blogs(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_url).await?;
    let blogs = store.list_blogs().await?;

    if blogs.is_empty() {
        println!("No blogs stored yet.");
        println!();
        println!("Generate some with: lawblog generate \"topic\"");
        return Ok(());
    }

    println!("Stored Blogs ({} total)", blogs.len());
    println!("{:-<70}", "");

    for blog in blogs {
        let marker = if blog.is_trending() { "📰" } else { "•" };
        println!("{} {}", marker, blog.title);
        println!(
            "  ID: {} | Topic: {} | Created: {}",
            blog.id,
            blog.search_topic,
            blog.created_at.format("%Y-%m-%d %H:%M")
        );
    }

    println!();
    println!("Legend: 📰 Trending | • Topic");

    Ok(())
}
