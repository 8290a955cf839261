//! Generate blogs command handler

use crate::api::create_app_state;
use crate::config::Config;
use crate::services::BlogError;

pub async fn cmd_generate(config: Config, topic: &str, count: Option<i32>) -> anyhow::Result<()> {
    let state = create_app_state(config, None).await?;

    println!("Generating blogs for \"{}\"...", topic);

    match state.blog_service.generate_blogs(topic, count).await {
        Ok(blogs) if blogs.is_empty() => {
            println!("No new blogs stored (all titles already existed).");
        }
        Ok(blogs) => {
            println!("✓ Stored {} blog(s):", blogs.len());
            for blog in blogs {
                let words = blog.content.split_whitespace().count();
                println!("  [{}] {} ({} words)", blog.id, blog.title, words);
                if !blog.has_disclaimer() {
                    println!("      ⚠ missing disclaimer");
                }
            }
        }
        Err(BlogError::InvalidTopic(msg) | BlogError::Validation(msg)) => {
            println!("✗ {}", msg);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
