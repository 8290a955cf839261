//! Blog generation pipeline.
//!
//! A batch is a strictly sequential chain: one list-producing model call
//! (trending headlines, or classification followed by related titles), then
//! one content call and one insert per title. List failures abort the batch;
//! content failures are written into that single post instead.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::throttle::CallThrottle;
use crate::clients::{LlmError, TextGenerator};
use crate::config::GenerationConfig;
use crate::db::Store;
use crate::models::{BlogPost, TRENDING_TOPIC};
use crate::parser::extract_json_array;
use crate::prompts;

const TRENDING_SENTINELS: [&str; 2] = ["trending", "latest news"];

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Validation(String),

    #[error("Topic is not related to Indian law.")]
    InvalidTopic,

    #[error("{0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for GenerationError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// True when the topic asks for the trending headline list instead of a subject.
#[must_use]
pub fn is_trending_topic(topic: &str) -> bool {
    let normalized = topic.trim().to_lowercase();
    TRENDING_SENTINELS.contains(&normalized.as_str())
}

/// Content stored when the model fails to write an article.
#[must_use]
pub fn content_error_placeholder(err: &LlmError) -> String {
    format!("Error: Could not generate blog content due to an API error. Details: {err}")
}

pub struct BlogGenerator {
    llm: Arc<dyn TextGenerator>,
    throttle: Arc<CallThrottle>,
    store: Store,
    settings: GenerationConfig,
}

impl BlogGenerator {
    #[must_use]
    pub fn new(
        llm: Arc<dyn TextGenerator>,
        throttle: Arc<CallThrottle>,
        store: Store,
        settings: GenerationConfig,
    ) -> Self {
        Self {
            llm,
            throttle,
            store,
            settings,
        }
    }

    async fn call_model(&self, operation: &'static str, prompt: &str) -> Result<String, LlmError> {
        let _permit = self.throttle.acquire().await;
        let start = Instant::now();

        let result = self.llm.generate(prompt).await;

        let outcome = if result.is_ok() { "success" } else { "error" };
        metrics::counter!("llm_requests_total", "operation" => operation, "outcome" => outcome)
            .increment(1);
        metrics::histogram!("llm_request_duration_seconds", "operation" => operation)
            .record(start.elapsed().as_secs_f64());

        result
    }

    /// Asks the model whether the topic belongs to Indian law.
    ///
    /// Any answer containing "yes" counts. If the call itself fails the
    /// configured fail-open/closed policy decides.
    pub async fn is_indian_law_topic(&self, topic: &str) -> bool {
        match self
            .call_model("classify_topic", &prompts::is_indian_law(topic))
            .await
        {
            Ok(answer) => answer.trim().to_lowercase().contains("yes"),
            Err(e) => {
                warn!(
                    error = %e,
                    topic = %topic,
                    fail_open = self.settings.classifier_fail_open,
                    "Topic classification call failed"
                );
                self.settings.classifier_fail_open
            }
        }
    }

    pub async fn latest_news_topics(&self) -> Vec<String> {
        let limit = self.settings.trending_limit;
        match self
            .call_model("latest_news", &prompts::latest_news(limit))
            .await
        {
            Ok(raw) => {
                let mut titles = clean_titles(extract_json_array(&raw));
                titles.truncate(limit);
                titles
            }
            Err(e) => {
                warn!(error = %e, "Fetching trending topics failed");
                Vec::new()
            }
        }
    }

    pub async fn related_blog_ideas(
        &self,
        topic: &str,
        count: usize,
        existing_titles: &[String],
    ) -> Vec<String> {
        let prompt = prompts::related_ideas(topic, count, existing_titles);
        match self.call_model("related_ideas", &prompt).await {
            Ok(raw) => clean_titles(extract_json_array(&raw)),
            Err(e) => {
                warn!(error = %e, topic = %topic, "Fetching related blog ideas failed");
                Vec::new()
            }
        }
    }

    pub async fn blog_content(&self, title: &str) -> String {
        match self
            .call_model("blog_content", &prompts::blog_from_title(title))
            .await
        {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                warn!(error = %e, title = %title, "Blog content generation failed");
                content_error_placeholder(&e)
            }
        }
    }

    /// Runs one generation batch and returns the posts that were actually stored.
    ///
    /// Prompts see the trimmed topic; posts record `search_topic` as the caller sent it.
    pub async fn generate(&self, topic: &str, count: i32) -> Result<Vec<BlogPost>, GenerationError> {
        let search_topic = topic;
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GenerationError::Validation(
                "Topic cannot be empty".to_string(),
            ));
        }
        if count > self.settings.max_count {
            return Err(GenerationError::Validation(format!(
                "Count must be at most {}",
                self.settings.max_count
            )));
        }

        if is_trending_topic(topic) {
            let titles = self.latest_news_topics().await;
            if titles.is_empty() {
                return Err(GenerationError::Upstream(
                    "AI Service failed to fetch news topics.".to_string(),
                ));
            }

            let take = usize::try_from(count)
                .ok()
                .filter(|c| *c > 0)
                .unwrap_or(titles.len());

            return self.write_posts(TRENDING_TOPIC, titles, take).await;
        }

        if !self.is_indian_law_topic(topic).await {
            info!(topic = %topic, "Rejected off-topic generation request");
            return Err(GenerationError::InvalidTopic);
        }

        let count = usize::try_from(count)
            .ok()
            .filter(|c| *c > 0)
            .unwrap_or_else(|| usize::try_from(self.settings.default_count).unwrap_or(1));

        let titles = self.related_blog_ideas(topic, count, &[]).await;
        if titles.is_empty() {
            return Err(GenerationError::Upstream(
                "AI Service failed to generate blog ideas.".to_string(),
            ));
        }

        self.write_posts(search_topic, titles, count).await
    }

    async fn write_posts(
        &self,
        search_topic: &str,
        titles: Vec<String>,
        limit: usize,
    ) -> Result<Vec<BlogPost>, GenerationError> {
        let start = Instant::now();
        let mut created = Vec::new();
        let mut skipped = 0usize;

        for title in titles.into_iter().take(limit) {
            let content = self.blog_content(&title).await;

            match self.store.create_blog(search_topic, &title, &content).await? {
                Some(post) => {
                    metrics::counter!("blogs_generated_total").increment(1);
                    created.push(post);
                }
                None => {
                    debug!(title = %title, "Duplicate title dropped");
                    skipped += 1;
                }
            }
        }

        info!(
            event = "blog_batch_finished",
            topic = %search_topic,
            created = created.len(),
            duplicates = skipped,
            duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Blog generation batch completed"
        );

        Ok(created)
    }
}

/// Trims titles, drops blanks and repeats while keeping the model's order.
fn clean_titles(titles: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    titles
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}
