use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::prompts::DISCLAIMER;

/// Topic recorded for posts that came from the trending headline list.
pub const TRENDING_TOPIC: &str = "trending_cache";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    pub id: i32,

    pub search_topic: String,

    pub title: String,

    pub content: String,

    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    #[must_use]
    pub fn is_trending(&self) -> bool {
        self.search_topic == TRENDING_TOPIC
    }

    #[must_use]
    pub fn has_disclaimer(&self) -> bool {
        self.content.trim_end().ends_with(DISCLAIMER)
    }
}
