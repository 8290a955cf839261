use super::ApiError;

pub const MAX_TOPIC_CHARS: usize = 200;

pub fn validate_topic(topic: &str) -> Result<(), ApiError> {
    let trimmed = topic.trim();

    if trimmed.is_empty() {
        return Err(ApiError::validation("Topic cannot be empty"));
    }

    if trimmed.chars().count() > MAX_TOPIC_CHARS {
        return Err(ApiError::validation(format!(
            "Topic must be {MAX_TOPIC_CHARS} characters or less"
        )));
    }

    Ok(())
}

pub fn validate_count(count: Option<i32>, max: i32) -> Result<Option<i32>, ApiError> {
    match count {
        Some(c) if c > max => Err(ApiError::validation(format!(
            "Invalid count: {}. Count must be at most {}",
            c, max
        ))),
        other => Ok(other),
    }
}
