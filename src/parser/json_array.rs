use tracing::debug;

/// Pulls a JSON array of strings out of free-form model output.
///
/// The model is told to answer with bare JSON but often wraps it in prose or
/// code fences. Everything before the first `[` and after the last `]` is
/// ignored; text in between must be valid JSON. Anything unparseable yields
/// an empty list.
#[must_use]
pub fn extract_json_array(text: &str) -> Vec<String> {
    let candidate = match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if end > start => &text[start..=end],
        _ => text.trim(),
    };

    match serde_json::from_str::<Vec<String>>(candidate) {
        Ok(items) => items,
        Err(e) => {
            debug!(error = %e, response = %text, "Failed to decode JSON array from model response");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_surrounded_by_noise() {
        assert_eq!(
            extract_json_array(r#"noise ["a","b"] noise"#),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_bare_array() {
        assert_eq!(extract_json_array(r#"["a"]"#), vec!["a".to_string()]);
    }

    #[test]
    fn test_not_json() {
        assert!(extract_json_array("not json").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_json_array("").is_empty());
        assert!(extract_json_array("   \n").is_empty());
    }

    #[test]
    fn test_code_fence() {
        let text = "```json\n[\"Bail under BNSS\", \"Dowry Prohibition\"]\n```";
        assert_eq!(
            extract_json_array(text),
            vec!["Bail under BNSS".to_string(), "Dowry Prohibition".to_string()]
        );
    }

    #[test]
    fn test_interior_corruption_is_rejected() {
        assert!(extract_json_array(r#"["a", b, "c"]"#).is_empty());
    }

    #[test]
    fn test_reversed_brackets_fall_back_to_whole_text() {
        assert!(extract_json_array("] nothing here [").is_empty());
    }

    #[test]
    fn test_non_string_elements() {
        assert!(extract_json_array("[1, 2, 3]").is_empty());
    }
}
