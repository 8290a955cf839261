//! Prompt templates sent to the language model.
//!
//! Templates use `{name}` placeholders and are rendered with plain string
//! substitution; the rendered text is sent as a single user turn.

/// Every generated article must end with this sentence.
pub const DISCLAIMER: &str = "Disclaimer: This article is for informational purposes only and does not constitute legal advice. Please consult with a qualified legal professional for any specific issues.";

const IS_INDIAN_LAW_TEMPLATE: &str = r#"Analyze the following topic. Is it related to the Indian legal system, Indian legislation, courts in India, or specific Indian acts?
Answer with only a single word: 'Yes' or 'No'.

Topic: "{topic}""#;

const LATEST_NEWS_TEMPLATE: &str = r#"You are a legal news aggregator for India.
List the top {limit} most recent and significant topics or news headlines in Indian law.

IMPORTANT: Provide the output ONLY as a valid JSON array of strings. Do not include any other text, explanation, or markdown formatting. Your response must start with '[' and end with ']'.

Example format:
["Title of News 1", "Title of News 2", "Title of News 3"]"#;

const RELATED_IDEAS_TEMPLATE: &str = r#"You are a legal content strategist. Based on the user's main topic, generate {count} unique and engaging blog post titles that are related but distinct.
Do not include any of the titles from the 'existing_titles' list.

Main Topic: "{topic}"
Existing Titles to Exclude: {existing_titles}

IMPORTANT: Provide the output ONLY as a valid JSON array of strings. Do not include any other text, explanation, or markdown formatting. Your response must start with '[' and end with ']'.

Example format: ["Unique Idea 1", "Unique Idea 2", "Unique Idea 3"]"#;

const BLOG_TEMPLATE: &str = r#"You are an AI legal assistant specializing in Indian law. Your task is to write a comprehensive, well-structured, and clear blog post on the following topic.

Blog Title: "{title}"

Instructions:
1.  **Structure:** The blog post must have an introduction, a main body with several sub-headings, and a concluding summary.
2.  **Word Count:** Approximately 600-800 words.
3.  **Tone:** Informative and professional, yet easy for a layperson to understand.
4.  **Content:**
    * Explain the key legal concepts clearly.
    * If applicable, cite relevant sections of Acts (e.g., Section 438 of the CrPC) or Articles of the Constitution of India.
    * Do NOT invent case laws or section numbers. If you are not certain, state the general legal principle without specific citations.
5.  **Formatting:** Use Markdown for formatting (headings, bold text, lists).
6.  **Disclaimer:** MUST conclude the blog post with the following exact text: '{disclaimer}'

Output only the complete blog text in Markdown format."#;

#[must_use]
pub fn is_indian_law(topic: &str) -> String {
    IS_INDIAN_LAW_TEMPLATE.replace("{topic}", topic)
}

#[must_use]
pub fn latest_news(limit: usize) -> String {
    LATEST_NEWS_TEMPLATE.replace("{limit}", &limit.to_string())
}

#[must_use]
pub fn related_ideas(topic: &str, count: usize, existing_titles: &[String]) -> String {
    // Serializing a Vec<String> cannot fail.
    let existing = serde_json::to_string(existing_titles).unwrap_or_else(|_| "[]".to_string());

    // Substitute the topic last so braces inside user text are never re-expanded.
    RELATED_IDEAS_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{existing_titles}", &existing)
        .replace("{topic}", topic)
}

#[must_use]
pub fn blog_from_title(title: &str) -> String {
    BLOG_TEMPLATE
        .replace("{disclaimer}", DISCLAIMER)
        .replace("{title}", title)
}
