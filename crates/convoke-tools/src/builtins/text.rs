//! Built-in text statistics tools.

use crate::builtins::utils::parse_args;
use crate::tool::{ParamKind, ParamSpec, Tool};
use async_trait::async_trait;
use convoke_protocol::ToolError;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::collections::HashMap;

/// Default keyword cap.
const DEFAULT_MAX_KEYWORDS: i64 = 10;

/// Words excluded from keyword ranking.
const STOPWORDS: [&str; 31] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should",
];

/// Punctuation trimmed from word edges before ranking.
const EDGE_PUNCTUATION: [char; 11] = ['.', ',', '!', '?', ';', ':', '"', '(', ')', '[', ']'];

/// Arguments for tools taking only a text blob.
#[derive(Debug, Deserialize)]
struct TextArgs {
    text: String,
}

/// Arguments for CountCharactersTool.
#[derive(Debug, Deserialize)]
struct CountCharactersArgs {
    text: String,
    include_spaces: bool,
}

/// Arguments for the keyword-producing tools.
#[derive(Debug, Deserialize)]
struct KeywordArgs {
    text: String,
    max_keywords: usize,
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn count_characters(text: &str, include_spaces: bool) -> usize {
    if include_spaces {
        text.chars().count()
    } else {
        text.chars().filter(|ch| *ch != ' ').count()
    }
}

/// Rank keywords by frequency, ties broken by first occurrence.
fn keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for raw in lowered.split_whitespace() {
        let word = raw.trim_matches(&EDGE_PUNCTUATION[..]);
        if word.chars().count() <= 2 || STOPWORDS.contains(&word) {
            continue;
        }
        let entry = counts.entry(word.to_string()).or_insert(0);
        if *entry == 0 {
            order.push(word.to_string());
        }
        *entry += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            (word, count)
        })
        .collect();
    ranked.sort_by(|left, right| right.1.cmp(&left.1));
    ranked
        .into_iter()
        .take(max_keywords)
        .map(|(word, _)| word)
        .collect()
}

/// Tool counting whitespace-separated words.
#[derive(Debug, Default)]
pub struct CountWordsTool;

#[async_trait]
impl Tool for CountWordsTool {
    fn name(&self) -> &str {
        "count_words"
    }

    fn description(&self) -> &str {
        "Count the words in a text"
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::required(
            "text",
            ParamKind::String,
            "Text to analyze",
        )]
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let input: TextArgs = parse_args(args)?;
        Ok(json!(count_words(&input.text)))
    }
}

/// Tool counting characters, optionally excluding spaces.
#[derive(Debug, Default)]
pub struct CountCharactersTool;

#[async_trait]
impl Tool for CountCharactersTool {
    fn name(&self) -> &str {
        "count_characters"
    }

    fn description(&self) -> &str {
        "Count the characters in a text"
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::required("text", ParamKind::String, "Text to analyze"),
            ParamSpec::optional(
                "include_spaces",
                ParamKind::Boolean,
                "Whether spaces count as characters",
                json!(true),
            ),
        ]
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let input: CountCharactersArgs = parse_args(args)?;
        Ok(json!(count_characters(&input.text, input.include_spaces)))
    }
}

/// Tool extracting the most frequent keywords from a text.
#[derive(Debug, Default)]
pub struct ExtractKeywordsTool;

#[async_trait]
impl Tool for ExtractKeywordsTool {
    fn name(&self) -> &str {
        "extract_keywords"
    }

    fn description(&self) -> &str {
        "Extract the most frequent keywords from a text"
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::required("text", ParamKind::String, "Text to analyze"),
            ParamSpec::optional(
                "max_keywords",
                ParamKind::Integer,
                "Maximum number of keywords to extract",
                json!(DEFAULT_MAX_KEYWORDS),
            ),
        ]
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let input: KeywordArgs = parse_args(args)?;
        Ok(json!(keywords(&input.text, input.max_keywords)))
    }
}

/// Tool combining word/character counts with keyword extraction.
#[derive(Debug, Default)]
pub struct AnalyzeTextTool;

#[async_trait]
impl Tool for AnalyzeTextTool {
    fn name(&self) -> &str {
        "analyze_text"
    }

    fn description(&self) -> &str {
        "Analyze text and extract keywords and statistics"
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::required("text", ParamKind::String, "Text to analyze"),
            ParamSpec::optional(
                "max_keywords",
                ParamKind::Integer,
                "Maximum number of keywords to extract",
                json!(DEFAULT_MAX_KEYWORDS),
            ),
        ]
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let input: KeywordArgs = parse_args(args)?;
        Ok(json!({
            "word_count": count_words(&input.text),
            "character_count": count_characters(&input.text, true),
            "keywords": keywords(&input.text, input.max_keywords),
            "text_length": input.text.chars().count(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::{AnalyzeTextTool, CountCharactersTool, CountWordsTool, ExtractKeywordsTool};
    use crate::tool::Tool;
    use pretty_assertions::assert_eq;
    use serde_json::{Map, Value, json};

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().expect("object").clone()
    }

    #[tokio::test]
    async fn counts_words_and_characters() {
        let words = CountWordsTool
            .call(&params(json!({ "text": "one two  three" })))
            .await
            .expect("words");
        assert_eq!(words, json!(3));

        let with_spaces = CountCharactersTool
            .call(&params(json!({ "text": "a b", "include_spaces": true })))
            .await
            .expect("chars");
        assert_eq!(with_spaces, json!(3));

        let without_spaces = CountCharactersTool
            .call(&params(json!({ "text": "a b", "include_spaces": false })))
            .await
            .expect("chars");
        assert_eq!(without_spaces, json!(2));
    }

    #[tokio::test]
    async fn keywords_rank_by_frequency_with_first_occurrence_ties() {
        let text = "Learning models. Learning systems, learning pipelines; models ship.";
        let keywords = ExtractKeywordsTool
            .call(&params(json!({ "text": text, "max_keywords": 3 })))
            .await
            .expect("keywords");

        assert_eq!(keywords, json!(["learning", "models", "systems"]));
    }

    #[tokio::test]
    async fn keywords_skip_stopwords_and_short_words() {
        let keywords = ExtractKeywordsTool
            .call(&params(json!({ "text": "the cat is on an old mat", "max_keywords": 10 })))
            .await
            .expect("keywords");
        assert_eq!(keywords, json!(["cat", "old", "mat"]));
    }

    #[tokio::test]
    async fn analyze_text_reports_all_statistics() {
        let report = AnalyzeTextTool
            .call(&params(json!({ "text": "Rust compilers compile Rust.", "max_keywords": 2 })))
            .await
            .expect("report");

        assert_eq!(report["word_count"], json!(4));
        assert_eq!(report["character_count"], json!(28));
        assert_eq!(report["text_length"], json!(28));
        assert_eq!(report["keywords"], json!(["rust", "compilers"]));
    }
}
