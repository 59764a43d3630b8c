//! Reads the raw word lists handed to the lexicon at startup.
//!
//! Lists are either JSON documents holding one array under a well-known key
//! (`{"words": [...]}`) or plain text files with one entry per line. Entries
//! are returned as-is; sanitizing is left to the lexicon.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tokio::fs;

use crate::config::LexiconConfig;

pub const DICTIONARY_KEY: &str = "words";
pub const PREFIXES_KEY: &str = "prefixes";
pub const NSFW_KEY: &str = "nsfw";

/// The three raw lists a lexicon is built from
#[derive(Debug, Clone, Default)]
pub struct LexiconContent {
    pub words: Vec<String>,
    pub prefixes: Vec<String>,
    pub nsfw_words: Vec<String>,
}

impl LexiconContent {
    /// Load every list named in the config.
    ///
    /// The dictionary is required; missing prefix or NSFW lists only produce a warning.
    pub async fn load(config: &LexiconConfig) -> Result<Self> {
        let words = load_list(&config.dictionary_path, DICTIONARY_KEY)
            .await
            .with_context(|| format!("Failed to load dictionary from {}", config.dictionary_path))?;
        let prefixes = load_optional_list(&config.prefixes_path, PREFIXES_KEY).await;
        let nsfw_words = load_optional_list(&config.nsfw_path, NSFW_KEY).await;

        Ok(Self {
            words,
            prefixes,
            nsfw_words,
        })
    }
}

/// Load one list from a JSON document or a line-based text file
pub async fn load_list<P: AsRef<Path>>(path: P, key: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read {}", path.display()))?;

    let entries = if is_json(path) {
        parse_json_list(&content, key)
            .with_context(|| format!("Invalid list in {}", path.display()))?
    } else {
        parse_line_list(&content)
    };

    tracing::info!("Loaded {} entries from {}", entries.len(), path.display());

    Ok(entries)
}

async fn load_optional_list(path: &str, key: &str) -> Vec<String> {
    match load_list(path, key).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to load \"{}\" list: {:#}. Continuing without it.", key, e);
            Vec::new()
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Extract the string array stored under `key`
pub fn parse_json_list(content: &str, key: &str) -> Result<Vec<String>> {
    let document: Value = serde_json::from_str(content).context("Malformed JSON")?;

    let entries = document
        .get(key)
        .with_context(|| format!("Key \"{}\" not found in JSON", key))?
        .as_array()
        .with_context(|| format!("Key \"{}\" is not an array", key))?;

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            entry
                .as_str()
                .map(str::to_owned)
                .with_context(|| format!("Entry {} under \"{}\" is not a string", idx, key))
        })
        .collect()
}

/// One entry per line; blank lines are dropped
pub fn parse_line_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Write a fixture into a per-process temp directory
    async fn write_fixture(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lexicon-content-{}", std::process::id()));
        fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join(name);
        fs::write(&path, content).await.unwrap();
        path
    }

    #[test]
    fn test_parse_json_list() {
        let entries = parse_json_list(r#"{"words": ["cat", " Dog ", ""]}"#, "words").unwrap();
        assert_eq!(entries, vec!["cat", " Dog ", ""]);
    }

    #[test]
    fn test_parse_json_list_missing_key() {
        let err = parse_json_list(r#"{"prefixes": ["ca"]}"#, "words").unwrap_err();
        assert!(err.to_string().contains("\"words\""));
    }

    #[test]
    fn test_parse_json_list_rejects_bad_shapes() {
        assert!(parse_json_list(r#"{"words": "cat"}"#, "words").is_err());
        assert!(parse_json_list(r#"{"words": ["cat", 3]}"#, "words").is_err());
        assert!(parse_json_list("not json", "words").is_err());
    }

    #[test]
    fn test_parse_line_list() {
        let entries = parse_line_list("cat\n\n  dog\r\n   \nbird");
        assert_eq!(entries, vec!["cat", "  dog", "bird"]);
    }

    #[tokio::test]
    async fn test_load_json_and_text_lists() {
        let json = write_fixture("words.json", r#"{"words": ["cat", "car"]}"#).await;
        let text = write_fixture("prefixes.txt", "ca\ndo\n").await;

        assert_eq!(load_list(&json, DICTIONARY_KEY).await.unwrap(), vec!["cat", "car"]);
        assert_eq!(load_list(&text, PREFIXES_KEY).await.unwrap(), vec!["ca", "do"]);
    }

    #[tokio::test]
    async fn test_load_content_tolerates_missing_optional_lists() {
        let words = write_fixture("dictionary.json", r#"{"words": ["cat"]}"#).await;
        let config = LexiconConfig {
            dictionary_path: words.display().to_string(),
            prefixes_path: "/nonexistent/prefixes.json".to_string(),
            nsfw_path: "/nonexistent/nsfw.json".to_string(),
            ..LexiconConfig::default()
        };

        let content = LexiconContent::load(&config).await.unwrap();
        assert_eq!(content.words, vec!["cat"]);
        assert!(content.prefixes.is_empty());
        assert!(content.nsfw_words.is_empty());
    }

    #[tokio::test]
    async fn test_load_content_requires_dictionary() {
        let config = LexiconConfig {
            dictionary_path: "/nonexistent/dictionary.json".to_string(),
            ..LexiconConfig::default()
        };

        assert!(LexiconContent::load(&config).await.is_err());
    }
}
