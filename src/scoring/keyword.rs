//! Unweighted keyword-count model and its JSON artifact.
//!
//! The model counts hits against two word lists and never reports Neutral:
//! a tie, including an empty input, is labelled Negative.

use super::{tokenize, Scorer};
use crate::error::{Result, SentimentError};
use crate::types::scoring::{Score, ScoreResult, Sentiment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

pub const ENGINE_NAME: &str = "keyword";
pub const ARTIFACT_VERSION: u32 = 1;

const DEFAULT_POSITIVE: [&str; 6] = ["good", "great", "love", "excellent", "amazing", "perfect"];
const DEFAULT_NEGATIVE: [&str; 6] = ["bad", "terrible", "hate", "worst", "awful", "horrible"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordModel {
    positive_words: Vec<String>,
    negative_words: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct KeywordArtifact {
    version: u32,
    created_at: DateTime<Utc>,
    positive_words: Vec<String>,
    negative_words: Vec<String>,
    checksum: String,
}

impl KeywordModel {
    pub fn new(positive_words: Vec<String>, negative_words: Vec<String>) -> Self {
        Self {
            positive_words,
            negative_words,
        }
    }

    /// Reads an artifact written by [`KeywordModel::save`], checking its
    /// version and checksum.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SentimentError::PathNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let artifact: KeywordArtifact = serde_json::from_str(&content)?;

        if artifact.version != ARTIFACT_VERSION {
            return Err(SentimentError::InvalidModel(format!(
                "{}: unsupported artifact version {} (expected {ARTIFACT_VERSION})",
                path.display(),
                artifact.version
            )));
        }

        let model = Self::new(artifact.positive_words, artifact.negative_words);
        let expected = model.checksum();
        if artifact.checksum != expected {
            return Err(SentimentError::InvalidModel(format!(
                "{}: checksum mismatch",
                path.display()
            )));
        }

        tracing::debug!(
            path = %path.display(),
            created_at = %artifact.created_at,
            "keyword model loaded"
        );
        Ok(model)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let artifact = KeywordArtifact {
            version: ARTIFACT_VERSION,
            created_at: Utc::now(),
            positive_words: self.positive_words.clone(),
            negative_words: self.negative_words.clone(),
            checksum: self.checksum(),
        };
        let json = serde_json::to_string_pretty(&artifact)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn checksum(&self) -> String {
        let mut hasher = Sha256::new();
        for word in &self.positive_words {
            hasher.update(b"+");
            hasher.update(word.as_bytes());
            hasher.update(b"\n");
        }
        for word in &self.negative_words {
            hasher.update(b"-");
            hasher.update(word.as_bytes());
            hasher.update(b"\n");
        }
        hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }
}

impl Default for KeywordModel {
    fn default() -> Self {
        Self::new(
            DEFAULT_POSITIVE.iter().map(|word| word.to_string()).collect(),
            DEFAULT_NEGATIVE.iter().map(|word| word.to_string()).collect(),
        )
    }
}

impl Scorer for KeywordModel {
    fn name(&self) -> &'static str {
        ENGINE_NAME
    }

    fn predict(&self, text: &str) -> ScoreResult {
        let words = tokenize::words(text);
        let pos_hits = words
            .iter()
            .filter(|word| self.positive_words.contains(*word))
            .count();
        let neg_hits = words
            .iter()
            .filter(|word| self.negative_words.contains(*word))
            .count();
        let denominator = words.len().max(1) as Score;

        if pos_hits > neg_hits {
            ScoreResult::new(Sentiment::Positive, pos_hits as Score / denominator)
        } else {
            ScoreResult::new(Sentiment::Negative, neg_hits as Score / denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn counts_hits_without_length_filter() {
        let result = KeywordModel::default().predict("Good, great and so on");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.prediction, 1);
        assert_eq!(result.confidence, 2.0 / 5.0);
        assert!(result.pos_score.is_none());
    }

    #[test]
    fn ties_and_empty_input_are_negative() {
        let model = KeywordModel::default();

        let tie = model.predict("good bad");
        assert_eq!(tie.sentiment, Sentiment::Negative);
        assert_eq!(tie.confidence, 0.5);
        assert_eq!(tie.prediction, 0);

        let empty = model.predict("");
        assert_eq!(empty.sentiment, Sentiment::Negative);
        assert_eq!(empty.confidence, 0.0);
    }

    #[test]
    fn confidence_is_not_rounded() {
        let result = KeywordModel::default().predict("awful one two");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.confidence, 1.0 / 3.0);
    }

    #[test]
    fn saved_model_loads_back() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("models/keyword.json");
        let model = KeywordModel::new(vec!["nice".to_string()], vec!["meh".to_string()]);
        model.save(&path).expect("model should save");

        let loaded = KeywordModel::load(&path).expect("model should load");
        assert_eq!(loaded, model);
        assert_eq!(loaded.predict("nice").sentiment, Sentiment::Positive);
    }

    #[test]
    fn load_rejects_tampered_word_lists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("keyword.json");
        KeywordModel::default().save(&path).expect("model should save");

        let content = fs::read_to_string(&path).expect("artifact should read");
        fs::write(&path, content.replace("\"perfect\"", "\"fine\"")).expect("artifact should write");

        let err = KeywordModel::load(&path).expect_err("tampered artifact should fail");
        assert!(err.to_string().contains("checksum mismatch"));
    }

    #[test]
    fn load_rejects_unknown_version() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("keyword.json");
        KeywordModel::default().save(&path).expect("model should save");

        let content = fs::read_to_string(&path).expect("artifact should read");
        fs::write(&path, content.replace("\"version\": 1", "\"version\": 9"))
            .expect("artifact should write");

        let err = KeywordModel::load(&path).expect_err("unknown version should fail");
        assert!(matches!(err, SentimentError::InvalidModel(_)));
        assert!(err.to_string().contains("unsupported artifact version 9"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = KeywordModel::load(&dir.path().join("absent.json"))
            .expect_err("missing artifact should fail");
        assert!(matches!(err, SentimentError::PathNotFound(_)));
    }
}
