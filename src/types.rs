//! Core data types shared across the pipeline

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizerError};

/// A normalized token belonging to one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased surface form
    pub text: String,
    /// Normalized root form
    pub lemma: String,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
        }
    }
}

/// A sentence of the input document
///
/// `index` is the position in the document and is carried explicitly through
/// every stage; downstream code never infers order from container position.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Trimmed original text, used verbatim in the summary
    pub text: String,
    /// Byte offset of the first character in the document
    pub start: usize,
    /// Byte offset one past the last character in the document
    pub end: usize,
    /// Sentence index (0-based)
    pub index: usize,
    /// Normalized tokens (stopwords removed)
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Whether normalization left no tokens in this sentence
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Configuration for the summarizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Stopword language code
    pub language: String,
    /// Text placed between selected sentences
    pub separator: String,
    /// Ranking iteration cap
    pub max_iterations: usize,
    /// Ranking stops once no score moves by this much or more
    pub convergence_threshold: f64,
    /// Sentence count used when the caller does not supply one
    pub default_sentence_count: usize,
    /// Embedding files tried in order at startup
    pub embedding_paths: Vec<PathBuf>,
    /// Vector dimension used when no embedding file is found
    pub embedding_dimension: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            separator: " ".to_string(),
            max_iterations: 100,
            convergence_threshold: 1e-4,
            default_sentence_count: 3,
            embedding_paths: vec![
                PathBuf::from("glove.6B.100d.txt"),
                PathBuf::from("../glove.6B.100d.txt"),
            ],
            embedding_dimension: 100,
        }
    }
}

impl SummarizerConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SummarizerError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Check that every field is usable
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(SummarizerError::invalid_config(
                "max_iterations must be at least 1",
            ));
        }
        if !self.convergence_threshold.is_finite() || self.convergence_threshold <= 0.0 {
            return Err(SummarizerError::invalid_config(format!(
                "convergence_threshold must be a positive number, got {}",
                self.convergence_threshold
            )));
        }
        if self.default_sentence_count == 0 {
            return Err(SummarizerError::invalid_config(
                "default_sentence_count must be at least 1",
            ));
        }
        if self.embedding_dimension == 0 {
            return Err(SummarizerError::invalid_config(
                "embedding_dimension must be at least 1",
            ));
        }
        Ok(())
    }

    /// Set the sentence separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
