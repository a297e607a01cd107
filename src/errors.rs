//! Error types
//!
//! Only configuration and embedding-load problems are errors. Per-document
//! anomalies (empty input, out-of-vocabulary tokens, a degraded store) are
//! handled inside the pipeline and never surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading embeddings or reading configuration
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// The embedding source could not be opened or read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry's dimensionality differs from the first entry in the source
    #[error("malformed embedding on line {line}: expected {expected} values, found {found}")]
    MalformedEmbedding {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A vector component failed to parse as a float
    #[error("invalid embedding value on line {line}: {value:?}")]
    InvalidEmbeddingValue { line: usize, value: String },

    /// A token with no vector components
    #[error("embedding for {token:?} on line {line} has no values")]
    MissingEmbeddingValues { line: usize, token: String },

    /// The source contained no entries at all
    #[error("embedding source contains no entries")]
    EmptyEmbeddingSource,

    /// Configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummarizerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizerError>;
