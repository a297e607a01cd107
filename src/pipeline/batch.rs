//! Batch summarization of many documents or dataset rows
//!
//! Documents are independent, so they fan out over rayon's global pool.
//! Output order always matches input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::runner::Summarizer;
use crate::embedding::EmbeddingSource;
use crate::errors::Result;

/// One input row of a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Row identifier in the source dataset
    pub row: usize,
    /// Document text; missing or null text counts as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

impl DatasetRow {
    pub fn new(row: usize, text: impl Into<String>) -> Self {
        Self {
            row,
            text: text.into(),
        }
    }

    /// Parse a JSON array of rows
    pub fn parse_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number rows from 0 in iteration order
    pub fn from_texts<I, S>(texts: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(row, text)| Self::new(row, text))
            .collect()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Summary of one dataset row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSummary {
    pub row: usize,
    pub text: String,
    pub summary: String,
}

impl<E: EmbeddingSource + Sync> Summarizer<E> {
    /// Summarize every document, in parallel
    pub fn summarize_batch<S>(&self, documents: &[S], sentence_count: usize) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        documents
            .par_iter()
            .map(|doc| self.summarize(doc.as_ref(), sentence_count))
            .collect()
    }

    /// Summarize dataset rows, one summary per row
    ///
    /// Rows with blank text get an empty summary instead of being dropped.
    pub fn summarize_rows(&self, rows: &[DatasetRow], sentence_count: usize) -> Vec<RowSummary> {
        let summaries: Vec<RowSummary> = rows
            .par_iter()
            .map(|row| RowSummary {
                row: row.row,
                text: row.text.clone(),
                summary: self.summarize(&row.text, sentence_count),
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::info!(
            rows = summaries.len(),
            empty = summaries.iter().filter(|s| s.summary.is_empty()).count(),
            "summarized dataset"
        );

        summaries
    }
}
