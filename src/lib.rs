//! # sentrank
//!
//! Extractive summarization: sentences are embedded as the mean of their
//! word vectors, linked by cosine similarity, ranked with PageRank, and the
//! top sentences are returned in document order.
//!
//! ```no_run
//! use sentrank::{Summarizer, SummarizerConfig};
//!
//! let summarizer = Summarizer::from_config(SummarizerConfig::default())?;
//! let summary = summarizer.summarize("First sentence. Second one. Third.", 2);
//! println!("{summary}");
//! # Ok::<(), sentrank::SummarizerError>(())
//! ```
//!
//! Without an embedding file the store starts degraded and summaries fall
//! back to the leading sentences of the document.

pub mod embedding;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use embedding::{EmbeddingSource, EmbeddingStore};
pub use errors::{Result, SummarizerError};
pub use nlp::stopwords::StopwordFilter;
pub use pagerank::SentenceScore;
pub use pipeline::batch::{DatasetRow, RowSummary};
pub use pipeline::observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use pipeline::runner::{Summarizer, SummaryResult};
pub use summarizer::selector::SelectedSentence;
pub use types::{Sentence, SummarizerConfig, Token};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
