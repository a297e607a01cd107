//! Summarizer: runs the stages in order and threads their outputs.
//!
//! ```text
//! segment -> vectorize -> graph -> rank -> select
//! ```
//!
//! Each stage is timed and reported to a [`PipelineObserver`]; with the
//! `tracing` feature on, each stage also runs inside a `pipeline_stage` span.
//! Summarizing never fails. Empty input, out-of-vocabulary text and a
//! degraded embedding store all produce a valid (possibly empty) summary.

use std::sync::Arc;

use crate::embedding::{EmbeddingSource, EmbeddingStore};
use crate::errors::Result;
use crate::graph::builder::SimilarityGraph;
use crate::nlp::preprocessor::Preprocessor;
use crate::nlp::stopwords::StopwordFilter;
use crate::pagerank::sentence::SentenceRanker;
use crate::pagerank::SentenceScore;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_GRAPH,
    STAGE_RANK, STAGE_SEGMENT, STAGE_SELECT, STAGE_VECTORIZE,
};
use crate::summarizer::selector::{SelectedSentence, SentenceSelector};
use crate::summarizer::vectorizer::SentenceVectorizer;
use crate::types::SummarizerConfig;

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled this expands to nothing.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// A summary together with the ranking that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryResult {
    /// Selected sentences joined with the configured separator
    pub summary: String,
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    /// Score of every sentence in the document, in document order
    pub scores: Vec<SentenceScore>,
    /// Ranking iterations performed
    pub iterations: usize,
    /// Whether ranking converged before the iteration cap
    pub converged: bool,
}

impl SummaryResult {
    /// Number of sentences the document was split into
    pub fn document_sentences(&self) -> usize {
        self.scores.len()
    }

    /// Score of the sentence with the given document index
    pub fn score_of(&self, index: usize) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.index == index)
            .map(|s| s.score)
    }
}

/// Extractive summarizer over a shared embedding source
///
/// `E` is usually `Arc<EmbeddingStore>` so one loaded vocabulary can back
/// many summarizers and threads.
#[derive(Debug, Clone)]
pub struct Summarizer<E> {
    embeddings: E,
    preprocessor: Preprocessor,
    ranker: SentenceRanker,
    selector: SentenceSelector,
    config: SummarizerConfig,
}

impl Summarizer<Arc<EmbeddingStore>> {
    /// Load embeddings from the first existing configured path
    ///
    /// Falls back to a degraded store when no file exists.
    pub fn from_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let store = EmbeddingStore::discover(&config.embedding_paths, config.embedding_dimension)?;
        Self::new(Arc::new(store), config)
    }
}

impl<E: EmbeddingSource> Summarizer<E> {
    /// Create a summarizer over `embeddings`
    pub fn new(embeddings: E, config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(embeddings, config))
    }

    /// Create a summarizer with the default configuration
    pub fn with_defaults(embeddings: E) -> Self {
        Self::assemble(embeddings, SummarizerConfig::default())
    }

    fn assemble(embeddings: E, config: SummarizerConfig) -> Self {
        Self {
            embeddings,
            preprocessor: Preprocessor::new(&config.language),
            ranker: SentenceRanker::new(config.max_iterations, config.convergence_threshold),
            selector: SentenceSelector::new().with_separator(config.separator.clone()),
            config,
        }
    }

    /// Replace the stopword list
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.preprocessor = Preprocessor::with_stopwords(stopwords);
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn embeddings(&self) -> &E {
        &self.embeddings
    }

    /// Summarize `text` into at most `sentence_count` sentences
    ///
    /// Returns an empty string for empty input. `sentence_count` is clamped
    /// to `[1, number of sentences]`.
    pub fn summarize(&self, text: &str, sentence_count: usize) -> String {
        self.summarize_detailed(text, sentence_count).summary
    }

    /// Summarize using the configured default sentence count
    pub fn summarize_default(&self, text: &str) -> String {
        self.summarize(text, self.config.default_sentence_count)
    }

    /// Summarize and keep the scores and ranking diagnostics
    pub fn summarize_detailed(&self, text: &str, sentence_count: usize) -> SummaryResult {
        self.summarize_with_observer(text, sentence_count, &mut NoopObserver)
    }

    /// Summarize, notifying `observer` at each stage boundary
    pub fn summarize_with_observer(
        &self,
        text: &str,
        sentence_count: usize,
        observer: &mut impl PipelineObserver,
    ) -> SummaryResult {
        // Stage 1: segment into normalized sentences
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences = self.preprocessor.segment(text);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SEGMENT, &report);
            observer.on_sentences(&sentences);
            sentences
        };

        // Stage 2: one mean embedding per sentence
        let vectors = {
            trace_stage!(STAGE_VECTORIZE);
            observer.on_stage_start(STAGE_VECTORIZE);
            let clock = StageClock::start();
            let vectors = SentenceVectorizer::new(&self.embeddings).vectorize_all(&sentences);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(vectors.iter().filter(|v| !v.is_zero()).count())
                .build();
            observer.on_stage_end(STAGE_VECTORIZE, &report);
            vectors
        };

        // Stage 3: pairwise cosine similarity
        let graph = {
            trace_stage!(STAGE_GRAPH);
            observer.on_stage_start(STAGE_GRAPH);
            let clock = StageClock::start();
            let graph = SimilarityGraph::build(&vectors);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(graph.len())
                .edges(graph.edge_count())
                .build();
            observer.on_stage_end(STAGE_GRAPH, &report);
            observer.on_graph(&graph);
            graph
        };

        // Stage 4: PageRank
        let ranking = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranking = self
                .ranker
                .rank_observed(&graph, |iteration, scores| {
                    observer.on_rank_iteration(iteration, scores)
                });
            let report = StageReportBuilder::new(clock.elapsed())
                .items(ranking.scores.len())
                .iterations(ranking.iterations)
                .converged(ranking.converged)
                .residual(ranking.delta)
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            observer.on_ranking(&ranking);
            ranking
        };

        #[cfg(feature = "tracing")]
        {
            if !ranking.converged {
                tracing::warn!(
                    iterations = ranking.iterations,
                    delta = ranking.delta,
                    "ranking hit the iteration cap before converging"
                );
            }
        }

        // Stage 5: top-K in document order
        let selected = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let selected = self
                .selector
                .select_detailed(&sentences, &ranking.scores, sentence_count);
            let report = if selected.is_empty() {
                StageReport::new(clock.elapsed())
            } else {
                StageReportBuilder::new(clock.elapsed())
                    .items(selected.len())
                    .build()
            };
            observer.on_stage_end(STAGE_SELECT, &report);
            selected
        };

        let summary = selected
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(self.selector.separator());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            selected = selected.len(),
            iterations = ranking.iterations,
            "summarized document"
        );

        SummaryResult {
            summary,
            sentences: selected,
            scores: ranking.scores,
            iterations: ranking.iterations,
            converged: ranking.converged,
        }
    }
}
