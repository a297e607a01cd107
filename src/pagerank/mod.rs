//! PageRank over the sentence similarity graph
//!
//! [`standard::StandardPageRank`] is the power iteration on a CSR graph;
//! [`sentence::SentenceRanker`] applies it to a [`SimilarityGraph`] and
//! reports scores by sentence index.
//!
//! [`SimilarityGraph`]: crate::graph::builder::SimilarityGraph

pub mod sentence;
pub mod standard;

/// Share of each score propagated along edges; the rest is spread uniformly
pub const DAMPING: f64 = 0.85;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-node score change in the last iteration
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }
}

/// Importance score of one sentence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceScore {
    /// Sentence index in the document
    pub index: usize,
    /// Rank score (non-negative; all scores of a document sum to 1)
    pub score: f64,
}
