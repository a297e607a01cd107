//! Sentence-level ranking

use super::standard::StandardPageRank;
use super::{PageRankResult, SentenceScore};
use crate::graph::builder::SimilarityGraph;
use crate::graph::csr::CsrGraph;

/// Scores of every sentence plus convergence diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceRanking {
    /// One score per sentence, in graph node order
    pub scores: Vec<SentenceScore>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-sentence change in the last iteration
    pub delta: f64,
    /// Whether the scores converged before the iteration cap
    pub converged: bool,
}

impl SentenceRanking {
    fn from_result(graph: &SimilarityGraph, result: PageRankResult) -> Self {
        let scores = result
            .scores
            .iter()
            .enumerate()
            .map(|(node, &score)| SentenceScore {
                index: graph.sentence_index(node),
                score,
            })
            .collect();
        Self {
            scores,
            iterations: result.iterations,
            delta: result.delta,
            converged: result.converged,
        }
    }
}

/// Ranks sentences by centrality in their similarity graph
#[derive(Debug, Clone, Default)]
pub struct SentenceRanker {
    pagerank: StandardPageRank,
}

impl SentenceRanker {
    /// Create a ranker with an iteration cap and convergence threshold
    pub fn new(max_iterations: usize, threshold: f64) -> Self {
        Self {
            pagerank: StandardPageRank::new()
                .with_max_iterations(max_iterations)
                .with_threshold(threshold),
        }
    }

    /// Rank every sentence in the graph
    pub fn rank(&self, graph: &SimilarityGraph) -> SentenceRanking {
        self.rank_observed(graph, |_, _| {})
    }

    /// Rank, reporting the scores after each iteration
    pub fn rank_observed<F>(&self, graph: &SimilarityGraph, on_iteration: F) -> SentenceRanking
    where
        F: FnMut(usize, &[f64]),
    {
        let csr = CsrGraph::from_similarity(graph);
        let result = self.pagerank.run_observed(&csr, on_iteration);
        SentenceRanking::from_result(graph, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::vectorizer::SentenceVector;

    #[test]
    fn test_scores_carry_sentence_indices() {
        let vectors = vec![
            SentenceVector::from_values(10, vec![1.0, 0.0]),
            SentenceVector::from_values(20, vec![1.0, 0.1]),
            SentenceVector::from_values(30, vec![0.0, 1.0]),
        ];
        let graph = SimilarityGraph::build(&vectors);
        let ranking = SentenceRanker::default().rank(&graph);

        let indices: Vec<_> = ranking.scores.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![10, 20, 30]);
    }

    #[test]
    fn test_central_sentence_ranks_highest() {
        // node 1 is similar to both others, which are dissimilar to each other
        let graph = SimilarityGraph::from_matrix(&[
            vec![0.0, 0.8, 0.0],
            vec![0.8, 0.0, 0.8],
            vec![0.0, 0.8, 0.0],
        ]);
        let ranking = SentenceRanker::default().rank(&graph);

        let best = ranking
            .scores
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .unwrap();
        assert_eq!(best.index, 1);
        assert!(ranking.converged);
    }

    #[test]
    fn test_single_sentence() {
        let graph = SimilarityGraph::build(&[SentenceVector::from_values(0, vec![1.0])]);
        let ranking = SentenceRanker::default().rank(&graph);

        assert_eq!(ranking.scores, vec![SentenceScore { index: 0, score: 1.0 }]);
        assert_eq!(ranking.iterations, 0);
    }

    #[test]
    fn test_iteration_cap_respected() {
        let graph = SimilarityGraph::from_matrix(&[
            vec![0.0, 0.9, 0.1],
            vec![0.9, 0.0, 0.5],
            vec![0.1, 0.5, 0.0],
        ]);
        let ranking = SentenceRanker::new(2, 1e-300).rank(&graph);
        assert_eq!(ranking.iterations, 2);
        assert!(!ranking.converged);
    }
}
