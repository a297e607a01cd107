//! Sentence similarity graph
//!
//! A dense, symmetric matrix of pairwise cosine similarities between
//! sentence vectors. Node `i` of the graph is the `i`-th vector passed to
//! [`SimilarityGraph::build`]; the sentence index it stands for is kept
//! alongside so later stages never rely on container position.

use crate::summarizer::vectorizer::SentenceVector;

/// Complete weighted undirected graph over sentences
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimilarityGraph {
    /// Sentence index for each node
    sentence_indices: Vec<usize>,
    /// Row-major `n x n` similarity matrix, diagonal fixed at 0
    weights: Vec<f64>,
}

impl SimilarityGraph {
    /// Compute pairwise cosine similarities
    ///
    /// Each unordered pair is computed once and mirrored. Pairs involving a
    /// zero vector get weight 0. Cost is O(n² · d).
    pub fn build(vectors: &[SentenceVector]) -> Self {
        let n = vectors.len();
        let mut weights = vec![0.0; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let sim = vectors[i].cosine_similarity(&vectors[j]);
                weights[i * n + j] = sim;
                weights[j * n + i] = sim;
            }
        }

        Self {
            sentence_indices: vectors.iter().map(|v| v.index).collect(),
            weights,
        }
    }

    /// Build directly from a square matrix (used by tests and custom scorers)
    ///
    /// The diagonal is ignored and non-finite entries become 0.
    ///
    /// # Panics
    ///
    /// Panics when `matrix` is not square.
    pub fn from_matrix(matrix: &[Vec<f64>]) -> Self {
        let n = matrix.len();
        let mut weights = vec![0.0; n * n];
        for (i, row) in matrix.iter().enumerate() {
            assert_eq!(row.len(), n, "similarity matrix must be square");
            for (j, &w) in row.iter().enumerate() {
                if i != j && w.is_finite() {
                    weights[i * n + j] = w;
                }
            }
        }
        Self {
            sentence_indices: (0..n).collect(),
            weights,
        }
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.sentence_indices.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.sentence_indices.is_empty()
    }

    /// Similarity between nodes `i` and `j` (0 on the diagonal)
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.len() + j]
    }

    /// All similarities from node `i`
    pub fn row(&self, i: usize) -> &[f64] {
        let n = self.len();
        &self.weights[i * n..(i + 1) * n]
    }

    /// Sentence index represented by node `node`
    pub fn sentence_index(&self, node: usize) -> usize {
        self.sentence_indices[node]
    }

    /// Sentence indices in node order
    pub fn sentence_indices(&self) -> &[usize] {
        &self.sentence_indices
    }

    /// Number of sentence pairs with positive similarity
    pub fn edge_count(&self) -> usize {
        let n = self.len();
        (0..n)
            .map(|i| ((i + 1)..n).filter(|&j| self.weight(i, j) > 0.0).count())
            .sum()
    }
}
