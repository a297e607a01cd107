//! Standard PageRank algorithm
//!
//! Weighted power iteration with dangling-node redistribution. A node with
//! no outgoing weight sends nothing along edges; its mass is spread evenly
//! over all nodes instead, so the scores keep summing to one on every
//! iteration and an edgeless graph stays uniform.

use super::{PageRankResult, DAMPING};
use crate::graph::csr::CsrGraph;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Iteration stops once the largest per-node change is below this
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            threshold: 1e-4,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        self.run_observed(graph, |_, _| {})
    }

    /// Run PageRank, calling `on_iteration` with the iteration number
    /// (starting at 1) and the scores after that iteration
    pub fn run_observed<F>(&self, graph: &CsrGraph, mut on_iteration: F) -> PageRankResult
    where
        F: FnMut(usize, &[f64]),
    {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }
        if n == 1 {
            return PageRankResult::new(vec![1.0], 0, 0.0, true);
        }

        // Initialize scores uniformly
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();

        let teleport = (1.0 - DAMPING) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta >= self.threshold {
            iterations += 1;

            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let dangling_contribution = DAMPING * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            // Propagate scores through edges
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        new_scores[neighbor as usize] +=
                            DAMPING * node_score * weight / total_weight;
                    }
                }
            }

            // Convergence delta (max norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut new_scores);
            on_iteration(iterations, &scores);
        }

        // Scores already sum to ~1; renormalize away accumulated rounding
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta < self.threshold)
    }
}
