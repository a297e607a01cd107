//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR stores edges contiguously, which keeps PageRank's repeated neighbor
//! scans cache friendly. Only strictly positive similarities become edges:
//! a zero or negative cosine means the two sentences do not endorse each
//! other.

use super::builder::SimilarityGraph;

/// A graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Convert a similarity matrix into CSR format
    pub fn from_similarity(graph: &SimilarityGraph) -> Self {
        let num_nodes = graph.len();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for node in 0..num_nodes {
            let mut total = 0.0;
            for (target, &weight) in graph.row(node).iter().enumerate() {
                if target != node && weight > 0.0 {
                    col_idx.push(target as u32);
                    weights.push(weight);
                    total += weight;
                }
            }
            total_weight.push(total);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Nodes with no outgoing weight
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.total_weight[n as usize] <= 0.0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_graph() -> CsrGraph {
        let similarity = SimilarityGraph::from_matrix(&[
            vec![0.0, 1.0, 1.5, -0.5],
            vec![1.0, 0.0, 2.0, 0.0],
            vec![1.5, 2.0, 0.0, 0.0],
            vec![-0.5, 0.0, 0.0, 0.0],
        ]);
        CsrGraph::from_similarity(&similarity)
    }

    #[test]
    fn test_csr_conversion() {
        let csr = build_test_graph();

        assert_eq!(csr.num_nodes, 4);
        // each undirected edge stored in both directions
        assert_eq!(csr.col_idx.len(), 6);
    }

    #[test]
    fn test_neighbor_iteration() {
        let csr = build_test_graph();

        let neighbors: Vec<_> = csr.neighbors(0).collect();
        assert_eq!(neighbors, vec![(1, 1.0), (2, 1.5)]);
    }

    #[test]
    fn test_out_edges_and_weight() {
        let csr = build_test_graph();

        assert_eq!(csr.neighbors(0).count(), 2);
        assert!((csr.node_total_weight(0) - 2.5).abs() < 1e-10);
        assert!((csr.node_total_weight(2) - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_negative_similarity_is_not_an_edge() {
        let csr = build_test_graph();

        assert_eq!(csr.neighbors(3).count(), 0);
        assert_eq!(csr.dangling_nodes(), vec![3]);
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::from_similarity(&SimilarityGraph::default());

        assert!(csr.is_empty());
        assert!(csr.col_idx.is_empty());
        assert_eq!(csr.row_ptr, vec![0]);
    }
}
