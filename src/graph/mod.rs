//! Graph construction and representation
//!
//! [`builder::SimilarityGraph`] holds the dense sentence similarity matrix;
//! [`csr::CsrGraph`] is the sparse layout PageRank iterates over.

pub mod builder;
pub mod csr;
