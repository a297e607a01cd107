//! Summarization components
//!
//! Sentence vectorization from word embeddings and top-K selection of
//! ranked sentences.

pub mod selector;
pub mod vectorizer;
