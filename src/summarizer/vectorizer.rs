//! Sentence vectors from word embeddings
//!
//! A sentence is represented by the element-wise mean of the embeddings of
//! its in-vocabulary tokens. Tokens the store does not know are skipped.

use crate::embedding::EmbeddingSource;
use crate::types::{Sentence, Token};

/// A dense sentence vector
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceVector {
    /// Index of the sentence this vector belongs to
    pub index: usize,
    /// Vector components
    pub values: Vec<f64>,
    /// L2 norm of `values`
    pub norm: f64,
    /// Number of tokens that contributed to the mean
    pub known_tokens: usize,
}

impl SentenceVector {
    /// Zero vector of the given dimension
    pub fn zero(index: usize, dimension: usize) -> Self {
        Self {
            index,
            values: vec![0.0; dimension],
            norm: 0.0,
            known_tokens: 0,
        }
    }

    /// Create from raw components
    pub fn from_values(index: usize, values: Vec<f64>) -> Self {
        let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
        Self {
            index,
            values,
            norm,
            known_tokens: 0,
        }
    }

    /// Whether every component is zero
    pub fn is_zero(&self) -> bool {
        self.norm == 0.0
    }

    /// Number of components
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Cosine similarity with another vector
    ///
    /// Always within [-1, 1]; exactly 0 when either vector is zero.
    pub fn cosine_similarity(&self, other: &SentenceVector) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        let dot: f64 = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a * b)
            .sum();
        let sim = dot / (self.norm * other.norm);
        if sim.is_finite() {
            sim.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Averages token embeddings into sentence vectors
#[derive(Debug, Clone, Copy)]
pub struct SentenceVectorizer<'a, E: ?Sized> {
    embeddings: &'a E,
}

impl<'a, E: EmbeddingSource + ?Sized> SentenceVectorizer<'a, E> {
    /// Create a vectorizer over an embedding source
    pub fn new(embeddings: &'a E) -> Self {
        Self { embeddings }
    }

    /// Vector of one token: its surface form if known, otherwise its lemma
    fn token_vector(&self, token: &Token) -> Option<&'a [f32]> {
        self.embeddings
            .lookup(&token.text)
            .or_else(|| self.embeddings.lookup(&token.lemma))
    }

    /// Mean embedding of the sentence's known tokens
    ///
    /// Returns the zero vector when no token is in the vocabulary.
    pub fn vectorize(&self, sentence: &Sentence) -> SentenceVector {
        let dimension = self.embeddings.dimension();
        let mut sum = vec![0.0f64; dimension];
        let mut known = 0usize;

        for vector in sentence.tokens.iter().filter_map(|t| self.token_vector(t)) {
            for (acc, &v) in sum.iter_mut().zip(vector) {
                *acc += f64::from(v);
            }
            known += 1;
        }

        if known == 0 {
            return SentenceVector::zero(sentence.index, dimension);
        }

        let count = known as f64;
        for value in &mut sum {
            *value /= count;
        }
        SentenceVector {
            known_tokens: known,
            ..SentenceVector::from_values(sentence.index, sum)
        }
    }

    /// Vectorize every sentence, preserving indices
    pub fn vectorize_all(&self, sentences: &[Sentence]) -> Vec<SentenceVector> {
        sentences.iter().map(|s| self.vectorize(s)).collect()
    }
}
