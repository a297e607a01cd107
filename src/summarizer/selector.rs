//! Top-K sentence selection for summarization
//!
//! Ranking decides which sentences are kept; the summary always lists them
//! in document order.

use crate::pagerank::SentenceScore;
use crate::types::Sentence;

/// A selected sentence with its score
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSentence {
    /// The sentence
    pub sentence: Sentence,
    /// Rank score
    pub score: f64,
    /// Position in the score ordering (0 = highest)
    pub rank: usize,
}

/// Picks the highest-scoring sentences and joins them
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    separator: String,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSelector {
    /// Create a selector that joins sentences with a single space
    pub fn new() -> Self {
        Self {
            separator: " ".to_string(),
        }
    }

    /// Set the text placed between selected sentences
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Indices of the top `count` sentences, in ascending document order
    ///
    /// Scores are ordered descending with ties going to the earlier sentence.
    /// `count` is clamped to `[1, scores.len()]`.
    pub fn select_indices(&self, scores: &[SentenceScore], count: usize) -> Vec<usize> {
        self.ranked(scores, count)
            .into_iter()
            .map(|(_, s)| s.index)
            .collect()
    }

    /// Selected sentences with their scores, in document order
    pub fn select_detailed(
        &self,
        sentences: &[Sentence],
        scores: &[SentenceScore],
        count: usize,
    ) -> Vec<SelectedSentence> {
        self.ranked(scores, count)
            .into_iter()
            .filter_map(|(rank, s)| {
                sentences
                    .iter()
                    .find(|sentence| sentence.index == s.index)
                    .map(|sentence| SelectedSentence {
                        sentence: sentence.clone(),
                        score: s.score,
                        rank,
                    })
            })
            .collect()
    }

    /// Assemble the summary text
    ///
    /// Returns an empty string when there are no sentences.
    pub fn select(&self, sentences: &[Sentence], scores: &[SentenceScore], count: usize) -> String {
        self.select_detailed(sentences, scores, count)
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// Top `count` scores tagged with their rank, sorted by sentence index
    fn ranked(&self, scores: &[SentenceScore], count: usize) -> Vec<(usize, SentenceScore)> {
        if scores.is_empty() {
            return Vec::new();
        }

        let mut ordered = scores.to_vec();
        ordered.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
        ordered.truncate(count.clamp(1, scores.len()));

        let mut ranked: Vec<_> = ordered.into_iter().enumerate().collect();
        ranked.sort_by_key(|(_, s)| s.index);
        ranked
    }

    /// The separator in use
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences() -> Vec<Sentence> {
        ["First one.", "Second one.", "Third one.", "Fourth one."]
            .iter()
            .enumerate()
            .map(|(index, text)| Sentence {
                text: text.to_string(),
                start: 0,
                end: 0,
                index,
                tokens: vec![],
            })
            .collect()
    }

    fn scores(values: &[f64]) -> Vec<SentenceScore> {
        values
            .iter()
            .enumerate()
            .map(|(index, &score)| SentenceScore { index, score })
            .collect()
    }

    #[test]
    fn test_document_order() {
        let selector = SentenceSelector::new();
        let summary = selector.select(&sentences(), &scores(&[0.1, 0.2, 0.4, 0.3]), 2);

        assert_eq!(summary, "Third one. Fourth one.");
        assert_eq!(
            selector.select_indices(&scores(&[0.4, 0.1, 0.2, 0.3]), 2),
            vec![0, 3]
        );
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let selector = SentenceSelector::new();
        let uniform = scores(&[0.25; 4]);

        assert_eq!(selector.select_indices(&uniform, 2), vec![0, 1]);
        assert_eq!(selector.select(&sentences(), &uniform, 1), "First one.");
    }

    #[test]
    fn test_count_is_clamped() {
        let selector = SentenceSelector::new();
        let s = scores(&[0.1, 0.2, 0.3, 0.4]);

        assert_eq!(selector.select_indices(&s, 10), vec![0, 1, 2, 3]);
        assert_eq!(selector.select_indices(&s, 0), vec![3]);
    }

    #[test]
    fn test_empty_input() {
        let selector = SentenceSelector::new();
        assert_eq!(selector.select(&[], &[], 3), "");
        assert!(selector.select_indices(&[], 3).is_empty());
    }

    #[test]
    fn test_custom_separator() {
        let selector = SentenceSelector::new().with_separator("\n");
        let summary = selector.select(&sentences(), &scores(&[0.4, 0.3, 0.2, 0.1]), 2);
        assert_eq!(summary, "First one.\nSecond one.");
        assert_eq!(selector.separator(), "\n");
    }

    #[test]
    fn test_detailed_reports_rank() {
        let selector = SentenceSelector::new();
        let detailed = selector.select_detailed(&sentences(), &scores(&[0.1, 0.5, 0.1, 0.3]), 2);

        assert_eq!(detailed.len(), 2);
        assert_eq!(detailed[0].sentence.index, 1);
        assert_eq!(detailed[0].rank, 0);
        assert_eq!(detailed[1].sentence.index, 3);
        assert_eq!(detailed[1].rank, 1);
        assert_eq!(detailed[1].score, 0.3);
    }
}
