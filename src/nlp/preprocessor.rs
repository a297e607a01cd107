//! Document preprocessing
//!
//! Turns raw text into indexed [`Sentence`]s carrying their original text and
//! normalized tokens.

use super::lemmatizer::lemmatize;
use super::stopwords::StopwordFilter;
use super::tokenizer::{split_sentences, words};
use crate::types::{Sentence, Token};

/// Segments documents and normalizes sentence tokens
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    stopwords: StopwordFilter,
}

impl Preprocessor {
    /// Create a preprocessor using the stopword list for `language`
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: StopwordFilter::new(language),
        }
    }

    /// Create a preprocessor with a custom stopword filter
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Split a document into ordered sentences
    ///
    /// Empty or whitespace-only input yields no sentences. A sentence whose
    /// tokens are all filtered out is still returned, with no tokens.
    pub fn segment(&self, document: &str) -> Vec<Sentence> {
        split_sentences(document)
            .into_iter()
            .enumerate()
            .map(|(index, span)| {
                let text = &document[span.start..span.end];
                Sentence {
                    text: text.to_string(),
                    start: span.start,
                    end: span.end,
                    index,
                    tokens: self.normalize(text),
                }
            })
            .collect()
    }

    /// Lowercase, strip punctuation, drop stopwords and lemmatize
    pub fn normalize(&self, text: &str) -> Vec<Token> {
        words(text)
            .into_iter()
            .filter(|word| !self.stopwords.is_stopword(word))
            .filter_map(|word| {
                let lemma = lemmatize(&word).replace('\'', "");
                if lemma.is_empty() || self.stopwords.is_stopword(&lemma) {
                    None
                } else {
                    Some(Token::new(word, lemma))
                }
            })
            .collect()
    }
}
