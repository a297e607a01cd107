//! Stopword filtering
//!
//! Language lists come from the `stop-words` crate. Entries are lowercased
//! and stored whole as well as split into alphanumeric runs, so a listed
//! contraction such as `don't` also removes its `don` and `t` pieces.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from normalized tokens
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Lowercase stopwords
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a filter for the given language
    ///
    /// Unknown language codes fall back to English.
    pub fn new(language: &str) -> Self {
        Self::from_words(Self::built_in_list(language))
    }

    /// Create a filter that removes nothing
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self::from_words(words.iter().copied())
    }

    fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::empty();
        for word in words {
            filter.insert(word.as_ref());
        }
        filter
    }

    fn insert(&mut self, word: &str) {
        let lower = word.to_lowercase().replace('\u{2019}', "'");
        for piece in lower.split(|c: char| !c.is_alphanumeric()) {
            if !piece.is_empty() {
                self.stopwords.insert(piece.to_string());
            }
        }
        if !lower.is_empty() {
            self.stopwords.insert(lower);
        }
    }

    /// Add words to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.insert(word);
        }
    }

    /// Check whether a lowercase token is a stopword
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Number of entries in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// The raw built-in list for a language code
    pub fn built_in_list(language: &str) -> Vec<String> {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            _ => LANGUAGE::English,
        };
        get(lang).iter().map(|s| s.to_string()).collect()
    }
}
