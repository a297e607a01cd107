//! Natural Language Processing components
//!
//! Sentence segmentation, word tokenization, stopword filtering and
//! lemmatization, combined by [`preprocessor::Preprocessor`].

pub mod lemmatizer;
pub mod preprocessor;
pub mod stopwords;
pub mod tokenizer;
