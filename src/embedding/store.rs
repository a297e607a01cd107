//! In-memory embedding table
//!
//! Vectors live in one contiguous buffer; the token map stores row numbers.
//! The store is never mutated after construction, so it can be shared across
//! threads without locking.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashMap;

use super::loader::read_entries;
use super::EmbeddingSource;
use crate::errors::{Result, SummarizerError};

/// Immutable token to vector table
#[derive(Debug, Clone)]
pub struct EmbeddingStore {
    dimension: usize,
    /// token -> row in `data`
    rows: FxHashMap<String, u32>,
    /// Row-major vector data, `dimension` values per row
    data: Vec<f32>,
    degraded: bool,
}

impl EmbeddingStore {
    fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            rows: FxHashMap::default(),
            data: Vec::new(),
            degraded: false,
        }
    }

    /// A store with no vocabulary, used when no embedding source is available
    ///
    /// Every lookup is absent, so all sentence vectors are zero and ranking
    /// falls back to document order.
    pub fn degraded(dimension: usize) -> Self {
        Self {
            degraded: true,
            ..Self::with_dimension(dimension)
        }
    }

    /// Build a store from in-memory entries
    ///
    /// Every vector must have `dimension` components. When a token repeats,
    /// the first vector is kept.
    pub fn from_entries<I, S>(dimension: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        if dimension == 0 {
            return Err(SummarizerError::invalid_config(
                "embedding dimension must be at least 1",
            ));
        }

        let mut store = Self::with_dimension(dimension);
        for (i, (token, values)) in entries.into_iter().enumerate() {
            if values.len() != dimension {
                return Err(SummarizerError::MalformedEmbedding {
                    line: i + 1,
                    expected: dimension,
                    found: values.len(),
                });
            }
            store.insert(token.into(), &values);
        }
        Ok(store)
    }

    fn insert(&mut self, token: String, values: &[f32]) {
        if self.rows.contains_key(&token) {
            return;
        }
        let row = self.rows.len() as u32;
        self.rows.insert(token, row);
        self.data.extend_from_slice(values);
    }

    /// Read a store in the `token v0 v1 ...` text format
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::read(reader, Path::new("<reader>"))
    }

    fn read<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
        let mut rows = FxHashMap::default();
        let mut data = Vec::new();

        let (dimension, _) = read_entries(reader, origin, |token, values| {
            if !rows.contains_key(token) {
                let row = rows.len() as u32;
                rows.insert(token.to_string(), row);
                data.extend_from_slice(&values);
            }
        })?;

        Ok(Self {
            dimension,
            rows,
            data,
            degraded: false,
        })
    }

    /// Load a store from a file
    ///
    /// Any malformed line fails the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SummarizerError::io(path, e))?;
        let store = Self::read(BufReader::new(file), path)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            path = %path.display(),
            vocab = store.len(),
            dimension = store.dimension,
            "loaded embeddings"
        );

        Ok(store)
    }

    /// Load the first existing file among `paths`
    ///
    /// When none of the paths exist the store starts degraded with
    /// `fallback_dimension`. A file that exists but fails to load is an error.
    pub fn discover<P: AsRef<Path>>(paths: &[P], fallback_dimension: usize) -> Result<Self> {
        match paths.iter().map(|p| p.as_ref()).find(|p| p.is_file()) {
            Some(path) => Self::load(path),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    candidates = paths.len(),
                    dimension = fallback_dimension,
                    "no embedding file found; summaries will follow document order"
                );
                Ok(Self::degraded(fallback_dimension))
            }
        }
    }

    /// Number of tokens in the vocabulary
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the store was created without an embedding source
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

impl EmbeddingSource for EmbeddingStore {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn lookup(&self, token: &str) -> Option<&[f32]> {
        let row = *self.rows.get(token)? as usize;
        let start = row * self.dimension;
        self.data.get(start..start + self.dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_from_entries_lookup() {
        let store = EmbeddingStore::from_entries(
            3,
            vec![("dog", vec![1.0, 0.0, 0.0]), ("cat", vec![0.0, 1.0, 0.0])],
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.dimension(), 3);
        assert_eq!(store.lookup("cat"), Some(&[0.0, 1.0, 0.0][..]));
        assert_eq!(store.lookup("bird"), None);
        assert!(!store.is_degraded());
    }

    #[test]
    fn test_duplicate_token_keeps_first() {
        let store =
            EmbeddingStore::from_entries(1, vec![("dog", vec![1.0]), ("dog", vec![2.0])]).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("dog"), Some(&[1.0][..]));

        let store = EmbeddingStore::from_reader(Cursor::new("dog 1\ndog 2\ncat 3\n")).unwrap();
        assert_eq!(store.lookup("dog"), Some(&[1.0][..]));
        assert_eq!(store.lookup("cat"), Some(&[3.0][..]));
    }

    #[test]
    fn test_from_entries_rejects_wrong_dimension() {
        let err = EmbeddingStore::from_entries(2, vec![("dog", vec![1.0, 0.0]), ("cat", vec![1.0])])
            .unwrap_err();
        assert!(matches!(
            err,
            SummarizerError::MalformedEmbedding {
                line: 2,
                expected: 2,
                found: 1
            }
        ));

        let err = EmbeddingStore::from_entries(0, Vec::<(String, Vec<f32>)>::new()).unwrap_err();
        assert!(matches!(err, SummarizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_degraded_store() {
        let store = EmbeddingStore::degraded(100);
        assert!(store.is_degraded());
        assert!(store.is_empty());
        assert_eq!(store.dimension(), 100);
        assert_eq!(store.lookup("the"), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "loyal 0.5 0.5").unwrap();
        writeln!(file, "dog 1.0 0.0").unwrap();

        let store = EmbeddingStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("dog"), Some(&[1.0, 0.0][..]));
        assert_eq!(store.lookup("loyal"), Some(&[0.5, 0.5][..]));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dog 1.0 0.0").unwrap();
        writeln!(file, "cat 1.0 0.0 0.5").unwrap();

        let err = EmbeddingStore::load(file.path()).unwrap_err();
        assert!(matches!(err, SummarizerError::MalformedEmbedding { line: 2, .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = EmbeddingStore::load("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, SummarizerError::Io { .. }));
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let present = dir.path().join("vectors.txt");
        std::fs::write(&present, "dog 1 2\n").unwrap();

        let store = EmbeddingStore::discover(&[&missing, &present], 100).unwrap();
        assert_eq!(store.dimension(), 2);
        assert!(store.contains("dog"));

        let store = EmbeddingStore::discover(&[&missing], 50).unwrap();
        assert!(store.is_degraded());
        assert_eq!(store.dimension(), 50);
    }

    #[test]
    fn test_discover_propagates_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.txt");
        std::fs::write(&bad, "dog 1 2\ncat oops 2\n").unwrap();

        let err = EmbeddingStore::discover(&[&bad], 100).unwrap_err();
        assert!(matches!(err, SummarizerError::InvalidEmbeddingValue { line: 2, .. }));
    }
}
