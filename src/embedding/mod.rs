//! Word embedding lookup
//!
//! [`EmbeddingSource`] is the capability the vectorizer depends on.
//! [`EmbeddingStore`] is the standard implementation: an immutable table
//! loaded once at startup and shared between requests behind an `Arc`.

pub mod loader;
pub mod store;

use std::sync::Arc;

pub use store::EmbeddingStore;

/// Read-only token to vector lookup
///
/// Implementations must return vectors of exactly [`dimension`] components.
/// A missing token is out-of-vocabulary, never an error.
///
/// [`dimension`]: EmbeddingSource::dimension
pub trait EmbeddingSource {
    /// Number of components in every vector
    fn dimension(&self) -> usize;

    /// Look up the vector for a token
    fn lookup(&self, token: &str) -> Option<&[f32]>;

    /// Whether the token has a vector
    fn contains(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }
}

impl<E: EmbeddingSource + ?Sized> EmbeddingSource for &E {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn lookup(&self, token: &str) -> Option<&[f32]> {
        (**self).lookup(token)
    }
}

impl<E: EmbeddingSource + ?Sized> EmbeddingSource for Arc<E> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn lookup(&self, token: &str) -> Option<&[f32]> {
        (**self).lookup(token)
    }
}

impl<E: EmbeddingSource + ?Sized> EmbeddingSource for Box<E> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn lookup(&self, token: &str) -> Option<&[f32]> {
        (**self).lookup(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source that knows a single token, used to exercise the trait seams
    struct OneWord;

    impl EmbeddingSource for OneWord {
        fn dimension(&self) -> usize {
            2
        }

        fn lookup(&self, token: &str) -> Option<&[f32]> {
            (token == "hello").then_some(&[1.0, 0.0][..])
        }
    }

    #[test]
    fn test_custom_source_through_arc_and_box() {
        let shared: Arc<dyn EmbeddingSource + Send + Sync> = Arc::new(OneWord);
        assert_eq!(shared.dimension(), 2);
        assert!(shared.contains("hello"));
        assert!(!shared.contains("world"));

        let boxed: Box<dyn EmbeddingSource> = Box::new(OneWord);
        assert_eq!(boxed.lookup("hello"), Some(&[1.0, 0.0][..]));
    }

    #[test]
    fn test_reference_forwarding() {
        let store = EmbeddingStore::from_entries(2, vec![("a", vec![0.5, 0.5])]).unwrap();
        let by_ref: &EmbeddingStore = &store;
        assert_eq!(EmbeddingSource::dimension(&by_ref), 2);
        assert!(EmbeddingSource::contains(&by_ref, "a"));
    }
}
