//! Query word frequency tracking.
//!
//! A search front end counts how often each query word is asked for and
//! ranks the most popular ones. This module provides that bookkeeping
//! behind the [`WordFrequencyStore`] trait so the storage can be swapped,
//! together with [`InMemoryWordFrequency`], a `HashMap`-backed store.
//!
//! Keys are case-insensitive and surrounding whitespace is ignored:
//! `" Rust "` and `"rust"` count as the same word.
//!
//! # Examples
//!
//! ```rust
//! use fplist::control::Optional;
//! use fplist::frequency::{InMemoryWordFrequency, WordFrequencyStore, record_query};
//!
//! let mut store = InMemoryWordFrequency::new();
//! record_query(&mut store, "Rust").unwrap();
//! record_query(&mut store, " rust ").unwrap();
//! record_query(&mut store, "haskell").unwrap();
//!
//! assert_eq!(store.find("RUST"), Optional::new(2));
//! assert_eq!(store.top_n(1).head().unwrap(), &("rust".to_string(), 2));
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::control::Optional;
use crate::persistent::ImmutableList;

/// Number of times a word has been recorded.
pub type Count = u64;

/// Number of entries a ranking shows when the caller does not choose one.
pub const DEFAULT_RANK_SIZE: usize = 10;

/// Errors raised while recording a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrequencyError {
    /// The query was empty or contained only whitespace.
    #[error("query must not be blank")]
    BlankKey,
}

/// Storage for per-word counters.
///
/// Implementations normalize keys with [`normalize_key`] so that lookups
/// and increments agree on what counts as the same word.
pub trait WordFrequencyStore {
    /// Returns the count for `key`, or `Absent` if it was never recorded.
    fn find(&self, key: &str) -> Optional<Count>;

    /// Bumps the counter for `key`, creating it at one, and returns the new count.
    ///
    /// A key that is blank after normalization is not stored and yields `0`.
    /// Use [`record_query`] to have blank input reported as an error.
    fn increment(&mut self, key: &str) -> Count;

    /// Returns the `n` most frequent words.
    ///
    /// Ordered by count descending; words with equal counts are ordered
    /// alphabetically.
    fn top_n(&self, n: usize) -> ImmutableList<(String, Count)>;
}

/// Lower-cases and trims a key.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Validates `query` and bumps its counter in `store`.
///
/// # Errors
///
/// Returns [`FrequencyError::BlankKey`] if the query is blank. The store is
/// left untouched in that case.
pub fn record_query<S>(store: &mut S, query: &str) -> Result<Count, FrequencyError>
where
    S: WordFrequencyStore + ?Sized,
{
    if query.trim().is_empty() {
        tracing::warn!("rejected blank query");
        return Err(FrequencyError::BlankKey);
    }
    Ok(store.increment(query))
}

/// A [`WordFrequencyStore`] kept in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWordFrequency {
    counts: HashMap<String, Count>,
}

impl InMemoryWordFrequency {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the [`DEFAULT_RANK_SIZE`] most frequent words.
    #[must_use]
    pub fn ranking(&self) -> ImmutableList<(String, Count)> {
        self.top_n(DEFAULT_RANK_SIZE)
    }
}

impl WordFrequencyStore for InMemoryWordFrequency {
    fn find(&self, key: &str) -> Optional<Count> {
        Optional::from(self.counts.get(&normalize_key(key)).copied())
    }

    fn increment(&mut self, key: &str) -> Count {
        let key = normalize_key(key);
        if key.is_empty() {
            tracing::warn!("ignored blank key");
            return 0;
        }
        let count = self.counts.entry(key.clone()).or_insert(0);
        *count = count.saturating_add(1);
        tracing::debug!(key = %key, count = *count, "word count incremented");
        *count
    }

    fn top_n(&self, n: usize) -> ImmutableList<(String, Count)> {
        let mut entries: Vec<(&String, &Count)> = self.counts.iter().collect();
        entries.sort_by(|(left_key, left_count), (right_key, right_count)| {
            right_count
                .cmp(left_count)
                .then_with(|| left_key.cmp(right_key))
        });
        entries
            .into_iter()
            .take(n)
            .map(|(key, count)| (key.clone(), *count))
            .collect()
    }
}

impl FromIterator<(String, Count)> for InMemoryWordFrequency {
    fn from_iter<I: IntoIterator<Item = (String, Count)>>(iter: I) -> Self {
        let mut counts = HashMap::new();
        for (key, count) in iter {
            let key = normalize_key(&key);
            if key.is_empty() {
                continue;
            }
            let total: &mut Count = counts.entry(key).or_insert(0);
            *total = total.saturating_add(count);
        }
        Self { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use rstest::rstest;

    #[rstest]
    #[case("rust", "rust")]
    #[case("  Rust\t", "rust")]
    #[case("HASKELL", "haskell")]
    fn test_normalize_key_trims_and_lowercases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_key(input), expected);
    }

    #[rstest]
    fn test_find_unknown_word_is_absent() {
        let store = InMemoryWordFrequency::new();
        assert_eq!(store.find("missing"), Optional::Absent);
    }

    #[rstest]
    fn test_increment_creates_then_bumps() {
        let mut store = InMemoryWordFrequency::new();
        assert_eq!(store.increment("rust"), 1);
        assert_eq!(store.increment("Rust"), 2);
        assert_eq!(store.find(" rust "), Optional::new(2));
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    fn test_blank_query_is_rejected(#[case] query: &str) {
        let mut store = InMemoryWordFrequency::new();
        assert_eq!(record_query(&mut store, query), Err(FrequencyError::BlankKey));
        assert!(store.is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("  \t")]
    fn test_increment_ignores_blank_key(#[case] key: &str) {
        let mut store = InMemoryWordFrequency::new();
        assert_eq!(store.increment(key), 0);
        assert!(store.is_empty());
        assert!(store.top_n(1).is_empty());
    }

    #[rstest]
    fn test_from_iter_merges_keys_without_overflow() {
        let store: InMemoryWordFrequency = vec![
            ("Word".to_string(), Count::MAX),
            ("word".to_string(), 1),
            ("   ".to_string(), 4),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.find("word"), Optional::new(Count::MAX));
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    fn test_increment_saturates_at_max() {
        let mut store: InMemoryWordFrequency =
            std::iter::once(("word".to_string(), Count::MAX)).collect();
        assert_eq!(store.increment("WORD"), Count::MAX);
    }

    #[rstest]
    fn test_top_n_orders_by_count_then_key() {
        let store: InMemoryWordFrequency = vec![
            ("beta".to_string(), 2),
            ("alpha".to_string(), 2),
            ("gamma".to_string(), 5),
            ("delta".to_string(), 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            store.top_n(3),
            list![
                ("gamma".to_string(), 5),
                ("alpha".to_string(), 2),
                ("beta".to_string(), 2)
            ]
        );
    }

    #[rstest]
    fn test_top_n_larger_than_store_returns_everything() {
        let mut store = InMemoryWordFrequency::new();
        store.increment("one");
        assert_eq!(store.top_n(DEFAULT_RANK_SIZE).len(), 1);
        assert!(store.top_n(0).is_empty());
    }

    #[rstest]
    fn test_ranking_is_capped_at_default_size() {
        let store: InMemoryWordFrequency = (0..25)
            .map(|index| (format!("word{index:02}"), index))
            .collect();
        let ranking = store.ranking();
        assert_eq!(ranking.len(), DEFAULT_RANK_SIZE);
        assert_eq!(ranking.head(), Ok(&("word24".to_string(), 24)));
    }
}
