//! # Token Counter

use crate::{
    training::{CountType, StringChunkType},
    types::{TkHashMap, hash_map_with_capacity},
};

/// Corpus token frequency counter.
///
/// Distinct tokens are kept in first-seen order, which is the tie-break
/// for [`TokenCounter::ranked`].
#[derive(Debug, Clone)]
pub struct TokenCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// ``{ token -> entries index }``.
    index: TkHashMap<K, usize>,

    /// ``(token, count)`` in first-seen order.
    entries: Vec<(K, C)>,
}

impl<K, C> Default for TokenCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> TokenCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Create a new empty counter.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new empty counter, pre-sized for `capacity` distinct tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: hash_map_with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// The number of distinct tokens seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no tokens have been seen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The count of `token`; zero if unseen.
    pub fn count(
        &self,
        token: &str,
    ) -> C {
        self.index
            .get(&K::from(token))
            .map(|&idx| self.entries[idx].1)
            .unwrap_or_else(C::zero)
    }

    /// Count one occurrence of `token`.
    pub fn add(
        &mut self,
        token: &str,
    ) {
        let key = K::from(token);
        match self.index.get(&key) {
            Some(&idx) => {
                let count = &mut self.entries[idx].1;
                *count = count.checked_add(&C::one()).unwrap_or_else(C::max_value);
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, C::one()));
            }
        }
    }

    /// Update counts inplace from a token sequence.
    pub fn update_from_tokens<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            self.add(token.as_ref());
        }
    }

    /// Release the ``(token, count)`` entries in first-seen order.
    pub fn release(self) -> Vec<(K, C)> {
        self.entries
    }

    /// Release the entries ranked by count descending;
    /// equal counts keep first-seen order.
    pub fn ranked(self) -> Vec<(K, C)> {
        let mut entries = self.entries;
        // `sort_by` is stable; first-seen order survives among ties.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}
