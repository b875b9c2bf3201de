//! Token aggregation
//!
//! Natural sorting collects tokens in arrival order; count sorting folds them
//! into a frequency table. Both know how many tokens they have seen.

use std::collections::HashMap;
use std::hash::Hash;

/// Sink for parsed tokens
pub trait Aggregate<T> {
    fn add(&mut self, token: T);

    /// Number of tokens added so far
    fn total(&self) -> usize;

    fn extend_from<I: IntoIterator<Item = T>>(&mut self, tokens: I)
    where
        Self: Sized,
    {
        for token in tokens {
            self.add(token);
        }
    }
}

/// Tokens in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence<T> {
    tokens: Vec<T>,
}

impl<T> TokenSequence<T> {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.tokens
    }
}

impl<T> Default for TokenSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Aggregate<T> for TokenSequence<T> {
    #[inline]
    fn add(&mut self, token: T) {
        self.tokens.push(token);
    }

    fn total(&self) -> usize {
        self.tokens.len()
    }
}

/// Occurrence count per distinct token
#[derive(Debug, Clone)]
pub struct FrequencyTable<T: Hash + Eq> {
    counts: HashMap<T, usize>,
    total: usize,
}

impl<T: Hash + Eq> FrequencyTable<T> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// Number of distinct tokens
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn into_counts(self) -> HashMap<T, usize> {
        self.counts
    }
}

impl<T: Hash + Eq> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> Aggregate<T> for FrequencyTable<T> {
    #[inline]
    fn add(&mut self, token: T) {
        *self.counts.entry(token).or_insert(0) += 1;
        self.total += 1;
    }

    fn total(&self) -> usize {
        self.total
    }
}
