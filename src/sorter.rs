//! Natural and by-count ordering

use crate::aggregate::{Aggregate, FrequencyTable, TokenSequence};
use itertools::Itertools;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::hash::Hash;

/// Below this many tokens a sequential sort beats spinning up the pool
const PARALLEL_THRESHOLD: usize = 8192;

/// A distinct value with its occurrence count and share of the total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry<T> {
    pub value: T,
    pub count: usize,
    /// `count / total` as a whole percentage, rounded half up
    pub percentage: u32,
}

/// Whole percentage of `count` in `total`, rounding .5 up.
///
/// Integer arithmetic only, so values on the .5 boundary round the same on
/// every platform. Returns 0 when `total` is 0.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let count = count as u128;
    let total = total as u128;
    ((200 * count + total) / (2 * total)) as u32
}

/// Sort tokens ascending by their natural order
pub fn sort_natural<T: Ord + Send>(sequence: TokenSequence<T>) -> Vec<T> {
    let mut tokens = sequence.into_vec();
    if tokens.len() >= PARALLEL_THRESHOLD && num_cpus::get() > 1 {
        log::debug!("parallel sort of {} tokens", tokens.len());
        tokens.par_sort_unstable();
    } else {
        tokens.sort_unstable();
    }
    tokens
}

/// Order (value, count) pairs by ascending count, then ascending value
pub fn sort_by_count<T: Ord + Hash>(table: FrequencyTable<T>) -> Vec<RankedEntry<T>> {
    let total = table.total();
    table
        .into_counts()
        .into_iter()
        .sorted_unstable_by(compare_by_count)
        .map(|(value, count)| RankedEntry {
            value,
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

fn compare_by_count<T: Ord>(a: &(T, usize), b: &(T, usize)) -> Ordering {
    a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0))
}
