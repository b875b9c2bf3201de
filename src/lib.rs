//! Sorting tool
//!
//! Reads integers, words or lines, then prints them in natural order or
//! grouped by how often each value occurs.

#![warn(clippy::all)]

pub mod error;
pub mod config;
pub mod args;

// Pipeline stages
pub mod input;
pub mod token;
pub mod aggregate;
pub mod sorter;
pub mod report;
pub mod core_sort;

// Re-export commonly used types
pub use error::{SortError, SortResult};
pub use config::{DataType, SortConfig, SortingType};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Run one sort with the given configuration
pub fn sort(config: &SortConfig) -> SortResult<i32> {
    let core_sort = crate::core_sort::CoreSort::new(config.clone());
    core_sort.sort()
}
