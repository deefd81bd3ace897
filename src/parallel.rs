//! Parallel processing support for ferro-sifts
//!
//! This module provides batch translation of many ranges against one
//! mapping set using rayon. Enable with the `parallel` feature.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn main() {
//! use ferro_sifts::parallel::{translate_parallel, translate_parallel_ok};
//! use ferro_sifts::{Direction, MappingSet, Segment, StructAnchor, TranslateOptions};
//!
//! let set = MappingSet::new(vec![Segment::new(
//!     1, "A", "A", 10, 20,
//!     StructAnchor::new(5, 5, ""),
//!     StructAnchor::new(15, 15, ""),
//! )]);
//!
//! let requests = vec![(12, 14), (300, 310), (10, 10)];
//! let options = TranslateOptions::default();
//! let results = translate_parallel(&requests, Direction::UnpToStruct, &set, &options);
//! assert!(results[0].is_ok());
//! assert!(results[1].is_err());
//!
//! let ok = translate_parallel_ok(&requests, Direction::UnpToStruct, &set);
//! assert_eq!(ok.len(), 2);
//! # }
//! # #[cfg(not(feature = "parallel"))]
//! # fn main() {}
//! ```

use rayon::prelude::*;

use crate::error::{FerroError, PositionMappingError};
use crate::mapping::MappingSet;
use crate::translate::{translate_with_options, Direction, TranslateOptions, TranslatedPosition};

/// Outcome of one request in a batch
pub type BatchResult = Result<Vec<TranslatedPosition>, PositionMappingError>;

/// Translate multiple ranges in parallel
///
/// Returns a vector of results, one for each request.
/// Order is preserved.
pub fn translate_parallel(
    requests: &[(i64, i64)],
    direction: Direction,
    mappings: &MappingSet,
    options: &TranslateOptions,
) -> Vec<BatchResult> {
    requests
        .par_iter()
        .map(|&(start, end)| translate_with_options(start, end, direction, mappings, options))
        .collect()
}

/// Translate multiple ranges in parallel, filtering errors
///
/// Returns the results of successful requests only, in request order.
pub fn translate_parallel_ok(
    requests: &[(i64, i64)],
    direction: Direction,
    mappings: &MappingSet,
) -> Vec<Vec<TranslatedPosition>> {
    requests
        .par_iter()
        .filter_map(|&(start, end)| {
            translate_with_options(start, end, direction, mappings, &TranslateOptions::default())
                .ok()
        })
        .collect()
}

/// Translate a batch on a dedicated pool sized by `config`
///
/// With `num_threads == 0` the global rayon pool is used.
pub fn translate_parallel_with_config(
    requests: &[(i64, i64)],
    direction: Direction,
    mappings: &MappingSet,
    options: &TranslateOptions,
    config: &ParallelConfig,
) -> Result<Vec<BatchResult>, FerroError> {
    if config.num_threads == 0 {
        return Ok(translate_parallel(requests, direction, mappings, options));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build()
        .map_err(|e| FerroError::Config {
            msg: format!("Failed to build thread pool: {}", e),
        })?;
    Ok(pool.install(|| translate_parallel(requests, direction, mappings, options)))
}

/// Configuration for parallel batch processing
#[derive(Debug, Clone, Default)]
pub struct ParallelConfig {
    /// Number of threads (0 = use rayon default)
    pub num_threads: usize,
}

impl ParallelConfig {
    /// Create a new parallel configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of threads
    pub fn with_num_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads;
        self
    }
}

/// Statistics from parallel processing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParallelStats {
    /// Total requests processed
    pub total: usize,
    /// Requests with at least one translated position
    pub success: usize,
    /// Requests that succeeded with no positions (only with `allow_empty`)
    pub empty: usize,
    /// Failed requests
    pub errors: usize,
}

impl ParallelStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a batch of results
    pub fn from_results(results: &[BatchResult]) -> Self {
        let mut stats = Self::new();
        for result in results {
            stats.total += 1;
            match result {
                Ok(positions) if positions.is_empty() => stats.empty += 1,
                Ok(_) => stats.success += 1,
                Err(_) => stats.errors += 1,
            }
        }
        stats
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.success as f64 / self.total as f64) * 100.0
        }
    }
}
