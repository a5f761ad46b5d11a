//! Centralized limits and thresholds for layout selection.
//!
//! The layout selector weighs a run-dispatched table against a sparse map using
//! a rough byte-size estimate. The numbers below are engineering knobs rather
//! than invariants: tuning them changes which layout wins, never whether the
//! emitted accessors are correct.
//!
//! # Categories
//!
//! - **Run Ceiling**: absolute cap on the number of dispatch ranges
//! - **Size Estimates**: per-run and per-map-entry byte charges
//! - **Cost Factor**: how much larger the run table may be before losing

use serde::{Deserialize, Serialize};

// =============================================================================
// Run Ceiling
// =============================================================================

/// Maximum number of runs a multi-run table may dispatch over.
///
/// Past this point the range-test chain becomes long enough that a map lookup
/// is preferable no matter how small the run tables would be.
///
/// ```text
/// // 3 runs: stays a range dispatch
/// 2 3 | 5 6 7 8 9 | 11
///
/// // 13 runs (primes below 44): becomes a sparse map
/// 2 3 | 5 | 7 | 11 | 13 | 17 | 19 | 23 | 29 | 31 | 41 | 43
/// ```
pub const MAX_RUNS_BEFORE_SPARSE: usize = 10;

// =============================================================================
// Size Estimates
// =============================================================================

/// Bytes charged for each run: two comparisons, an offset and a slice.
pub const RUN_OVERHEAD: usize = 24;

/// Bytes charged for each sparse map entry: the key plus a slice of the blob.
pub const SPARSE_ENTRY_OVERHEAD: usize = 16;

// =============================================================================
// Cost Factor
// =============================================================================

/// The run table keeps winning while `runs_cost * den <= sparse_cost * num`.
pub const COST_FACTOR: (usize, usize) = (3, 2);

/// Tunable cost-model configuration for the layout selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutLimits {
    pub max_runs_before_sparse: usize,
    pub run_overhead: usize,
    pub sparse_entry_overhead: usize,
    /// `(numerator, denominator)` of the tolerated size ratio.
    pub cost_factor: (usize, usize),
}

impl Default for LayoutLimits {
    fn default() -> Self {
        LayoutLimits {
            max_runs_before_sparse: MAX_RUNS_BEFORE_SPARSE,
            run_overhead: RUN_OVERHEAD,
            sparse_entry_overhead: SPARSE_ENTRY_OVERHEAD,
            cost_factor: COST_FACTOR,
        }
    }
}

impl LayoutLimits {
    pub fn with_max_runs(mut self, max_runs: usize) -> Self {
        self.max_runs_before_sparse = max_runs;
        self
    }

    /// Whether a run table of `runs_cost` is acceptable next to `sparse_cost`.
    pub fn runs_within_factor(&self, runs_cost: usize, sparse_cost: usize) -> bool {
        let (num, den) = self.cost_factor;
        runs_cost.saturating_mul(den) <= sparse_cost.saturating_mul(num)
    }
}
