//! Layout Selector
//!
//! Chooses how the value->name table is laid out, in priority order:
//!
//! 1. **Single**: one run covers every value. One blob, one index, and the
//!    accessor subtracts the run's first value before indexing.
//! 2. **Multi**: a few runs, each with its own blob and index, dispatched by a
//!    range test. Only chosen while the run count stays at or under
//!    `max_runs_before_sparse` and the estimated size is within the cost factor
//!    of the sparse alternative.
//! 3. **Sparse**: a value->name map. Always valid; used for scattered values.
//!
//! An empty set has no runs and therefore lands on a `Multi` with no tables,
//! which sends every lookup straight to the unknown-value path.

use serde::Serialize;
use tracing::{debug, trace};

use enumtab_common::LayoutLimits;

use crate::name_blob::NameBlob;
use crate::normalize::NormalizedSet;
use crate::runs::{Run, RunList, decompose};

/// One contiguous run with its own names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunTable {
    pub run: Run,
    pub blob: NameBlob,
}

impl RunTable {
    fn build(set: &NormalizedSet, run: Run) -> Self {
        let blob =
            NameBlob::from_names(set.entries[run.entry_range()].iter().map(|e| e.name.as_str()));
        RunTable { run, blob }
    }

    /// Amount subtracted from a value before it indexes this table.
    pub fn offset(&self) -> i128 {
        self.run.first
    }

    pub fn name_for(&self, value: i128) -> Option<&str> {
        self.run
            .contains(value)
            .then(|| self.blob.name((value - self.run.first) as usize))
    }
}

/// Direct value->name table over a single blob.
///
/// `keys[i]` names `blob.name(i)`; keys are ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparseTable {
    pub keys: Vec<i128>,
    pub blob: NameBlob,
}

impl SparseTable {
    fn build(set: &NormalizedSet) -> Self {
        SparseTable {
            keys: set.values().collect(),
            blob: NameBlob::from_names(set.entries.iter().map(|e| e.name.as_str())),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (i128, &str)> + '_ {
        self.keys
            .iter()
            .enumerate()
            .map(move |(i, &key)| (key, self.blob.name(i)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "tables", rename_all = "snake_case")]
pub enum TableLayout {
    Single(RunTable),
    Multi(Vec<RunTable>),
    Sparse(SparseTable),
}

impl TableLayout {
    pub fn kind_name(&self) -> &'static str {
        match self {
            TableLayout::Single(_) => "single",
            TableLayout::Multi(_) => "multi",
            TableLayout::Sparse(_) => "sparse",
        }
    }
}

/// Rough byte-size estimates behind the Multi/Sparse decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    pub runs_cost: usize,
    pub sparse_cost: usize,
}

impl CostEstimate {
    pub fn compute(set: &NormalizedSet, runs: &[Run], limits: &LayoutLimits) -> Self {
        let name_bytes = set.name_bytes();
        // Singleton runs are emitted as an equality arm over a whole blob.
        let index_entries: usize = runs
            .iter()
            .filter(|r| r.len() > 1)
            .map(|r| r.len() + 1)
            .sum();
        CostEstimate {
            runs_cost: runs.len() * limits.run_overhead + name_bytes + index_entries,
            sparse_cost: set.len() * limits.sparse_entry_overhead + name_bytes,
        }
    }
}

/// The chosen layout and the run decomposition it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub runs: RunList,
    pub layout: TableLayout,
    pub cost: CostEstimate,
}

pub fn select_layout(set: &NormalizedSet, limits: &LayoutLimits) -> LayoutPlan {
    let runs = decompose(set);
    let cost = CostEstimate::compute(set, &runs, limits);
    trace!(
        type_name = %set.type_name,
        runs = runs.len(),
        runs_cost = cost.runs_cost,
        sparse_cost = cost.sparse_cost,
        "estimated layout costs"
    );

    let layout = if runs.len() == 1 {
        TableLayout::Single(RunTable::build(set, runs[0]))
    } else if runs.len() <= limits.max_runs_before_sparse
        && limits.runs_within_factor(cost.runs_cost, cost.sparse_cost)
    {
        TableLayout::Multi(runs.iter().map(|&run| RunTable::build(set, run)).collect())
    } else {
        TableLayout::Sparse(SparseTable::build(set))
    };

    debug!(
        type_name = %set.type_name,
        layout = layout.kind_name(),
        runs = runs.len(),
        "selected table layout"
    );

    LayoutPlan { runs, layout, cost }
}

#[cfg(test)]
#[path = "../tests/select_tests.rs"]
mod tests;
