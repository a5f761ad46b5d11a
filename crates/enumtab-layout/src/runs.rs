//! Run decomposition.
//!
//! A run is a maximal stretch of sorted values where each value is its
//! predecessor plus one. Values are compared as `i128`, so an unsigned type
//! that wraps from its maximum back to zero never merges across the wrap: the
//! low values simply sort first and form their own run.

use serde::Serialize;
use smallvec::SmallVec;

use crate::normalize::NormalizedSet;

/// Most enumerations decompose into a handful of runs.
pub type RunList = SmallVec<[Run; 4]>;

/// Consecutive values `first..=last`, backed by `entries[start..start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    pub first: i128,
    pub last: i128,
    /// Index of the run's first entry in the normalized set.
    pub start: usize,
}

impl Run {
    pub fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    pub fn is_singleton(&self) -> bool {
        self.first == self.last
    }

    pub fn contains(&self, value: i128) -> bool {
        self.first <= value && value <= self.last
    }

    /// Range of entry indices covered by this run.
    pub fn entry_range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len()
    }
}

/// Split a normalized set into its ordered runs.
pub fn decompose(set: &NormalizedSet) -> RunList {
    let mut runs = RunList::new();
    let mut current: Option<Run> = None;

    for (i, entry) in set.entries.iter().enumerate() {
        match current.as_mut() {
            Some(run) if entry.value == run.last + 1 => run.last = entry.value,
            _ => {
                if let Some(done) = current.take() {
                    runs.push(done);
                }
                current = Some(Run {
                    first: entry.value,
                    last: entry.value,
                    start: i,
                });
            }
        }
    }
    if let Some(done) = current {
        runs.push(done);
    }

    runs
}

#[cfg(test)]
#[path = "../tests/runs_tests.rs"]
mod tests;
