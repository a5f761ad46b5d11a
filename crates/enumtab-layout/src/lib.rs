//! Table layout synthesis for enumerated integer types.
//!
//! Data flows strictly downstream:
//!
//! - **normalize**: drop duplicate values (first declaration wins) and sort
//! - **runs**: split the sorted values into maximal consecutive runs
//! - **name_blob**: concatenate names into one string plus an offset index
//! - **select**: pick a `Single`, `Multi` or `Sparse` table from the runs
//!
//! Nothing here mutates after construction; every structure is a pure function
//! of the declaration it was built from.

pub mod name_blob;
pub mod normalize;
pub mod runs;
pub mod select;

pub use name_blob::{IndexWidth, NameBlob};
pub use normalize::{DuplicateEntry, Entry, NameOptions, NormalizedSet, normalize, normalize_with};
pub use runs::{Run, RunList, decompose};
pub use select::{CostEstimate, LayoutPlan, RunTable, SparseTable, TableLayout, select_layout};
