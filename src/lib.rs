//! enumtab: name tables and string accessors for enumerated integer types.
//!
//! The workspace crates do the work:
//! - `enumtab_common`: integer kinds, declarations, limits, diagnostics
//! - `enumtab_layout`: normalization, run decomposition, layout selection
//! - `enumtab_emitter`: accessor IR, its interpreter, the Rust source printer
//!
//! This crate ties them into a per-type pipeline and hosts the CLI.

pub use enumtab_common::{
    Diagnostic, IntKind, LayoutLimits, RawEntry, Severity, SynthesisError, TypeDecl,
};
pub use enumtab_emitter::{EnumTableIR, SourcePrinter, TableInterpreter};
pub use enumtab_layout::{NameOptions, TableLayout};

pub mod pipeline;
pub use pipeline::{SynthesisOptions, SynthesizedType, synthesize, synthesize_all};

// Tracing configuration (text / tree / JSON output for debugging)
pub mod tracing_config;

// Native CLI
#[cfg(feature = "cli")]
pub mod cli;
