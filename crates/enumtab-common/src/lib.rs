//! Common types and utilities shared by the enumtab crates.
//!
//! This crate provides the foundational types used across the pipeline:
//! - Integer kinds (`IntKind`) describing the width and signedness of a type
//! - Declarations handed over by the extractor (`TypeDecl`, `RawEntry`)
//! - Layout cost-model limits (`LayoutLimits`)
//! - Diagnostics and the error taxonomy (`Diagnostic`, `SynthesisError`)

// Integer width/signedness of an enumerated type
pub mod int_kind;
pub use int_kind::IntKind;

// Raw declarations produced by the upstream extractor
pub mod decl;
pub use decl::{RawEntry, TypeDecl};

// Centralized cost-model knobs
pub mod limits;
pub use limits::LayoutLimits;

// Non-fatal notes and hard failures
pub mod diagnostics;
pub use diagnostics::{Diagnostic, Severity, SynthesisError};
