//! Transforms from selected layouts to accessor IR.

pub mod accessors;
pub mod ir;

pub use accessors::{AccessorSynthesizer, synthesize_accessors};
