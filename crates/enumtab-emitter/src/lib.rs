//! Accessor synthesis and emission for enumtab.
//!
//! - `transforms`: layout -> accessor IR
//! - `runtime`: evaluates accessor IR (value->name, name->value)
//! - `printer`: renders accessor IR as Rust source

pub mod printer;
pub mod runtime;
pub mod transforms;

pub use printer::SourcePrinter;
pub use runtime::{InterpretError, TableInterpreter};
pub use transforms::ir::{
    ArmAction, DispatchArm, EnumTableIR, IndexedSlice, ParserIR, RangeTest, SparseEntry,
    StringerIR, TableDecl, UnknownFormat,
};
pub use transforms::{AccessorSynthesizer, synthesize_accessors};
