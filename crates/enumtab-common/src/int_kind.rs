//! Underlying integer representation of an enumerated type.
//!
//! Every value moving through the pipeline is carried as an `i128`, which
//! holds the full range of both `i64` and `u64`. An `IntKind` only records
//! which sub-range is legal for a given type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::diagnostics::SynthesisError;

/// Width and signedness of an enumeration's underlying integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IntKind {
    bits: u8,
    signed: bool,
}

impl IntKind {
    pub const I8: IntKind = IntKind::new_unchecked(8, true);
    pub const I16: IntKind = IntKind::new_unchecked(16, true);
    pub const I32: IntKind = IntKind::new_unchecked(32, true);
    pub const I64: IntKind = IntKind::new_unchecked(64, true);
    pub const U8: IntKind = IntKind::new_unchecked(8, false);
    pub const U16: IntKind = IntKind::new_unchecked(16, false);
    pub const U32: IntKind = IntKind::new_unchecked(32, false);
    pub const U64: IntKind = IntKind::new_unchecked(64, false);

    const fn new_unchecked(bits: u8, signed: bool) -> Self {
        IntKind { bits, signed }
    }

    /// Build a kind from an explicit width. Only 8, 16, 32 and 64 bits exist.
    pub fn new(type_name: &str, bits: u8, signed: bool) -> Result<Self, SynthesisError> {
        match bits {
            8 | 16 | 32 | 64 => Ok(IntKind { bits, signed }),
            _ => Err(SynthesisError::UnsupportedWidth {
                type_name: type_name.to_string(),
                bits,
            }),
        }
    }

    pub fn bits(self) -> u8 {
        self.bits
    }

    pub fn is_signed(self) -> bool {
        self.signed
    }

    /// Smallest representable value.
    pub fn min_value(self) -> i128 {
        if self.signed {
            -(1i128 << (self.bits - 1))
        } else {
            0
        }
    }

    /// Largest representable value.
    pub fn max_value(self) -> i128 {
        if self.signed {
            (1i128 << (self.bits - 1)) - 1
        } else {
            (1i128 << self.bits) - 1
        }
    }

    pub fn contains(self, value: i128) -> bool {
        value >= self.min_value() && value <= self.max_value()
    }

    /// Rust primitive spelling, e.g. `i32` or `u64`.
    pub fn rust_name(self) -> &'static str {
        match (self.signed, self.bits) {
            (true, 8) => "i8",
            (true, 16) => "i16",
            (true, 32) => "i32",
            (true, _) => "i64",
            (false, 8) => "u8",
            (false, 16) => "u16",
            (false, 32) => "u32",
            (false, _) => "u64",
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name())
    }
}

impl FromStr for IntKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "i8" => Ok(Self::I8),
            "i16" => Ok(Self::I16),
            "i32" => Ok(Self::I32),
            "i64" | "int" => Ok(Self::I64),
            "u8" => Ok(Self::U8),
            "u16" => Ok(Self::U16),
            "u32" => Ok(Self::U32),
            "u64" | "uint" => Ok(Self::U64),
            other => Err(format!("unknown integer representation `{other}`")),
        }
    }
}

impl TryFrom<String> for IntKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IntKind> for String {
    fn from(kind: IntKind) -> Self {
        kind.rust_name().to_string()
    }
}

#[cfg(test)]
#[path = "../tests/int_kind_tests.rs"]
mod tests;
