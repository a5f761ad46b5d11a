//! Accessor IR (Intermediate Representation)
//!
//! The synthesizer describes the two accessors of a type as data instead of
//! text. The printer walks this IR to produce source, and the interpreter walks
//! it to answer lookups directly.
//!
//! # IR Structure
//!
//! - `TableDecl`: the constant data (name blobs, index arrays, sparse map)
//! - `StringerIR`: the value->name body, referring to decls by identifier
//! - `ParserIR`: the optional name->value body
//! - `UnknownFormat`: the fallback text for values with no name

use serde::Serialize;

use enumtab_common::IntKind;
use enumtab_layout::IndexWidth;

/// Everything emitted for one enumerated type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumTableIR {
    pub type_name: String,
    pub kind: IntKind,
    pub decls: Vec<TableDecl>,
    pub stringer: StringerIR,
    /// Present only when reverse lookup was requested.
    pub parser: Option<ParserIR>,
    pub unknown: UnknownFormat,
}

impl EnumTableIR {
    pub fn decl(&self, ident: &str) -> Option<&TableDecl> {
        self.decls.iter().find(|d| d.ident() == ident)
    }

    pub fn is_sparse(&self) -> bool {
        matches!(self.stringer, StringerIR::Lookup { .. })
    }

    /// Pretty JSON form, for emission layers that consume tables as data.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// =========================================================================
// Table data
// =========================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decl", rename_all = "snake_case")]
pub enum TableDecl {
    /// Concatenated names: `const GAP_NAME_1: &str = "FiveSix...";`
    NameBlob { ident: String, text: String },

    /// Offsets into a blob: `const GAP_INDEX_1: [u8; 6] = [0, 4, ...];`
    Index {
        ident: String,
        width: IndexWidth,
        offsets: Vec<u32>,
    },

    /// Lazily built value->name map slicing `blob`.
    SparseMap {
        ident: String,
        blob: String,
        entries: Vec<SparseEntry>,
    },
}

impl TableDecl {
    pub fn ident(&self) -> &str {
        match self {
            TableDecl::NameBlob { ident, .. }
            | TableDecl::Index { ident, .. }
            | TableDecl::SparseMap { ident, .. } => ident,
        }
    }
}

/// `value => blob[start..end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SparseEntry {
    pub value: i128,
    pub start: u32,
    pub end: u32,
}

// =========================================================================
// Value -> name
// =========================================================================

/// `blob[index[i]..index[i + 1]]` where `i = value - offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedSlice {
    pub blob: String,
    pub index: String,
    pub offset: i128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "body", rename_all = "snake_case")]
pub enum StringerIR {
    /// One bounds check, then an indexed slice.
    Indexed { lo: i128, hi: i128, slice: IndexedSlice },

    /// Range tests in ascending order; no match falls through to unknown.
    Dispatch { arms: Vec<DispatchArm> },

    /// Map lookup; a miss falls through to unknown.
    Lookup { map: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchArm {
    pub test: RangeTest,
    pub action: ArmAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeTest {
    /// `lo <= value && value <= hi`
    Between { lo: i128, hi: i128 },
    /// `value == v`, used for single-value runs
    Equals(i128),
}

impl RangeTest {
    pub fn matches(&self, value: i128) -> bool {
        match *self {
            RangeTest::Between { lo, hi } => lo <= value && value <= hi,
            RangeTest::Equals(v) => value == v,
        }
    }

    pub fn bounds(&self) -> (i128, i128) {
        match *self {
            RangeTest::Between { lo, hi } => (lo, hi),
            RangeTest::Equals(v) => (v, v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmAction {
    Slice(IndexedSlice),
    /// The whole blob is the only name of a single-value run.
    Whole { blob: String },
}

// =========================================================================
// Name -> value
// =========================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "body", rename_all = "snake_case")]
pub enum ParserIR {
    /// Stringify every value of every span, ascending, and compare.
    ScanSpans { spans: Vec<(i128, i128)> },
    /// Walk the sparse map's entries and compare.
    ScanMap { map: String },
}

// =========================================================================
// Unknown values
// =========================================================================

/// Renders `Type(<decimal>)` for values without a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownFormat {
    pub type_name: String,
    pub kind: IntKind,
}

impl UnknownFormat {
    pub fn is_unsigned(&self) -> bool {
        !self.kind.is_signed()
    }

    /// Unsigned kinds print the value's unsigned form: a negative input is
    /// read as its two's complement bit pattern at the kind's width.
    pub fn render(&self, value: i128) -> String {
        if self.is_unsigned() && value < 0 {
            let mask = u128::MAX >> (128 - u32::from(self.kind.bits()));
            format!("{}({})", self.type_name, (value as u128) & mask)
        } else {
            format!("{}({})", self.type_name, value)
        }
    }
}

// =========================================================================
// Identifier helpers
// =========================================================================

/// `HTTPStatus` -> `HTTP_STATUS`, `Day` -> `DAY`.
pub fn screaming_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower)
            {
                out.push('_');
            }
        }
        out.extend(c.to_uppercase());
    }
    out
}

/// Identifier prefix for every constant emitted for `type_name`.
pub(crate) struct Idents {
    prefix: String,
}

impl Idents {
    pub(crate) fn new(type_name: &str) -> Self {
        Idents {
            prefix: screaming_snake(type_name),
        }
    }

    pub(crate) fn name(&self, run: Option<usize>) -> String {
        self.suffixed("NAME", run)
    }

    pub(crate) fn index(&self, run: Option<usize>) -> String {
        self.suffixed("INDEX", run)
    }

    pub(crate) fn map(&self) -> String {
        format!("{}_MAP", self.prefix)
    }

    fn suffixed(&self, what: &str, run: Option<usize>) -> String {
        match run {
            Some(n) => format!("{}_{what}_{n}", self.prefix),
            None => format!("{}_{what}", self.prefix),
        }
    }
}
