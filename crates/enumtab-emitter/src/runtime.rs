//! Evaluates accessor IR directly.
//!
//! `TableInterpreter` answers the two accessor questions against the IR's
//! constant data without generating any code, which is what the round-trip
//! tests and the CLI's `--check` pass rely on.
//!
//! Indexed and dispatched tables are fully determined by their decls. The
//! sparse map is the one structure that needs building: it is constructed on
//! first use behind a `OnceCell`, so concurrent first callers block on a single
//! initialization and everyone afterwards reads the finished map.

use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::transforms::ir::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    /// A body refers to an identifier no decl defines.
    MissingDecl { ident: String },
    /// An identifier resolves to the wrong kind of decl.
    WrongDecl { ident: String, expected: &'static str },
    /// An index or map entry points outside its blob.
    OutOfBounds { ident: String },
}

impl fmt::Display for InterpretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpretError::MissingDecl { ident } => write!(f, "no declaration named {ident}"),
            InterpretError::WrongDecl { ident, expected } => {
                write!(f, "{ident} is not {expected}")
            }
            InterpretError::OutOfBounds { ident } => {
                write!(f, "{ident} has an offset past the end of its blob")
            }
        }
    }
}

impl std::error::Error for InterpretError {}

/// A blob and the index that slices it, resolved from their identifiers.
#[derive(Debug, Clone, Copy)]
struct ResolvedSlice<'ir> {
    text: &'ir str,
    offsets: &'ir [u32],
    offset: i128,
}

impl<'ir> ResolvedSlice<'ir> {
    fn name(&self, value: i128) -> &'ir str {
        let i = (value - self.offset) as usize;
        &self.text[self.offsets[i] as usize..self.offsets[i + 1] as usize]
    }
}

#[derive(Debug)]
enum ResolvedArm<'ir> {
    Slice(ResolvedSlice<'ir>),
    Whole(&'ir str),
}

#[derive(Debug)]
enum ResolvedStringer<'ir> {
    Indexed {
        lo: i128,
        hi: i128,
        slice: ResolvedSlice<'ir>,
    },
    Dispatch(Vec<(RangeTest, ResolvedArm<'ir>)>),
    Lookup {
        text: &'ir str,
        entries: &'ir [SparseEntry],
    },
}

/// Sparse map built once on first use.
#[derive(Debug)]
struct SparseIndex<'ir> {
    by_value: FxHashMap<i128, &'ir str>,
    /// Entries in ascending value order, for reverse scans.
    ordered: Vec<(i128, &'ir str)>,
}

#[derive(Debug)]
pub struct TableInterpreter<'ir> {
    ir: &'ir EnumTableIR,
    stringer: ResolvedStringer<'ir>,
    sparse: OnceCell<SparseIndex<'ir>>,
    sparse_builds: AtomicUsize,
}

impl<'ir> TableInterpreter<'ir> {
    /// Resolve every identifier the accessor bodies refer to.
    pub fn new(ir: &'ir EnumTableIR) -> Result<Self, InterpretError> {
        let stringer = match &ir.stringer {
            StringerIR::Indexed { lo, hi, slice } => ResolvedStringer::Indexed {
                lo: *lo,
                hi: *hi,
                slice: resolve_slice(ir, slice, *hi)?,
            },
            StringerIR::Dispatch { arms } => {
                let mut resolved = Vec::with_capacity(arms.len());
                for arm in arms {
                    let action = match &arm.action {
                        ArmAction::Slice(slice) => {
                            ResolvedArm::Slice(resolve_slice(ir, slice, arm.test.bounds().1)?)
                        }
                        ArmAction::Whole { blob } => ResolvedArm::Whole(resolve_blob(ir, blob)?),
                    };
                    resolved.push((arm.test, action));
                }
                ResolvedStringer::Dispatch(resolved)
            }
            StringerIR::Lookup { map } => {
                let (text, entries) = resolve_map(ir, map)?;
                ResolvedStringer::Lookup { text, entries }
            }
        };

        if let Some(ParserIR::ScanMap { map }) = &ir.parser {
            resolve_map(ir, map)?;
        }

        Ok(TableInterpreter {
            ir,
            stringer,
            sparse: OnceCell::new(),
            sparse_builds: AtomicUsize::new(0),
        })
    }

    pub fn type_name(&self) -> &str {
        &self.ir.type_name
    }

    pub fn has_reverse_lookup(&self) -> bool {
        self.ir.parser.is_some()
    }

    /// How many times the sparse map has been built: 0 before first use, 1 after.
    pub fn sparse_builds(&self) -> usize {
        self.sparse_builds.load(Ordering::SeqCst)
    }

    /// value -> name. Values without a name render as `Type(<value>)`.
    pub fn name_from_value(&self, value: i128) -> Cow<'ir, str> {
        match self.lookup(value) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.ir.unknown.render(value)),
        }
    }

    /// name -> value, exact and case-sensitive.
    ///
    /// Always `None` when the table was synthesized without reverse lookup.
    pub fn value_from_name(&self, name: &str) -> Option<i128> {
        match self.ir.parser.as_ref()? {
            ParserIR::ScanSpans { spans } => spans
                .iter()
                .flat_map(|&(lo, hi)| lo..=hi)
                .find(|&v| self.lookup(v) == Some(name)),
            ParserIR::ScanMap { .. } => self
                .sparse_index()?
                .ordered
                .iter()
                .find(|(_, n)| *n == name)
                .map(|&(v, _)| v),
        }
    }

    fn lookup(&self, value: i128) -> Option<&'ir str> {
        match &self.stringer {
            ResolvedStringer::Indexed { lo, hi, slice } => {
                (*lo <= value && value <= *hi).then(|| slice.name(value))
            }
            ResolvedStringer::Dispatch(arms) => {
                let (_, action) = arms.iter().find(|(test, _)| test.matches(value))?;
                Some(match action {
                    ResolvedArm::Slice(slice) => slice.name(value),
                    ResolvedArm::Whole(text) => *text,
                })
            }
            ResolvedStringer::Lookup { .. } => self.sparse_index()?.by_value.get(&value).copied(),
        }
    }

    fn sparse_index(&self) -> Option<&SparseIndex<'ir>> {
        let ResolvedStringer::Lookup { text, entries } = &self.stringer else {
            return None;
        };
        let (text, entries): (&'ir str, &'ir [SparseEntry]) = (*text, *entries);
        Some(self.sparse.get_or_init(|| {
            self.sparse_builds.fetch_add(1, Ordering::SeqCst);
            trace!(type_name = %self.ir.type_name, entries = entries.len(), "building sparse map");
            let ordered: Vec<(i128, &'ir str)> = entries
                .iter()
                .map(|e| (e.value, &text[e.start as usize..e.end as usize]))
                .collect();
            SparseIndex {
                by_value: ordered.iter().copied().collect(),
                ordered,
            }
        }))
    }
}

fn resolve_blob<'ir>(ir: &'ir EnumTableIR, ident: &str) -> Result<&'ir str, InterpretError> {
    match ir.decl(ident) {
        Some(TableDecl::NameBlob { text, .. }) => Ok(text),
        Some(_) => Err(InterpretError::WrongDecl {
            ident: ident.to_string(),
            expected: "a name blob",
        }),
        None => Err(InterpretError::MissingDecl {
            ident: ident.to_string(),
        }),
    }
}

/// `hi` is the largest value the slice will be asked for.
fn resolve_slice<'ir>(
    ir: &'ir EnumTableIR,
    slice: &IndexedSlice,
    hi: i128,
) -> Result<ResolvedSlice<'ir>, InterpretError> {
    let text = resolve_blob(ir, &slice.blob)?;
    let offsets = match ir.decl(&slice.index) {
        Some(TableDecl::Index { offsets, .. }) => offsets.as_slice(),
        Some(_) => {
            return Err(InterpretError::WrongDecl {
                ident: slice.index.clone(),
                expected: "an index",
            });
        }
        None => {
            return Err(InterpretError::MissingDecl {
                ident: slice.index.clone(),
            });
        }
    };
    let needed = hi - slice.offset + 2;
    if (offsets.len() as i128) < needed || offsets.iter().any(|&o| o as usize > text.len()) {
        return Err(InterpretError::OutOfBounds {
            ident: slice.index.clone(),
        });
    }
    Ok(ResolvedSlice {
        text,
        offsets,
        offset: slice.offset,
    })
}

fn resolve_map<'ir>(
    ir: &'ir EnumTableIR,
    ident: &str,
) -> Result<(&'ir str, &'ir [SparseEntry]), InterpretError> {
    match ir.decl(ident) {
        Some(TableDecl::SparseMap { blob, entries, .. }) => {
            let text = resolve_blob(ir, blob)?;
            if entries.iter().any(|e| e.end as usize > text.len()) {
                return Err(InterpretError::OutOfBounds {
                    ident: ident.to_string(),
                });
            }
            Ok((text, entries))
        }
        Some(_) => Err(InterpretError::WrongDecl {
            ident: ident.to_string(),
            expected: "a sparse map",
        }),
        None => Err(InterpretError::MissingDecl {
            ident: ident.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
