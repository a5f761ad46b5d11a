//! Accessor Synthesizer (IR-based)
//!
//! Turns a selected table layout into accessor IR.
//!
//! # Patterns
//!
//! ## Single run
//! ```text
//! values 1..=3   ->  NUMBER_NAME + NUMBER_INDEX, Indexed { lo: 1, hi: 3, offset: 1 }
//! ```
//!
//! ## Multiple runs
//! ```text
//! values 2,3 5..9 11  ->  GAP_NAME_0/INDEX_0, GAP_NAME_1/INDEX_1, GAP_NAME_2
//!                         Dispatch [2..=3 slice, 5..=9 slice, ==11 whole]
//! ```
//!
//! ## Sparse
//! ```text
//! primes  ->  PRIME_NAME + PRIME_MAP, Lookup { map: PRIME_MAP }
//! ```

use tracing::debug;

use enumtab_layout::{LayoutPlan, NormalizedSet, RunTable, SparseTable, TableLayout};

use crate::transforms::ir::*;

/// Builds the accessor IR for one normalized type.
pub struct AccessorSynthesizer<'a> {
    set: &'a NormalizedSet,
    idents: Idents,
    reverse_lookup: bool,
}

impl<'a> AccessorSynthesizer<'a> {
    pub fn new(set: &'a NormalizedSet) -> Self {
        AccessorSynthesizer {
            set,
            idents: Idents::new(&set.type_name),
            reverse_lookup: false,
        }
    }

    /// Also synthesize the name->value accessor.
    pub fn with_reverse_lookup(mut self, enabled: bool) -> Self {
        self.reverse_lookup = enabled;
        self
    }

    pub fn synthesize(&self, plan: &LayoutPlan) -> EnumTableIR {
        let mut decls = Vec::new();
        let (stringer, parser) = match &plan.layout {
            TableLayout::Single(table) => self.single(table, &mut decls),
            TableLayout::Multi(tables) => self.multi(tables, &mut decls),
            TableLayout::Sparse(table) => self.sparse(table, &mut decls),
        };

        debug!(
            type_name = %self.set.type_name,
            decls = decls.len(),
            reverse_lookup = self.reverse_lookup,
            "synthesized accessors"
        );

        EnumTableIR {
            type_name: self.set.type_name.clone(),
            kind: self.set.kind,
            decls,
            stringer,
            parser: self.reverse_lookup.then_some(parser),
            unknown: UnknownFormat {
                type_name: self.set.type_name.clone(),
                kind: self.set.kind,
            },
        }
    }

    fn single(&self, table: &RunTable, decls: &mut Vec<TableDecl>) -> (StringerIR, ParserIR) {
        let slice = self.declare_run(table, None, decls);
        let (lo, hi) = (table.run.first, table.run.last);
        (
            StringerIR::Indexed { lo, hi, slice },
            ParserIR::ScanSpans {
                spans: vec![(lo, hi)],
            },
        )
    }

    fn multi(&self, tables: &[RunTable], decls: &mut Vec<TableDecl>) -> (StringerIR, ParserIR) {
        let mut arms = Vec::with_capacity(tables.len());
        for (n, table) in tables.iter().enumerate() {
            let arm = if table.run.is_singleton() {
                let blob = self.idents.name(Some(n));
                decls.push(TableDecl::NameBlob {
                    ident: blob.clone(),
                    text: table.blob.text.clone(),
                });
                DispatchArm {
                    test: RangeTest::Equals(table.run.first),
                    action: ArmAction::Whole { blob },
                }
            } else {
                DispatchArm {
                    test: RangeTest::Between {
                        lo: table.run.first,
                        hi: table.run.last,
                    },
                    action: ArmAction::Slice(self.declare_run(table, Some(n), decls)),
                }
            };
            arms.push(arm);
        }

        let spans = tables.iter().map(|t| (t.run.first, t.run.last)).collect();
        (StringerIR::Dispatch { arms }, ParserIR::ScanSpans { spans })
    }

    fn sparse(&self, table: &SparseTable, decls: &mut Vec<TableDecl>) -> (StringerIR, ParserIR) {
        let blob = self.idents.name(None);
        let map = self.idents.map();
        decls.push(TableDecl::NameBlob {
            ident: blob.clone(),
            text: table.blob.text.clone(),
        });
        let entries = table
            .keys
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let (start, end) = table.blob.span(i);
                SparseEntry { value, start, end }
            })
            .collect();
        decls.push(TableDecl::SparseMap {
            ident: map.clone(),
            blob,
            entries,
        });
        (
            StringerIR::Lookup { map: map.clone() },
            ParserIR::ScanMap { map },
        )
    }

    /// Declare a run's blob and index, returning the slice that reads them.
    fn declare_run(
        &self,
        table: &RunTable,
        run: Option<usize>,
        decls: &mut Vec<TableDecl>,
    ) -> IndexedSlice {
        let blob = self.idents.name(run);
        let index = self.idents.index(run);
        decls.push(TableDecl::NameBlob {
            ident: blob.clone(),
            text: table.blob.text.clone(),
        });
        decls.push(TableDecl::Index {
            ident: index.clone(),
            width: table.blob.width,
            offsets: table.blob.index.clone(),
        });
        IndexedSlice {
            blob,
            index,
            offset: table.offset(),
        }
    }
}

/// Convenience wrapper around [`AccessorSynthesizer`].
pub fn synthesize_accessors(
    set: &NormalizedSet,
    plan: &LayoutPlan,
    reverse_lookup: bool,
) -> EnumTableIR {
    AccessorSynthesizer::new(set)
        .with_reverse_lookup(reverse_lookup)
        .synthesize(plan)
}

#[cfg(test)]
#[path = "../../tests/accessor_tests.rs"]
mod tests;
