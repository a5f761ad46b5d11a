//! Per-type synthesis: Entry Normalizer -> Layout Selector -> Accessor Synthesizer.
//!
//! Each type is synthesized independently. A failure is a terminal result for
//! that type only; callers decide whether to skip it or abort the whole run.

use tracing::{debug, instrument};

use enumtab_common::{Diagnostic, LayoutLimits, SynthesisError, TypeDecl};
use enumtab_emitter::{EnumTableIR, InterpretError, TableInterpreter, synthesize_accessors};
use enumtab_layout::{LayoutPlan, NameOptions, NormalizedSet, normalize_with, select_layout};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    pub names: NameOptions,
    /// Also synthesize the name->value accessor.
    pub reverse_lookup: bool,
    pub limits: LayoutLimits,
}

/// Everything produced for one type.
#[derive(Debug, Clone)]
pub struct SynthesizedType {
    pub set: NormalizedSet,
    pub plan: LayoutPlan,
    pub ir: EnumTableIR,
    pub diagnostics: Vec<Diagnostic>,
}

impl SynthesizedType {
    pub fn type_name(&self) -> &str {
        &self.set.type_name
    }

    pub fn interpreter(&self) -> Result<TableInterpreter<'_>, InterpretError> {
        TableInterpreter::new(&self.ir)
    }

    /// Run every surviving entry through both accessors.
    ///
    /// Returns one message per lookup that disagrees with the normalized set;
    /// an empty list means the tables round-trip.
    pub fn verify(&self) -> Result<Vec<String>, InterpretError> {
        let interp = self.interpreter()?;
        let mut mismatches = Vec::new();
        for entry in &self.set.entries {
            let name = interp.name_from_value(entry.value);
            if name != entry.name.as_str() {
                mismatches.push(format!(
                    "{} names {name}, expected {}",
                    entry.value, entry.name
                ));
            }
            if interp.has_reverse_lookup() {
                let value = interp.value_from_name(&entry.name);
                if value != Some(entry.value) {
                    mismatches.push(format!(
                        "{} resolves to {value:?}, expected {}",
                        entry.name, entry.value
                    ));
                }
            }
        }
        Ok(mismatches)
    }
}

#[instrument(level = "debug", skip_all, fields(type_name = %decl.name))]
pub fn synthesize(
    decl: &TypeDecl,
    options: &SynthesisOptions,
) -> Result<SynthesizedType, SynthesisError> {
    let set = normalize_with(decl, &options.names)?;
    let plan = select_layout(&set, &options.limits);
    let ir = synthesize_accessors(&set, &plan, options.reverse_lookup);

    let mut diagnostics = set.duplicate_diagnostics();
    if set.is_empty() {
        diagnostics.push(Diagnostic::warning(
            &decl.name,
            "no constants declared; every value formats as unknown",
        ));
    }

    debug!(
        layout = plan.layout.kind_name(),
        entries = set.len(),
        runs = plan.runs.len(),
        "synthesized type"
    );

    Ok(SynthesizedType {
        set,
        plan,
        ir,
        diagnostics,
    })
}

/// One result per declaration, in input order.
pub fn synthesize_all<'a>(
    decls: impl IntoIterator<Item = &'a TypeDecl>,
    options: &SynthesisOptions,
) -> Vec<Result<SynthesizedType, SynthesisError>> {
    decls
        .into_iter()
        .map(|decl| synthesize(decl, options))
        .collect()
}
