//! Entry Normalizer
//!
//! Scans a declaration in order and keeps the first name seen for each value.
//! A later constant that repeats a value is dropped from every table: it is
//! not reachable from value->name and it is not a valid name->value target.
//! The dropped names are kept on the side so callers can report them.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use enumtab_common::{Diagnostic, IntKind, RawEntry, SynthesisError, TypeDecl};

/// A surviving constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub value: i128,
    /// Position in the original declaration list.
    pub declared_order: usize,
}

/// A constant dropped because an earlier one already claimed its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateEntry {
    pub name: String,
    pub value: i128,
    /// Name of the earlier constant that owns the value.
    pub kept: String,
    pub declared_order: usize,
}

/// Name rewriting applied before duplicates are collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameOptions {
    /// Strip this prefix from declared names that start with it.
    pub trim_prefix: Option<String>,
    /// Use an entry's trailing line comment, trimmed, as its name.
    pub line_comment: bool,
}

impl NameOptions {
    fn display_name(&self, entry: &RawEntry) -> String {
        if self.line_comment
            && let Some(comment) = &entry.line_comment
        {
            return comment.trim().to_string();
        }
        match &self.trim_prefix {
            Some(prefix) => entry
                .name
                .strip_prefix(prefix.as_str())
                .unwrap_or(&entry.name)
                .to_string(),
            None => entry.name.clone(),
        }
    }
}

/// Unique-value entries of one type, sorted by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedSet {
    pub type_name: String,
    pub kind: IntKind,
    pub entries: Vec<Entry>,
    #[serde(skip)]
    pub duplicates: Vec<DuplicateEntry>,
}

impl NormalizedSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = i128> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    /// Total bytes of all surviving names.
    pub fn name_bytes(&self) -> usize {
        self.entries.iter().map(|e| e.name.len()).sum()
    }

    /// One note per dropped duplicate, in declaration order.
    pub fn duplicate_diagnostics(&self) -> Vec<Diagnostic> {
        self.duplicates
            .iter()
            .map(|dup| {
                Diagnostic::note(
                    &self.type_name,
                    format!(
                        "{} duplicates the value {} of {} and is not emitted",
                        dup.name, dup.value, dup.kept
                    ),
                )
            })
            .collect()
    }
}

/// Normalize with declared names used as-is.
pub fn normalize(decl: &TypeDecl) -> Result<NormalizedSet, SynthesisError> {
    normalize_with(decl, &NameOptions::default())
}

pub fn normalize_with(
    decl: &TypeDecl,
    options: &NameOptions,
) -> Result<NormalizedSet, SynthesisError> {
    let mut first_by_value: FxHashMap<i128, usize> = FxHashMap::default();
    let mut entries: Vec<Entry> = Vec::with_capacity(decl.entries.len());
    let mut duplicates = Vec::new();

    for (declared_order, raw) in decl.entries.iter().enumerate() {
        if !decl.kind.contains(raw.value) {
            return Err(SynthesisError::MalformedInput {
                type_name: decl.name.clone(),
                name: raw.name.clone(),
                value: raw.value,
                kind: decl.kind,
            });
        }

        let name = options.display_name(raw);
        if let Some(&kept) = first_by_value.get(&raw.value) {
            debug!(
                type_name = %decl.name,
                name = %name,
                value = %raw.value,
                kept = %entries[kept].name,
                "dropping duplicate value"
            );
            duplicates.push(DuplicateEntry {
                name,
                value: raw.value,
                kept: entries[kept].name.clone(),
                declared_order,
            });
            continue;
        }

        first_by_value.insert(raw.value, entries.len());
        entries.push(Entry {
            name,
            value: raw.value,
            declared_order,
        });
    }

    entries.sort_by_key(|e| e.value);

    Ok(NormalizedSet {
        type_name: decl.name.clone(),
        kind: decl.kind,
        entries,
        duplicates,
    })
}

#[cfg(test)]
#[path = "../tests/normalize_tests.rs"]
mod tests;
