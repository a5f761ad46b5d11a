//! Declarations handed over by the declaration extractor.
//!
//! The extractor resolves every constant of an enumerated type to a concrete
//! integer before anything here sees it. Entries keep declaration order.

use serde::{Deserialize, Serialize};

use crate::IntKind;

/// One declared constant: its source name and resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub name: String,
    pub value: i128,
    /// Trailing line comment attached to the declaration, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_comment: Option<String>,
}

impl RawEntry {
    pub fn new(name: impl Into<String>, value: i128) -> Self {
        RawEntry {
            name: name.into(),
            value,
            line_comment: None,
        }
    }

    pub fn with_line_comment(mut self, comment: impl Into<String>) -> Self {
        self.line_comment = Some(comment.into());
        self
    }
}

/// All constants of one enumerated type, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    #[serde(rename = "repr")]
    pub kind: IntKind,
    #[serde(default)]
    pub entries: Vec<RawEntry>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, kind: IntKind) -> Self {
        TypeDecl {
            name: name.into(),
            kind,
            entries: Vec::new(),
        }
    }

    /// Append an entry, builder style.
    pub fn entry(mut self, name: impl Into<String>, value: i128) -> Self {
        self.entries.push(RawEntry::new(name, value));
        self
    }

    /// Build a declaration from `(name, value)` pairs.
    pub fn from_pairs<'a>(
        name: impl Into<String>,
        kind: IntKind,
        pairs: impl IntoIterator<Item = (&'a str, i128)>,
    ) -> Self {
        TypeDecl {
            name: name.into(),
            kind,
            entries: pairs
                .into_iter()
                .map(|(name, value)| RawEntry::new(name, value))
                .collect(),
        }
    }
}
