//! Declaration manifest: the JSON handed over by the declaration extractor.
//!
//! ```json
//! {
//!   "limits": { "max_runs_before_sparse": 8 },
//!   "types": [
//!     { "name": "Day", "repr": "i32", "entries": [{ "name": "Monday", "value": 0 }] }
//!   ]
//! }
//! ```
//!
//! `limits` is optional and any field left out keeps its default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use enumtab_common::{LayoutLimits, TypeDecl};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<LayoutLimits>,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl Manifest {
    pub fn parse(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("invalid declaration manifest")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn find(&self, type_name: &str) -> Option<&TypeDecl> {
        self.types.iter().find(|decl| decl.name == type_name)
    }
}
