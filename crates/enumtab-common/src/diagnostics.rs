use std::fmt;

use crate::IntKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Note,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

/// A non-fatal observation made while synthesizing one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub type_name: String,
    pub message: String,
}

impl Diagnostic {
    pub fn note(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Note,
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    pub fn warning(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

/// Terminal failure for one type. There is no partial recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    /// A declared value does not fit the type's integer width.
    MalformedInput {
        type_name: String,
        name: String,
        value: i128,
        kind: IntKind,
    },
    /// The declared width is not 8, 16, 32 or 64 bits.
    UnsupportedWidth { type_name: String, bits: u8 },
}

impl SynthesisError {
    pub fn type_name(&self) -> &str {
        match self {
            SynthesisError::MalformedInput { type_name, .. }
            | SynthesisError::UnsupportedWidth { type_name, .. } => type_name,
        }
    }
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthesisError::MalformedInput {
                type_name,
                name,
                value,
                kind,
            } => write!(
                f,
                "{type_name}.{name} = {value} does not fit in {kind} (range {}..={})",
                kind.min_value(),
                kind.max_value()
            ),
            SynthesisError::UnsupportedWidth { type_name, bits } => {
                write!(f, "{type_name}: unsupported integer width of {bits} bits")
            }
        }
    }
}

impl std::error::Error for SynthesisError {}
