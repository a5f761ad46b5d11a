use colored::Colorize;

use crate::cli::driver::RunSummary;
use enumtab_common::{Diagnostic, Severity};

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    /// `Day - note: Tue duplicates the value 1 of Tuesday and is not emitted`
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let type_name = if self.color {
            diagnostic.type_name.bold().to_string()
        } else {
            diagnostic.type_name.clone()
        };
        format!(
            "{} - {}: {}",
            type_name,
            self.format_severity(diagnostic.severity),
            diagnostic.message
        )
    }

    pub fn format_summary(&self, summary: &RunSummary) -> String {
        let mut out = format!(
            "wrote {} ({} {})",
            summary.output.display(),
            summary.generated.len(),
            if summary.generated.len() == 1 {
                "type"
            } else {
                "types"
            }
        );
        if !summary.skipped.is_empty() {
            let skipped = format!("skipped: {}", summary.skipped.join(", "));
            out.push_str("; ");
            if self.color {
                out.push_str(&skipped.yellow().to_string());
            } else {
                out.push_str(&skipped);
            }
        }
        out
    }

    fn format_severity(&self, severity: Severity) -> String {
        let label = severity.as_str();
        if !self.color {
            return label.to_string();
        }

        match severity {
            Severity::Warning => label.yellow().bold().to_string(),
            Severity::Note => label.cyan().bold().to_string(),
        }
    }
}
