use super::driver::RunSummary;
use super::reporter::Reporter;
use enumtab_common::Diagnostic;
use std::path::PathBuf;

#[test]
fn formats_plain_diagnostics() {
    let reporter = Reporter::new(false);
    let rendered = reporter.render(&[
        Diagnostic::note("Day", "Tue duplicates the value 1 of Tuesday and is not emitted"),
        Diagnostic::warning("Empty", "no constants declared; every value formats as unknown"),
    ]);
    assert_eq!(
        rendered,
        "Day - note: Tue duplicates the value 1 of Tuesday and is not emitted\n\
         Empty - warning: no constants declared; every value formats as unknown"
    );
}

#[test]
fn empty_diagnostics_render_nothing() {
    assert_eq!(Reporter::new(false).render(&[]), "");
}

#[test]
fn summary_lists_skipped_types() {
    let reporter = Reporter::new(false);
    let mut summary = RunSummary {
        output: PathBuf::from("day_string.rs"),
        generated: vec!["Day".to_string()],
        skipped: Vec::new(),
        diagnostics: Vec::new(),
    };
    assert_eq!(reporter.format_summary(&summary), "wrote day_string.rs (1 type)");

    summary.generated.push("Month".to_string());
    summary.skipped.push("Byte".to_string());
    assert_eq!(
        reporter.format_summary(&summary),
        "wrote day_string.rs (2 types); skipped: Byte"
    );
}

#[test]
fn colored_output_keeps_message() {
    colored::control::set_override(true);
    let reporter = Reporter::new(true);
    let line = reporter.format_diagnostic(&Diagnostic::warning("Day", "something"));
    assert!(line.contains("\u{1b}["), "Should contain ANSI escapes");
    assert!(line.ends_with(": something"));
}
