use super::manifest::Manifest;
use enumtab_common::{IntKind, LayoutLimits};

#[test]
fn parses_types_and_entries() {
    let manifest = Manifest::parse(
        r#"{
          "types": [
            {
              "name": "Token",
              "repr": "int",
              "entries": [
                { "name": "And", "value": 0, "line_comment": "&" },
                { "name": "Or", "value": 1 }
              ]
            }
          ]
        }"#,
    )
    .expect("valid manifest");

    assert!(manifest.limits.is_none());
    let token = manifest.find("Token").expect("Token declared");
    assert_eq!(token.kind, IntKind::I64);
    assert_eq!(token.entries.len(), 2);
    assert_eq!(token.entries[0].line_comment.as_deref(), Some("&"));
    assert_eq!(token.entries[1].line_comment, None);
    assert!(manifest.find("token").is_none());
}

#[test]
fn partial_limits_keep_defaults() {
    let manifest = Manifest::parse(r#"{ "limits": { "run_overhead": 32 }, "types": [] }"#)
        .expect("valid manifest");
    let limits = manifest.limits.expect("limits present");
    assert_eq!(limits.run_overhead, 32);
    assert_eq!(
        limits.max_runs_before_sparse,
        LayoutLimits::default().max_runs_before_sparse
    );
}

#[test]
fn type_without_entries_is_empty() {
    let manifest =
        Manifest::parse(r#"{ "types": [{ "name": "Empty", "repr": "u16" }] }"#)
            .expect("valid manifest");
    let empty = manifest.find("Empty").expect("Empty declared");
    assert!(empty.entries.is_empty());
    assert_eq!(empty.kind, IntKind::U16);
}

#[test]
fn rejects_unknown_repr() {
    let err = Manifest::parse(r#"{ "types": [{ "name": "F", "repr": "f32" }] }"#).unwrap_err();
    assert!(format!("{err:#}").contains("invalid declaration manifest"));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Manifest::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().starts_with("failed to read"));
}
