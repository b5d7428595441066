use std::fs;

use nimrst_docs::{load_bundle, DocsError, SymbolKind};

fn write_bundle(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture bundle");
    path
}

#[test]
fn loads_a_complete_bundle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_bundle(
        &dir,
        "mathutil.json",
        r#"{
            "moduleDescription": "<p>Math helpers.</p>",
            "entries": [
                {"name": "add", "type": "skProc", "code": "proc add(a, b: int): int", "description": "<p>Adds.</p>"},
                {"name": "Vec2", "type": "skType", "code": "Vec2 = object"}
            ]
        }"#,
    );

    let bundle = load_bundle(&path).expect("bundle loads");
    assert_eq!(bundle.module_description, "<p>Math helpers.</p>");
    assert_eq!(bundle.entries.len(), 2);
    assert_eq!(bundle.entries[0].name, "add");
    assert_eq!(bundle.entries[0].kind, SymbolKind::Procedure);
    assert_eq!(bundle.entries[1].kind, SymbolKind::Type);
    assert_eq!(bundle.entries[1].description, "");
}

#[test]
fn preserves_entry_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_bundle(
        &dir,
        "order.json",
        r#"{"entries": [
            {"name": "c", "type": "skProc"},
            {"name": "a", "type": "skProc"},
            {"name": "b", "type": "skProc"}
        ]}"#,
    );

    let bundle = load_bundle(&path).expect("bundle loads");
    let names: Vec<&str> = bundle.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[test]
fn missing_kind_defaults_to_procedure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_bundle(&dir, "partial.json", r#"{"entries": [{"name": "orphan"}]}"#);

    let bundle = load_bundle(&path).expect("bundle loads");
    assert_eq!(bundle.entries[0].kind, SymbolKind::Procedure);
}

#[test]
fn unrecognized_kind_defaults_to_procedure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_bundle(
        &dir,
        "odd.json",
        r#"{"entries": [{"name": "weird", "type": "skEnumField"}]}"#,
    );

    let bundle = load_bundle(&path).expect("bundle loads");
    assert_eq!(bundle.entries[0].kind, SymbolKind::Procedure);
}

#[test]
fn empty_object_is_a_valid_bundle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_bundle(&dir, "empty.json", "{}");

    let bundle = load_bundle(&path).expect("bundle loads");
    assert!(bundle.is_empty());
    assert_eq!(bundle.module_description, "");
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope.json");

    match load_bundle(&path) {
        Err(DocsError::NotFound(reported)) => assert_eq!(reported, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn invalid_json_is_malformed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_bundle(&dir, "broken.json", "{ not json");

    match load_bundle(&path) {
        Err(DocsError::Malformed { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Malformed, got {other:?}"),
    }
}
