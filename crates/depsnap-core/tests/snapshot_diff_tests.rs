//! Pure diff tests over parsed snapshot documents (no I/O).

use depsnap_core::diff::{compare_documents, DiffVerdict, PatchOp};
use serde_json::{json, Value};

fn version_doc() -> Value {
    json!({
        "com.other": {"util": "0.1"},
        "org.example": {"api": "2.0.0-20240102.090000-1", "core": "1.2.0"}
    })
}

#[test]
fn test_diff_is_reflexive() {
    let doc = version_doc();
    let outcome = compare_documents(&doc, &doc);
    assert_eq!(outcome.verdict, DiffVerdict::Match);
    assert!(outcome.patch.is_none());
}

#[test]
fn test_key_order_does_not_affect_equality() {
    let a: Value =
        serde_json::from_str(r#"{"g": {"a": "1", "b": "2"}, "h": {"c": "3"}}"#).unwrap();
    let b: Value =
        serde_json::from_str(r#"{"h": {"c": "3"}, "g": {"b": "2", "a": "1"}}"#).unwrap();
    assert_eq!(compare_documents(&a, &b).verdict, DiffVerdict::Match);
}

#[test]
fn test_single_added_key_yields_one_add() {
    let from = version_doc();
    let mut to = version_doc();
    to["org.example"]["model"] = json!("1.0.0");

    let outcome = compare_documents(&from, &to);
    assert_eq!(outcome.verdict, DiffVerdict::Differ);
    let patch = outcome.patch.unwrap();
    assert_eq!(patch.len(), 1);
    assert_eq!(patch[0].op, PatchOp::Add);
    assert_eq!(patch[0].path, "/org.example/model");
    assert_eq!(patch[0].value, Some(json!("1.0.0")));
}

#[test]
fn test_added_group_is_one_add_of_the_whole_group() {
    let from = version_doc();
    let mut to = version_doc();
    to["io.new"] = json!({"x": "1"});

    let patch = compare_documents(&from, &to).patch.unwrap();
    assert_eq!(patch.len(), 1);
    assert_eq!(patch[0].op, PatchOp::Add);
    assert_eq!(patch[0].path, "/io.new");
}

#[test]
fn test_reverse_direction_is_a_remove() {
    let from = version_doc();
    let mut to = version_doc();
    to["org.example"]["model"] = json!("1.0.0");

    let patch = compare_documents(&to, &from).patch.unwrap();
    assert_eq!(patch.len(), 1);
    assert_eq!(patch[0].op, PatchOp::Remove);
    assert_eq!(patch[0].path, "/org.example/model");
}

#[test]
fn test_hash_snapshot_shape_is_supported() {
    let from = json!({"org.example:core:jar:1.2.0": "da39a3ee5e6b4b0d3255bfef95601890afd80709"});
    let to = json!({"org.example:core:jar:1.2.0": "a9993e364706816aba3e25717850c26c9cd0d89d"});
    let patch = compare_documents(&from, &to).patch.unwrap();
    assert_eq!(patch.len(), 1);
    assert_eq!(patch[0].op, PatchOp::Replace);
    assert_eq!(patch[0].path, "/org.example:core:jar:1.2.0");
}

#[test]
fn test_patch_serializes_as_json_patch_document() {
    let from = json!({"g": {"a": "1"}});
    let to = json!({"g": {"a": "2"}});
    let patch = compare_documents(&from, &to).patch.unwrap();
    let rendered = serde_json::to_value(&patch).unwrap();
    assert_eq!(
        rendered,
        json!([{"op": "replace", "path": "/g/a", "value": "2"}])
    );
}
