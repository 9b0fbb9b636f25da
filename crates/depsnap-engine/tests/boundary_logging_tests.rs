//! Operation boundary events, captured in-process.

mod common;

use common::Workspace;
use depsnap_core::logging_facility::test_capture::init_test_capture;
use depsnap_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ARTIFACT_COUNT, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_PATCH_LEN, FIELD_PATH, FIELD_VERDICT,
};
use depsnap_engine::commands::compare::compare;
use depsnap_engine::commands::hash::hash;
use depsnap_engine::commands::versions::create_versions;
use depsnap_store::input::load_resolution_input;
use std::fs;

#[test]
fn test_successful_operation_logs_one_start_and_one_end() {
    let capture = init_test_capture();
    let ws = Workspace::new();
    let input = load_resolution_input(&ws.input_path()).unwrap();

    create_versions(&input, &ws.config()).unwrap();

    let events = capture.events_for_op("create_versions");
    let starts = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .count();
    let ends = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .count();
    assert_eq!(starts, 1);
    assert_eq!(ends, 1);
    assert!(events.iter().all(|e| e.event.as_deref() != Some(EVENT_END_ERROR)));

    let start = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_START))
        .unwrap();
    assert_eq!(start.field(FIELD_ARTIFACT_COUNT), Some("3"));

    let end = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .unwrap();
    assert_eq!(end.field(FIELD_ARTIFACT_COUNT), Some("2"));
    assert!(end.field(FIELD_DURATION_MS).is_some());
    assert!(end
        .field(FIELD_PATH)
        .is_some_and(|p| p.ends_with("versions.yml")));
}

#[test]
fn test_compare_end_event_reports_verdict_and_patch_len() {
    let capture = init_test_capture();
    let ws = Workspace::new();
    let config = ws.config();
    common::write(
        ws.root(),
        "out/versions-retrieved.yml",
        b"org.example:\n  core: 1.2.0\n",
    );
    common::write(ws.root(), "out/versions.yml", b"org.example:\n  core: 1.3.0\n");

    compare(&config).unwrap();

    let events = capture.events_for_op("compare");
    let end = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .unwrap();
    assert_eq!(end.field(FIELD_VERDICT), Some("Differ"));
    assert_eq!(end.field(FIELD_PATCH_LEN), Some("1"));
}

#[test]
fn test_failed_operation_logs_end_error_with_code() {
    let capture = init_test_capture();
    let ws = Workspace::new();
    fs::remove_file(ws.root().join("m2/org/example/core/1.2.0/core-1.2.0.jar")).unwrap();
    let input = load_resolution_input(&ws.input_path()).unwrap();

    let err = hash(&input, &ws.config()).unwrap_err();
    assert_eq!(err.code(), "ERR_IO");

    let events = capture.events_for_op("hash");
    let errors: Vec<_> = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_IO"));
    assert_eq!(errors[0].field(FIELD_ERR_KIND), Some("Io"));
    assert!(events.iter().all(|e| e.event.as_deref() != Some(EVENT_END)));
}
