//! Structural comparison of parsed snapshot documents.
//!
//! The core entry point is [`compare_documents`], which accepts two parsed
//! documents and produces a [`DiffOutcome`].

use crate::diff::model::{DiffOutcome, DiffVerdict, PatchEntry, PatchOp};
use json_patch::PatchOperation;
use serde_json::Value;

/// Outcome for a comparison where at least one snapshot does not exist.
pub fn missing() -> DiffOutcome {
    DiffOutcome {
        verdict: DiffVerdict::Missing,
        patch: None,
    }
}

/// Compare two documents.
///
/// Equal documents yield MATCH with no patch. Otherwise DIFFER with the
/// minimal patch that turns `from` into `to`.
pub fn compare_documents(from: &Value, to: &Value) -> DiffOutcome {
    if from == to {
        return DiffOutcome {
            verdict: DiffVerdict::Match,
            patch: None,
        };
    }

    let patch = json_patch::diff(from, to);
    let entries: Vec<PatchEntry> = patch.0.into_iter().map(to_entry).collect();
    DiffOutcome {
        verdict: DiffVerdict::Differ,
        patch: Some(entries),
    }
}

fn to_entry(op: PatchOperation) -> PatchEntry {
    match op {
        PatchOperation::Add(o) => PatchEntry {
            op: PatchOp::Add,
            path: o.path.to_string(),
            from: None,
            value: Some(o.value),
        },
        PatchOperation::Remove(o) => PatchEntry {
            op: PatchOp::Remove,
            path: o.path.to_string(),
            from: None,
            value: None,
        },
        PatchOperation::Replace(o) => PatchEntry {
            op: PatchOp::Replace,
            path: o.path.to_string(),
            from: None,
            value: Some(o.value),
        },
        PatchOperation::Move(o) => PatchEntry {
            op: PatchOp::Move,
            path: o.path.to_string(),
            from: Some(o.from.to_string()),
            value: None,
        },
        PatchOperation::Copy(o) => PatchEntry {
            op: PatchOp::Copy,
            path: o.path.to_string(),
            from: Some(o.from.to_string()),
            value: None,
        },
        PatchOperation::Test(o) => PatchEntry {
            op: PatchOp::Test,
            path: o.path.to_string(),
            from: None,
            value: Some(o.value),
        },
    }
}
