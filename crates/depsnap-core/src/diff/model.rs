//! Snapshot diff output types.

use serde::{Deserialize, Serialize};

/// Relationship between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiffVerdict {
    /// Structurally identical
    Match,
    /// Both present, structurally different
    Differ,
    /// At least one side absent; no comparison attempted
    Missing,
}

impl DiffVerdict {
    /// The status marker for this verdict under the given labels.
    pub fn label<'a>(&self, labels: &'a StatusLabels) -> &'a str {
        match self {
            DiffVerdict::Match => &labels.matched,
            DiffVerdict::Differ => &labels.differ,
            DiffVerdict::Missing => &labels.missing,
        }
    }
}

/// Literal tokens written to the status marker file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLabels {
    pub missing: String,
    pub differ: String,
    pub matched: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            missing: "MISSING".to_string(),
            differ: "DIFFER".to_string(),
            matched: "MATCH".to_string(),
        }
    }
}

/// Patch operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

/// One edit from `from` to `to`, addressed by JSON pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchEntry {
    pub op: PatchOp,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// Verdict plus the patch (present only for DIFFER).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffOutcome {
    pub verdict: DiffVerdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Vec<PatchEntry>>,
}

impl DiffOutcome {
    pub fn is_match(&self) -> bool {
        self.verdict == DiffVerdict::Match
    }
}
