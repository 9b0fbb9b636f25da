//! Repository metadata describing the latest snapshot build of an artifact.

use serde::{Deserialize, Serialize};

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Timestamp and build number of the latest published snapshot.
///
/// Timestamps are fixed-width `yyyyMMdd.HHmmss` UTC stamps, so lexical order
/// equals chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotInfo {
    pub timestamp: String,
    pub build_number: u32,
}

/// Parsed repository metadata record.
///
/// `snapshot: None` means no snapshot information is available, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    pub base_version: Option<String>,
    pub snapshot: Option<SnapshotInfo>,
}

impl RepositoryMetadata {
    /// Disambiguated version `<base without -SNAPSHOT>-<timestamp>-<buildNumber>`.
    ///
    /// `fallback_base` is used when the record carries no `<version>`.
    /// Returns `None` without snapshot information.
    pub fn snapshot_version(&self, fallback_base: &str) -> Option<String> {
        let snapshot = self.snapshot.as_ref()?;
        let base = self.base_version.as_deref().unwrap_or(fallback_base);
        let stem = base.strip_suffix(SNAPSHOT_SUFFIX).unwrap_or(base);
        Some(format!(
            "{}-{}-{}",
            stem, snapshot.timestamp, snapshot.build_number
        ))
    }

    pub fn snapshot_timestamp(&self) -> Option<&str> {
        self.snapshot.as_ref().map(|s| s.timestamp.as_str())
    }
}
