//! Resolved artifact model.
//!
//! A `ResolvedArtifact` is produced by the host build tool's resolution step
//! and is never mutated here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

fn default_artifact_type() -> String {
    "jar".to_string()
}

fn default_direct() -> bool {
    true
}

/// A single resolved dependency with its downloaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    pub group: String,
    pub name: String,
    /// Resolved version; timestamped for snapshots fetched from a remote
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(default = "default_artifact_type", rename = "type")]
    pub artifact_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Non-timestamped version, e.g. `2.0.0-SNAPSHOT`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_version: Option<String>,
    pub file: PathBuf,
    /// Declared directly by the project rather than pulled in transitively
    #[serde(default = "default_direct")]
    pub direct: bool,
    #[serde(default, rename = "snapshot", skip_serializing_if = "Option::is_none")]
    is_snapshot: Option<bool>,
}

impl ResolvedArtifact {
    /// Create a direct, non-classified jar artifact.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            classifier: None,
            artifact_type: default_artifact_type(),
            scope: None,
            base_version: None,
            file: file.into(),
            direct: true,
            is_snapshot: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_base_version(mut self, base_version: impl Into<String>) -> Self {
        self.base_version = Some(base_version.into());
        self
    }

    pub fn transitive(mut self) -> Self {
        self.direct = false;
        self
    }

    /// Override snapshot detection with the resolver's own flag.
    pub fn with_snapshot_flag(mut self, is_snapshot: bool) -> Self {
        self.is_snapshot = Some(is_snapshot);
        self
    }

    /// Whether this artifact is a mutable, in-development build.
    ///
    /// Uses the resolver-supplied flag when present; otherwise a `-SNAPSHOT`
    /// suffix or a `-yyyyMMdd.HHmmss-N` timestamped version marks a snapshot.
    pub fn is_snapshot(&self) -> bool {
        if let Some(flag) = self.is_snapshot {
            return flag;
        }
        let base = self.base_version.as_deref().unwrap_or(&self.version);
        base.ends_with(SNAPSHOT_SUFFIX) || is_timestamped_version(&self.version)
    }

    /// Coordinate string `group:name:type[:classifier]:version[:scope]`.
    pub fn coordinate(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.group, &self.name, &self.artifact_type];
        if let Some(classifier) = self.classifier.as_deref() {
            parts.push(classifier);
        }
        parts.push(&self.version);
        if let Some(scope) = self.scope.as_deref() {
            parts.push(scope);
        }
        parts.join(":")
    }

    /// Directory holding the artifact's file (and its cached metadata).
    pub fn directory(&self) -> Option<&Path> {
        self.file.parent()
    }
}

impl std::fmt::Display for ResolvedArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.coordinate())
    }
}

/// True for versions of the form `<base>-yyyyMMdd.HHmmss-<build>`.
fn is_timestamped_version(version: &str) -> bool {
    let mut parts = version.rsplitn(3, '-');
    let (Some(build), Some(stamp), Some(_base)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let stamp_ok = stamp.len() == 15
        && stamp.as_bytes()[8] == b'.'
        && stamp
            .bytes()
            .enumerate()
            .all(|(i, b)| i == 8 || b.is_ascii_digit());
    stamp_ok && !build.is_empty() && build.bytes().all(|b| b.is_ascii_digit())
}
