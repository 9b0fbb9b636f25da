//! Canonical snapshot maps.
//!
//! All maps are `BTreeMap`s, so serialization order depends only on the keys
//! and never on resolution order.

#![allow(clippy::result_large_err)]

use crate::errors::ExError;
use crate::model::ResolvedArtifact;
use crate::resolver::SnapshotRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `group → artifact → effective version`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionSnapshot(BTreeMap<String, BTreeMap<String, String>>);

impl VersionSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a version, returning the value it replaced, if any.
    pub fn insert(
        &mut self,
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Option<String> {
        self.0
            .entry(group.into())
            .or_default()
            .insert(artifact.into(), version.into())
    }

    pub fn get(&self, group: &str, artifact: &str) -> Option<&str> {
        self.0.get(group)?.get(artifact).map(|s| s.as_str())
    }

    pub fn groups(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, String>)> {
        self.0.iter()
    }

    /// Total number of artifact entries across all groups.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `coordinate → digest hex`.
pub type HashSnapshot = BTreeMap<String, String>;

/// `coordinate → cached snapshot builds per repository`.
pub type SnapshotListing = BTreeMap<String, Vec<SnapshotRecord>>;

/// How artifacts are keyed within their group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionKeyStyle {
    /// Artifact name only; classifiers of the same artifact collide and the
    /// later one in iteration order wins.
    #[default]
    Artifact,
    /// `name:classifier` for classified artifacts; no collisions.
    ClassifierQualified,
}

impl VersionKeyStyle {
    pub fn key(&self, artifact: &ResolvedArtifact) -> String {
        match (self, artifact.classifier.as_deref()) {
            (VersionKeyStyle::ClassifierQualified, Some(classifier)) => {
                format!("{}:{}", artifact.name, classifier)
            }
            _ => artifact.name.clone(),
        }
    }
}

/// Options for [`build_version_map`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionMapOptions {
    /// Include transitive artifacts, not only directly declared ones.
    pub include_transitive: bool,
    pub key_style: VersionKeyStyle,
}

/// True when the artifact is in scope for a version or hash map.
pub fn in_scope(artifact: &ResolvedArtifact, include_transitive: bool) -> bool {
    include_transitive || artifact.direct
}

/// Build the canonical version map, resolving each in-scope artifact with
/// `resolve`.
///
/// # Errors
///
/// Returns the first error produced by `resolve`.
pub fn build_version_map<F>(
    artifacts: &[ResolvedArtifact],
    options: VersionMapOptions,
    mut resolve: F,
) -> Result<VersionSnapshot, ExError>
where
    F: FnMut(&ResolvedArtifact) -> Result<String, ExError>,
{
    let mut snapshot = VersionSnapshot::new();
    for artifact in artifacts
        .iter()
        .filter(|a| in_scope(a, options.include_transitive))
    {
        let version = resolve(artifact)?;
        let key = options.key_style.key(artifact);
        if let Some(previous) = snapshot.insert(artifact.group.clone(), key.clone(), version) {
            tracing::warn!(
                coordinate = %artifact,
                key = %key,
                replaced = %previous,
                "version map entry overwritten by artifact with the same group and name"
            );
        }
    }
    Ok(snapshot)
}

/// Version map of literal resolved versions, without metadata lookups.
pub fn literal_version_map(
    artifacts: &[ResolvedArtifact],
    options: VersionMapOptions,
) -> VersionSnapshot {
    let mut snapshot = VersionSnapshot::new();
    for artifact in artifacts
        .iter()
        .filter(|a| in_scope(a, options.include_transitive))
    {
        snapshot.insert(
            artifact.group.clone(),
            options.key_style.key(artifact),
            artifact.version.clone(),
        );
    }
    snapshot
}
