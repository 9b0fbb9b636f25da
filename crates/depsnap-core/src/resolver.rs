//! Snapshot version resolution.
//!
//! A snapshot artifact's version is ambiguous (`2.0.0-SNAPSHOT`) until it is
//! pinned to a specific published build. The locally cached metadata may lag
//! behind the remote repository (a teammate deployed) or run ahead of it (a
//! local build has not been deployed yet), so both are consulted and the
//! newer build wins.
//!
//! Metadata access is injected through [`MetadataSource`]; this module does no
//! I/O of its own.

#![allow(clippy::result_large_err)]

use crate::errors::ExError;
use crate::model::{Repositories, Repository, RepositoryMetadata, ResolvedArtifact};
use serde::{Deserialize, Serialize};

/// Access to repository metadata for an artifact.
///
/// `Ok(None)` means "no record exists" and is never an error.
pub trait MetadataSource {
    /// Locally cached metadata for `artifact` from `repository`.
    fn local(
        &self,
        artifact: &ResolvedArtifact,
        repository: &Repository,
    ) -> Result<Option<RepositoryMetadata>, ExError>;

    /// Metadata published by `repository` for `artifact`.
    fn remote(
        &self,
        artifact: &ResolvedArtifact,
        repository: &Repository,
    ) -> Result<Option<RepositoryMetadata>, ExError>;
}

/// A disambiguated version together with the timestamp it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub version: String,
    pub timestamp: String,
}

impl Candidate {
    /// Build a candidate from metadata, if it carries snapshot information.
    pub fn from_metadata(metadata: &RepositoryMetadata, fallback_base: &str) -> Option<Self> {
        Some(Self {
            version: metadata.snapshot_version(fallback_base)?,
            timestamp: metadata.snapshot_timestamp()?.to_string(),
        })
    }
}

/// One repository's cached snapshot build, for the audit listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    pub repository: String,
    pub timestamp: String,
    pub build_number: String,
}

/// Lazily yields `(repository, metadata)` for every repository, in declaration
/// order, that has a cached metadata record for `artifact`.
///
/// Repositories without a cached record are skipped; a record that fails to
/// parse is yielded as an error. Records are yielded whether or not they
/// carry snapshot information.
pub fn local_metadata<'a>(
    source: &'a dyn MetadataSource,
    artifact: &'a ResolvedArtifact,
    repositories: &'a Repositories,
) -> impl Iterator<Item = Result<(&'a Repository, RepositoryMetadata), ExError>> + 'a {
    repositories.iter().filter_map(move |repository| {
        match source.local(artifact, repository) {
            Ok(Some(metadata)) => Some(Ok((repository, metadata))),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    })
}

/// Pick the effective version from the local and remote candidates.
///
/// - equal versions: that version
/// - both present: the greater timestamp (lexically); ties go to local
/// - one present: that one
/// - none: `raw_version`
pub fn choose_candidate(
    local: Option<&Candidate>,
    remote: Option<&Candidate>,
    raw_version: &str,
) -> String {
    match (local, remote) {
        (Some(l), Some(r)) if l.version == r.version => l.version.clone(),
        (Some(l), Some(r)) => {
            if l.timestamp >= r.timestamp {
                l.version.clone()
            } else {
                r.version.clone()
            }
        }
        (Some(l), None) => l.version.clone(),
        (None, Some(r)) => r.version.clone(),
        (None, None) => raw_version.to_string(),
    }
}

/// Resolve the effective version of `artifact`.
///
/// Non-snapshots return their literal version without touching `source`.
/// For snapshots the first cached local record (in repository order) is
/// compared with the designated remote repository's record. A first record
/// without snapshot information leaves the local side absent; later
/// repositories are not consulted. Remote failures are
/// logged and treated as "no remote record".
///
/// # Errors
///
/// Propagates local metadata failures (an unparseable cached record signals a
/// corrupted cache and must not be ignored).
pub fn resolve_version(
    artifact: &ResolvedArtifact,
    repositories: &Repositories,
    source: &dyn MetadataSource,
) -> Result<String, ExError> {
    if !artifact.is_snapshot() {
        tracing::debug!(
            coordinate = %artifact,
            version = %artifact.version,
            "not a snapshot, using literal version"
        );
        return Ok(artifact.version.clone());
    }

    let fallback_base = artifact
        .base_version
        .as_deref()
        .unwrap_or(&artifact.version);

    let local = match local_metadata(source, artifact, repositories).next() {
        Some(Ok((repository, metadata))) => {
            let candidate = Candidate::from_metadata(&metadata, fallback_base);
            tracing::debug!(
                coordinate = %artifact,
                repository_id = %repository.id,
                local_version = ?candidate.as_ref().map(|c| &c.version),
                "local snapshot metadata"
            );
            candidate
        }
        Some(Err(e)) => return Err(e.with_coordinate(artifact.coordinate())),
        None => None,
    };

    let remote = match repositories.designated_remote() {
        Some(repository) => match source.remote(artifact, repository) {
            Ok(metadata) => {
                let candidate = metadata
                    .as_ref()
                    .and_then(|m| Candidate::from_metadata(m, fallback_base));
                tracing::debug!(
                    coordinate = %artifact,
                    repository_id = %repository.id,
                    remote_version = ?candidate.as_ref().map(|c| &c.version),
                    "remote snapshot metadata"
                );
                candidate
            }
            Err(e) => {
                tracing::warn!(
                    coordinate = %artifact,
                    repository_id = %repository.id,
                    err_code = e.code(),
                    error = %e,
                    "remote metadata unavailable, falling back to local"
                );
                None
            }
        },
        None => None,
    };

    let version = choose_candidate(local.as_ref(), remote.as_ref(), &artifact.version);
    tracing::debug!(coordinate = %artifact, version = %version, "resolved snapshot version");
    Ok(version)
}

/// Collect every repository's cached snapshot build for `artifact`, without
/// choosing between them.
///
/// # Errors
///
/// Propagates local metadata failures.
pub fn list_snapshots(
    artifact: &ResolvedArtifact,
    repositories: &Repositories,
    source: &dyn MetadataSource,
) -> Result<Vec<SnapshotRecord>, ExError> {
    local_metadata(source, artifact, repositories)
        .filter_map(|entry| match entry {
            Ok((repository, metadata)) => metadata.snapshot.map(|s| {
                Ok(SnapshotRecord {
                    repository: repository.id.clone(),
                    timestamp: s.timestamp,
                    build_number: s.build_number.to_string(),
                })
            }),
            Err(e) => Some(Err(e.with_coordinate(artifact.coordinate()))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(version: &str, timestamp: &str) -> Candidate {
        Candidate {
            version: version.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_equal_versions_return_shared_value() {
        let l = candidate("1.0-20240101.120000-1", "20240101.120000");
        assert_eq!(
            choose_candidate(Some(&l), Some(&l.clone()), "1.0-SNAPSHOT"),
            "1.0-20240101.120000-1"
        );
    }

    #[test]
    fn test_timestamp_tie_goes_to_local() {
        let l = candidate("1.0-20240101.120000-2", "20240101.120000");
        let r = candidate("1.0-20240101.120000-1", "20240101.120000");
        assert_eq!(
            choose_candidate(Some(&l), Some(&r), "raw"),
            "1.0-20240101.120000-2"
        );
    }

    #[test]
    fn test_newer_side_wins() {
        let old = candidate("1.0-20240101.120000-1", "20240101.120000");
        let new = candidate("1.0-20240102.090000-2", "20240102.090000");
        assert_eq!(choose_candidate(Some(&old), Some(&new), "raw"), new.version);
        assert_eq!(choose_candidate(Some(&new), Some(&old), "raw"), new.version);
    }

    #[test]
    fn test_single_side_and_fallback() {
        let c = candidate("1.0-20240101.120000-1", "20240101.120000");
        assert_eq!(choose_candidate(Some(&c), None, "raw"), c.version);
        assert_eq!(choose_candidate(None, Some(&c), "raw"), c.version);
        assert_eq!(choose_candidate(None, None, "1.0-SNAPSHOT"), "1.0-SNAPSHOT");
    }
}
