//! `versions` and `create-versions`.

#![allow(clippy::result_large_err)]

use super::elapsed_ms;
use crate::config::DepsnapConfig;
use depsnap_core::resolver::resolve_version;
use depsnap_core::version_map::{build_version_map, literal_version_map};
use depsnap_core::{log_op_end, log_op_error, log_op_start, VersionSnapshot};
use depsnap_store::errors::Result;
use depsnap_store::metadata::{HttpMetadataFetcher, MavenMetadataSource};
use depsnap_store::snapshot::write_snapshot;
use depsnap_store::ResolutionInput;
use std::path::PathBuf;
use std::time::Instant;

/// A version map and where it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionsReport {
    pub path: PathBuf,
    pub versions: VersionSnapshot,
}

/// Metadata source for `input`: local cache plus HTTP lookups when the
/// local repository root is known.
///
/// # Errors
///
/// Returns `Internal` if the HTTP client cannot be built.
pub fn metadata_source(
    input: &ResolutionInput,
    config: &DepsnapConfig,
) -> Result<MavenMetadataSource> {
    match &input.local_repository {
        Some(local_repository) => Ok(MavenMetadataSource::new(HttpMetadataFetcher::new(
            local_repository,
            config.url_policy,
            config.remote_timeout(),
        )?)),
        None => {
            tracing::warn!(
                "no local_repository in resolution input, remote metadata lookups disabled"
            );
            Ok(MavenMetadataSource::local_only())
        }
    }
}

/// Resolve effective versions (disambiguating snapshots) and write the
/// versions file.
///
/// # Errors
///
/// - `InvalidMetadata`: a cached metadata record is corrupt
/// - `Io` / `Serialization`: the versions file could not be written
pub fn versions(input: &ResolutionInput, config: &DepsnapConfig) -> Result<VersionsReport> {
    log_op_start!("versions", artifact_count = input.artifacts.len());
    let start = Instant::now();

    let result = versions_impl(input, config);
    let duration_ms = elapsed_ms(start);
    match &result {
        Ok(report) => log_op_end!(
            "versions",
            duration_ms = duration_ms,
            artifact_count = report.versions.len(),
            path = %report.path.display()
        ),
        Err(e) => log_op_error!("versions", e.clone(), duration_ms = duration_ms),
    }
    result
}

fn versions_impl(input: &ResolutionInput, config: &DepsnapConfig) -> Result<VersionsReport> {
    let source = metadata_source(input, config)?;
    let repositories = input.repositories(config.remote_repository.as_deref());
    let versions = build_version_map(&input.artifacts, config.version_map_options(), |a| {
        resolve_version(a, &repositories, &source)
    })?;

    let path = config.versions_path();
    write_snapshot(&versions, &path)?;
    Ok(VersionsReport { path, versions })
}

/// Write the versions file from literal resolved versions, without any
/// metadata lookups.
///
/// # Errors
///
/// Returns `Io` / `Serialization` when the versions file cannot be written.
pub fn create_versions(input: &ResolutionInput, config: &DepsnapConfig) -> Result<VersionsReport> {
    log_op_start!("create_versions", artifact_count = input.artifacts.len());
    let start = Instant::now();

    let versions = literal_version_map(&input.artifacts, config.version_map_options());
    let path = config.versions_path();
    let result = write_snapshot(&versions, &path).map(|()| VersionsReport { path, versions });

    let duration_ms = elapsed_ms(start);
    match &result {
        Ok(report) => log_op_end!(
            "create_versions",
            duration_ms = duration_ms,
            artifact_count = report.versions.len(),
            path = %report.path.display()
        ),
        Err(e) => log_op_error!("create_versions", e.clone(), duration_ms = duration_ms),
    }
    result
}
