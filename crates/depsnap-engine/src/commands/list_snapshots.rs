//! `list-snapshots`: audit which snapshot builds each repository cached.

#![allow(clippy::result_large_err)]

use super::elapsed_ms;
use crate::config::DepsnapConfig;
use depsnap_core::{log_op_end, log_op_error, log_op_start, SnapshotListing};
use depsnap_store::errors::Result;
use depsnap_store::metadata::MavenMetadataSource;
use depsnap_store::snapshot::write_json;
use depsnap_store::ResolutionInput;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotsReport {
    pub path: PathBuf,
    pub listing: SnapshotListing,
}

/// List the locally cached snapshot builds of every snapshot artifact
/// (transitive ones included) and write the listing as JSON.
///
/// Artifacts with no cached snapshot metadata are left out.
///
/// # Errors
///
/// - `InvalidMetadata`: a cached metadata record is corrupt
/// - `Io` / `Serialization`: the listing could not be written
pub fn list_snapshots(input: &ResolutionInput, config: &DepsnapConfig) -> Result<SnapshotsReport> {
    log_op_start!("list_snapshots", artifact_count = input.artifacts.len());
    let start = Instant::now();

    let result = list_snapshots_impl(input, config);
    let duration_ms = elapsed_ms(start);
    match &result {
        Ok(report) => log_op_end!(
            "list_snapshots",
            duration_ms = duration_ms,
            artifact_count = report.listing.len(),
            path = %report.path.display()
        ),
        Err(e) => log_op_error!("list_snapshots", e.clone(), duration_ms = duration_ms),
    }
    result
}

fn list_snapshots_impl(input: &ResolutionInput, config: &DepsnapConfig) -> Result<SnapshotsReport> {
    let source = MavenMetadataSource::local_only();
    let repositories = input.repositories(config.remote_repository.as_deref());

    let mut listing = SnapshotListing::new();
    for artifact in input.artifacts.iter().filter(|a| a.is_snapshot()) {
        tracing::debug!(coordinate = %artifact, "checking snapshot");
        let records = depsnap_core::resolver::list_snapshots(artifact, &repositories, &source)?;
        if !records.is_empty() {
            listing.entry(artifact.coordinate()).or_default().extend(records);
        }
    }

    let path = config.snapshots_path();
    write_json(&listing, &path)?;
    Ok(SnapshotsReport { path, listing })
}
