//! `hash`: fingerprint resolved artifact files.

#![allow(clippy::result_large_err)]

use super::elapsed_ms;
use crate::config::DepsnapConfig;
use depsnap_core::model::ResolvedArtifact;
use depsnap_core::version_map::in_scope;
use depsnap_core::{log_op_end, log_op_error, log_op_start, HashSnapshot};
use depsnap_store::errors::Result;
use depsnap_store::fingerprint::fingerprint_all;
use depsnap_store::snapshot::write_snapshot;
use depsnap_store::ResolutionInput;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct HashReport {
    pub path: PathBuf,
    pub hashes: HashSnapshot,
}

/// Digest every in-scope, non-excluded artifact and write the hash file.
///
/// # Errors
///
/// - `Io`: an artifact file could not be read, or the hash file written
/// - `Serialization`: the hash file could not be encoded
pub fn hash(input: &ResolutionInput, config: &DepsnapConfig) -> Result<HashReport> {
    log_op_start!(
        "hash",
        artifact_count = input.artifacts.len(),
        algorithm = config.algorithm.name()
    );
    let start = Instant::now();

    let result = hash_impl(input, config);
    let duration_ms = elapsed_ms(start);
    match &result {
        Ok(report) => log_op_end!(
            "hash",
            duration_ms = duration_ms,
            artifact_count = report.hashes.len(),
            path = %report.path.display()
        ),
        Err(e) => log_op_error!("hash", e.clone(), duration_ms = duration_ms),
    }
    result
}

fn hash_impl(input: &ResolutionInput, config: &DepsnapConfig) -> Result<HashReport> {
    let artifacts: Vec<ResolvedArtifact> = input
        .artifacts
        .iter()
        .filter(|a| in_scope(a, config.include_all_artifacts))
        .cloned()
        .collect();
    let hashes = fingerprint_all(&artifacts, config.algorithm, &config.exclusions)?;

    let path = config.hash_path();
    write_snapshot(&hashes, &path)?;
    Ok(HashReport { path, hashes })
}
