//! Artifact file fingerprinting.
//!
//! Files are hashed in parallel on the rayon global pool; the result is
//! collected into a `BTreeMap`, so output order never depends on scheduling.

#![allow(clippy::result_large_err)]

use crate::errors::{io_error_at, Result};
use depsnap_core::fingerprint::{digest_reader, should_exclude, DigestAlgorithm};
use depsnap_core::model::{ExclusionRule, ResolvedArtifact};
use depsnap_core::HashSnapshot;
use rayon::prelude::*;
use std::fs::File;

/// Digest of the artifact's file.
///
/// # Errors
///
/// Returns `Io` naming the file when it cannot be opened or read.
pub fn fingerprint(artifact: &ResolvedArtifact, algorithm: DigestAlgorithm) -> Result<String> {
    let file_error = |e| {
        io_error_at("fingerprint", &artifact.file, e).with_coordinate(artifact.coordinate())
    };
    let file = File::open(&artifact.file).map_err(file_error)?;
    let digest = digest_reader(file, algorithm).map_err(file_error)?;
    tracing::debug!(coordinate = %artifact, algorithm = %algorithm, "fingerprinted");
    Ok(digest)
}

/// Fingerprint every artifact not excluded by `rules`, keyed by coordinate.
///
/// # Errors
///
/// Returns the first file error encountered.
pub fn fingerprint_all(
    artifacts: &[ResolvedArtifact],
    algorithm: DigestAlgorithm,
    rules: &[ExclusionRule],
) -> Result<HashSnapshot> {
    artifacts
        .par_iter()
        .filter(|artifact| {
            let excluded = should_exclude(artifact, rules);
            if excluded {
                tracing::debug!(coordinate = %artifact, "excluded from fingerprinting");
            }
            !excluded
        })
        .map(|artifact| {
            fingerprint(artifact, algorithm).map(|digest| (artifact.coordinate(), digest))
        })
        .collect()
}
