//! Repository metadata parsing.
//!
//! Reads the `maven-metadata.xml` record published alongside snapshot
//! artifacts (and its locally cached `maven-metadata-<repoId>.xml` copy).
//! Only the `version` and `versioning/snapshot` elements matter here;
//! everything else in the document is ignored.

use crate::errors::{DepsnapError, Result};
use crate::model::{RepositoryMetadata, SnapshotInfo};
use serde::Deserialize;

/// File name of a metadata record on a remote repository.
pub const REMOTE_METADATA_FILE: &str = "maven-metadata.xml";

/// File name of the locally cached metadata record for a repository.
pub fn local_metadata_file_name(repository_id: &str) -> String {
    format!("maven-metadata-{}.xml", repository_id)
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    version: Option<String>,
    versioning: Option<RawVersioning>,
}

#[derive(Debug, Deserialize)]
struct RawVersioning {
    snapshot: Option<RawSnapshot>,
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    timestamp: Option<String>,
    #[serde(rename = "buildNumber")]
    build_number: Option<u32>,
}

/// Parse a metadata document.
///
/// `location` names the file or URL the document came from and is only used
/// in error messages.
///
/// A `<snapshot>` element without a `<timestamp>` (a locally installed build
/// marked `localCopy`) carries no usable snapshot information and is treated
/// as absent.
///
/// # Errors
///
/// Returns `DepsnapError::InvalidMetadata` when the document is not
/// well-formed XML or a known element has the wrong shape.
pub fn parse_metadata_str(xml: &str, location: &str) -> Result<RepositoryMetadata> {
    let raw: RawMetadata =
        quick_xml::de::from_str(xml).map_err(|e| DepsnapError::InvalidMetadata {
            location: location.to_string(),
            reason: e.to_string(),
        })?;

    let snapshot = raw
        .versioning
        .and_then(|v| v.snapshot)
        .and_then(|s| match s.timestamp {
            Some(timestamp) if !timestamp.trim().is_empty() => Some(SnapshotInfo {
                timestamp: timestamp.trim().to_string(),
                build_number: s.build_number.unwrap_or(0),
            }),
            _ => None,
        });

    Ok(RepositoryMetadata {
        base_version: raw
            .version
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()),
        snapshot,
    })
}
