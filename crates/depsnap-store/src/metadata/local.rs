//! Locally cached repository metadata.

#![allow(clippy::result_large_err)]

use crate::errors::{invalid_input, Result};
use depsnap_core::errors::{DepsnapError, ExError};
use depsnap_core::metadata::{local_metadata_file_name, parse_metadata_str};
use depsnap_core::model::{RepositoryMetadata, ResolvedArtifact};
use std::fs;
use std::io::ErrorKind;

/// Read `<artifact dir>/maven-metadata-<repository_id>.xml`.
///
/// A missing file is not an error and yields `Ok(None)`.
///
/// # Errors
///
/// - `InvalidInput` when the artifact file has no parent directory
/// - `InvalidMetadata` when the file exists but cannot be read or parsed
pub fn read_local(
    artifact: &ResolvedArtifact,
    repository_id: &str,
) -> Result<Option<RepositoryMetadata>> {
    let dir = artifact.directory().ok_or_else(|| {
        invalid_input(
            "read_local_metadata",
            format!("artifact file {} has no parent directory", artifact.file.display()),
        )
        .with_coordinate(artifact.coordinate())
    })?;
    let path = dir.join(local_metadata_file_name(repository_id));
    let location = path.display().to_string();

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %location, "no cached metadata");
            return Ok(None);
        }
        Err(e) => {
            return Err(ExError::from(DepsnapError::InvalidMetadata {
                location,
                reason: e.to_string(),
            })
            .with_op("read_local_metadata"))
        }
    };

    let metadata = parse_metadata_str(&content, &location)
        .map_err(|e| ExError::from(e).with_op("read_local_metadata"))?;
    tracing::debug!(
        path = %location,
        has_snapshot = metadata.snapshot.is_some(),
        "read cached metadata"
    );
    Ok(Some(metadata))
}
