//! Retrieval of a previously published versions file.
//!
//! The host build tool downloads the last published snapshot into the
//! workspace; this copies it to the location `compare` reads as its baseline.

#![allow(clippy::result_large_err)]

use crate::errors::{io_error_at, Result};
use crate::snapshot::atomic::atomic_write;
use std::fs;
use std::path::Path;

/// Copy `source` to `target`.
///
/// Returns `Ok(false)` (after a warning) when `source` does not exist.
///
/// # Errors
///
/// Returns `Io` when the source cannot be read or the target written.
pub fn retrieve(source: &Path, target: &Path) -> Result<bool> {
    if !source.exists() {
        tracing::warn!(path = %source.display(), "unable to locate published versions file");
        return Ok(false);
    }
    let content = fs::read(source).map_err(|e| io_error_at("retrieve", source, e))?;
    atomic_write(target, &content)?;
    tracing::debug!(
        from = %source.display(),
        to = %target.display(),
        "retrieved published versions file"
    );
    Ok(true)
}
