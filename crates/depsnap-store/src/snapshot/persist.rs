//! Snapshot serialization.
//!
//! Snapshots are written as YAML. Every map in them is a `BTreeMap`, so the
//! same facts always produce byte-identical output. Reads go through YAML as
//! well (JSON is valid YAML) and land in a `serde_json::Value` for diffing.

#![allow(clippy::result_large_err)]

use crate::errors::{invalid_snapshot, io_error_at, serialization, Result};
use crate::snapshot::atomic::atomic_write;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Write `value` as canonical YAML.
///
/// # Errors
///
/// - `ExErrorKind::Serialization`: YAML encoding failed
/// - `ExErrorKind::Io`: the file or its parent directory could not be written
pub fn write_snapshot<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(value).map_err(|e| serialization("write_snapshot", e))?;
    atomic_write(path, with_trailing_newline(yaml).as_bytes())?;
    tracing::debug!(path = %path.display(), "wrote snapshot");
    Ok(())
}

/// Write `value` as pretty-printed JSON.
///
/// # Errors
///
/// - `ExErrorKind::Serialization`: JSON encoding failed
/// - `ExErrorKind::Io`: the file could not be written
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| serialization("write_json", e))?;
    atomic_write(path, with_trailing_newline(json).as_bytes())?;
    tracing::debug!(path = %path.display(), "wrote json document");
    Ok(())
}

/// Write a plain text marker file.
///
/// # Errors
///
/// Returns `ExErrorKind::Io` when the file could not be written.
pub fn write_text(text: &str, path: &Path) -> Result<()> {
    atomic_write(path, text.as_bytes())
}

/// Remove `path` if it exists, returning whether anything was removed.
///
/// # Errors
///
/// Returns `ExErrorKind::Io` when an existing file cannot be removed.
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(io_error_at("remove_stale_output", path, e)),
    }
}

/// Parse a snapshot file into a structured document.
///
/// # Errors
///
/// - `ExErrorKind::Io`: the file could not be read
/// - `ExErrorKind::InvalidSnapshot`: the content is not valid YAML/JSON
pub fn read_document(path: &Path) -> Result<serde_json::Value> {
    let content = fs::read_to_string(path).map_err(|e| io_error_at("read_document", path, e))?;
    serde_yaml::from_str(&content).map_err(|e| invalid_snapshot(path, e.to_string()))
}
