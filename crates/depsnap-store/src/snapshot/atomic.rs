//! Atomic write primitives
//!
//! Uses temp→rename so readers never observe a partially written snapshot

#![allow(clippy::result_large_err)]

use crate::errors::{io_error_at, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(".tmp");
    target.with_file_name(name)
}

/// Atomically write bytes to a file, creating parent directories
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error_at("create_output_dir", parent, e))?;
    }

    let temp_path = temp_path_for(target_path);
    fs::write(&temp_path, content).map_err(|e| io_error_at("write_temp", &temp_path, e))?;
    fs::rename(&temp_path, target_path)
        .map_err(|e| io_error_at("rename_temp", target_path, e))?;

    Ok(())
}
