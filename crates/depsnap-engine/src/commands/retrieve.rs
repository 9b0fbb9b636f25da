//! `retrieve`: stage the last published versions file as the baseline.

#![allow(clippy::result_large_err)]

use super::elapsed_ms;
use crate::config::DepsnapConfig;
use depsnap_core::{log_op_end, log_op_error, log_op_start};
use depsnap_store::errors::Result;
use std::path::Path;
use std::time::Instant;

/// Copy `source` to the configured retrieved versions file.
///
/// Returns whether anything was copied; a missing `source` is only a warning.
///
/// # Errors
///
/// Returns `Io` when the copy fails.
pub fn retrieve(source: &Path, config: &DepsnapConfig) -> Result<bool> {
    let target = config.retrieved_versions_path();
    log_op_start!("retrieve", path = %source.display());
    let start = Instant::now();

    let result = depsnap_store::retrieve::retrieve(source, &target);
    let duration_ms = elapsed_ms(start);
    match &result {
        Ok(copied) => log_op_end!(
            "retrieve",
            duration_ms = duration_ms,
            copied = *copied,
            target = %target.display()
        ),
        Err(e) => log_op_error!("retrieve", e.clone(), duration_ms = duration_ms),
    }
    result
}
