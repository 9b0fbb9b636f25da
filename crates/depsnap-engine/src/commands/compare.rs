//! `compare`: diff two snapshot files into a status marker and a patch.

#![allow(clippy::result_large_err)]

use super::elapsed_ms;
use crate::config::DepsnapConfig;
use depsnap_core::diff::{compare_documents, missing, DiffOutcome, DiffVerdict, StatusLabels};
use depsnap_core::{log_op_end, log_op_error, log_op_start};
use depsnap_store::errors::Result;
use depsnap_store::snapshot::{read_document, remove_if_exists, write_json, write_text};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Where `compare` writes its outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOutputs {
    pub status_path: PathBuf,
    pub patch_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareReport {
    pub outcome: DiffOutcome,
    /// Literal token written to the status marker
    pub label: String,
    pub status_path: PathBuf,
    /// Set only when a patch file was written (DIFFER)
    pub patch_path: Option<PathBuf>,
}

impl CompareReport {
    pub fn verdict(&self) -> DiffVerdict {
        self.outcome.verdict
    }
}

/// Compare the configured `compare_from` and `compare_to` snapshots.
///
/// MISSING and DIFFER are outcomes, not errors.
///
/// # Errors
///
/// - `Io`: a snapshot could not be read or an output written
/// - `InvalidSnapshot`: a present snapshot could not be parsed
pub fn compare(config: &DepsnapConfig) -> Result<CompareReport> {
    let from = config.compare_from_path();
    let to = config.compare_to_path();
    log_op_start!(
        "compare",
        from = %from.display(),
        to = %to.display()
    );
    let start = Instant::now();

    let outputs = CompareOutputs {
        status_path: config.diff_status_path(),
        patch_path: config.diff_path(),
    };
    let result = compare_files(&from, &to, &outputs, &config.status_labels());
    let duration_ms = elapsed_ms(start);
    match &result {
        Ok(report) => log_op_end!(
            "compare",
            duration_ms = duration_ms,
            verdict = ?report.verdict(),
            patch_len = report.outcome.patch.as_ref().map_or(0, Vec::len)
        ),
        Err(e) => log_op_error!("compare", e.clone(), duration_ms = duration_ms),
    }
    result
}

/// Compare `from` with `to` and write the outputs.
///
/// If either file is absent the verdict is MISSING and no comparison is
/// attempted. A patch file is written only for DIFFER; otherwise any patch
/// left by an earlier run is removed.
///
/// # Errors
///
/// As [`compare`].
pub fn compare_files(
    from: &Path,
    to: &Path,
    outputs: &CompareOutputs,
    labels: &StatusLabels,
) -> Result<CompareReport> {
    let outcome = if !from.exists() || !to.exists() {
        tracing::debug!(
            from_exists = from.exists(),
            to_exists = to.exists(),
            "snapshot missing, skipping comparison"
        );
        missing()
    } else {
        compare_documents(&read_document(from)?, &read_document(to)?)
    };

    let label = outcome.verdict.label(labels).to_string();
    write_text(&label, &outputs.status_path)?;

    let patch_path = match &outcome.patch {
        Some(patch) => {
            write_json(patch, &outputs.patch_path)?;
            Some(outputs.patch_path.clone())
        }
        None => {
            if remove_if_exists(&outputs.patch_path)? {
                tracing::debug!(path = %outputs.patch_path.display(), "removed stale patch");
            }
            None
        }
    };

    Ok(CompareReport {
        outcome,
        label,
        status_path: outputs.status_path.clone(),
        patch_path,
    })
}
