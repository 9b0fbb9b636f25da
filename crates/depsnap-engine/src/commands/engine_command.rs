//! Single dispatch point for engine operations.

#![allow(clippy::result_large_err)]

use crate::commands::compare::CompareReport;
use crate::commands::hash::HashReport;
use crate::commands::list_snapshots::SnapshotsReport;
use crate::commands::versions::VersionsReport;
use crate::config::DepsnapConfig;
use depsnap_store::errors::Result;
use depsnap_store::input::load_resolution_input;
use std::path::PathBuf;

/// Engine-level commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Resolve effective versions, consulting repository metadata.
    Versions { input: PathBuf },
    /// Record literal resolved versions.
    CreateVersions { input: PathBuf },
    /// Fingerprint artifact files.
    Hash { input: PathBuf },
    /// List cached snapshot builds per repository.
    ListSnapshots { input: PathBuf },
    /// Diff the baseline and current snapshots.
    Compare,
    /// Stage a previously published versions file as the baseline.
    Retrieve { source: PathBuf },
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommandResult {
    Versions(VersionsReport),
    Hash(HashReport),
    ListSnapshots(SnapshotsReport),
    Compare(CompareReport),
    Retrieve { copied: bool },
}

/// Apply an engine command under `config`.
///
/// # Errors
///
/// Propagates the failure of the underlying operation, including failure to
/// load the resolution input.
pub fn apply_engine_command(
    cmd: EngineCommand,
    config: &DepsnapConfig,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::Versions { input } => {
            let input = load_resolution_input(&input)?;
            crate::commands::versions::versions(&input, config).map(EngineCommandResult::Versions)
        }
        EngineCommand::CreateVersions { input } => {
            let input = load_resolution_input(&input)?;
            crate::commands::versions::create_versions(&input, config)
                .map(EngineCommandResult::Versions)
        }
        EngineCommand::Hash { input } => {
            let input = load_resolution_input(&input)?;
            crate::commands::hash::hash(&input, config).map(EngineCommandResult::Hash)
        }
        EngineCommand::ListSnapshots { input } => {
            let input = load_resolution_input(&input)?;
            crate::commands::list_snapshots::list_snapshots(&input, config)
                .map(EngineCommandResult::ListSnapshots)
        }
        EngineCommand::Compare => {
            crate::commands::compare::compare(config).map(EngineCommandResult::Compare)
        }
        EngineCommand::Retrieve { source } => crate::commands::retrieve::retrieve(&source, config)
            .map(|copied| EngineCommandResult::Retrieve { copied }),
    }
}
