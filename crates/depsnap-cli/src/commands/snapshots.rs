//! `list-snapshots` command

use super::{from_cwd, InputArgs};
use clap::Args;
use depsnap_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use depsnap_engine::DepsnapConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ListSnapshotsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Listing file to write
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn execute(
    args: ListSnapshotsArgs,
    mut config: DepsnapConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output) = args.output {
        config.snapshots_file = from_cwd(&output)?;
    }

    let cmd = EngineCommand::ListSnapshots {
        input: args.input.input,
    };
    match apply_engine_command(cmd, &config)? {
        EngineCommandResult::ListSnapshots(report) => {
            println!(
                "Listed {} snapshot artifacts in {}",
                report.listing.len(),
                report.path.display()
            );
        }
        other => return Err(format!("unexpected engine result: {:?}", other).into()),
    }
    Ok(())
}
