//! `compare` command
//!
//! Prints only the status label on stdout so scripts can branch on it.

use super::from_cwd;
use clap::Args;
use depsnap_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use depsnap_engine::DepsnapConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Baseline snapshot (defaults to the retrieved versions file)
    #[arg(long)]
    pub from: Option<PathBuf>,

    /// Current snapshot (defaults to the versions file)
    #[arg(long)]
    pub to: Option<PathBuf>,

    #[arg(long)]
    pub missing_status: Option<String>,

    #[arg(long)]
    pub differ_status: Option<String>,

    #[arg(long)]
    pub match_status: Option<String>,
}

pub fn execute(
    args: CompareArgs,
    mut config: DepsnapConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(from) = args.from {
        config.compare_from = Some(from_cwd(&from)?);
    }
    if let Some(to) = args.to {
        config.compare_to = Some(from_cwd(&to)?);
    }
    if let Some(label) = args.missing_status {
        config.missing_status = label;
    }
    if let Some(label) = args.differ_status {
        config.differ_status = label;
    }
    if let Some(label) = args.match_status {
        config.match_status = label;
    }
    config.validate()?;

    match apply_engine_command(EngineCommand::Compare, &config)? {
        EngineCommandResult::Compare(report) => println!("{}", report.label),
        other => return Err(format!("unexpected engine result: {:?}", other).into()),
    }
    Ok(())
}
