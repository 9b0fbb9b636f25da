//! `retrieve` command

use super::from_cwd;
use clap::Args;
use depsnap_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use depsnap_engine::DepsnapConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RetrieveArgs {
    /// Published versions file fetched by the build tool
    #[arg(long)]
    pub source: PathBuf,

    /// Where to stage it (defaults to the retrieved versions file)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn execute(
    args: RetrieveArgs,
    mut config: DepsnapConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output) = args.output {
        config.retrieved_versions_file = from_cwd(&output)?;
    }

    let cmd = EngineCommand::Retrieve {
        source: args.source.clone(),
    };
    match apply_engine_command(cmd, &config)? {
        EngineCommandResult::Retrieve { copied: true } => println!(
            "Retrieved {} to {}",
            args.source.display(),
            config.retrieved_versions_path().display()
        ),
        EngineCommandResult::Retrieve { copied: false } => {
            eprintln!("Unable to locate {}", args.source.display())
        }
        other => return Err(format!("unexpected engine result: {:?}", other).into()),
    }
    Ok(())
}
