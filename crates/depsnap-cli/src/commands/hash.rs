//! `hash` command

use super::{from_cwd, InputArgs};
use clap::Args;
use depsnap_core::model::ExclusionRule;
use depsnap_core::DigestAlgorithm;
use depsnap_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use depsnap_engine::DepsnapConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct HashArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Digest algorithm: sha1Hex or md5Hex
    #[arg(long)]
    pub algorithm: Option<DigestAlgorithm>,

    /// Exclude artifacts matching group:name[:version[:classifier]] (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub exclusions: Vec<String>,

    /// Include transitive artifacts
    #[arg(long)]
    pub include_all_artifacts: bool,

    /// Hash file to write
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: HashArgs, mut config: DepsnapConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    config
        .exclusions
        .extend(args.exclusions.iter().map(|s| ExclusionRule::parse(s)));
    config.include_all_artifacts |= args.include_all_artifacts;
    if let Some(output) = args.output {
        config.hash_file = from_cwd(&output)?;
    }

    let cmd = EngineCommand::Hash {
        input: args.input.input,
    };
    match apply_engine_command(cmd, &config)? {
        EngineCommandResult::Hash(report) => {
            println!(
                "Wrote {} {} hashes to {}",
                report.hashes.len(),
                config.algorithm,
                report.path.display()
            );
        }
        other => return Err(format!("unexpected engine result: {:?}", other).into()),
    }
    Ok(())
}
