//! `versions` and `create-versions` commands

use super::{from_cwd, InputArgs};
use clap::Args;
use depsnap_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use depsnap_engine::commands::versions::VersionsReport;
use depsnap_engine::DepsnapConfig;
use depsnap_store::UrlPolicy;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct VersionsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Include transitive artifacts
    #[arg(long)]
    pub include_all_artifacts: bool,

    /// Versions file to write
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Repository id consulted for remote metadata
    #[arg(long)]
    pub remote_repository: Option<String>,

    /// Keep repository URLs as declared instead of upgrading to https
    #[arg(long)]
    pub preserve_urls: bool,

    /// Timeout in seconds for each remote metadata request
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Key classified artifacts as name:classifier
    #[arg(long)]
    pub classifier_qualified_keys: bool,
}

#[derive(Debug, Args)]
pub struct CreateVersionsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Include transitive artifacts
    #[arg(long)]
    pub include_all_artifacts: bool,

    /// Versions file to write
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn execute(
    args: VersionsArgs,
    mut config: DepsnapConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    config.include_all_artifacts |= args.include_all_artifacts;
    config.classifier_qualified_keys |= args.classifier_qualified_keys;
    if let Some(output) = args.output {
        config.versions_file = from_cwd(&output)?;
    }
    if let Some(id) = args.remote_repository {
        config.remote_repository = Some(id);
    }
    if args.preserve_urls {
        config.url_policy = UrlPolicy::Preserve;
    }
    if let Some(secs) = args.timeout_secs {
        config.remote_timeout_secs = secs;
    }
    config.validate()?;

    let cmd = EngineCommand::Versions {
        input: args.input.input,
    };
    match apply_engine_command(cmd, &config)? {
        EngineCommandResult::Versions(report) => print_report(&report),
        other => return Err(format!("unexpected engine result: {:?}", other).into()),
    }
    Ok(())
}

pub fn execute_create(
    args: CreateVersionsArgs,
    mut config: DepsnapConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    config.include_all_artifacts |= args.include_all_artifacts;
    if let Some(output) = args.output {
        config.versions_file = from_cwd(&output)?;
    }

    let cmd = EngineCommand::CreateVersions {
        input: args.input.input,
    };
    match apply_engine_command(cmd, &config)? {
        EngineCommandResult::Versions(report) => print_report(&report),
        other => return Err(format!("unexpected engine result: {:?}", other).into()),
    }
    Ok(())
}

fn print_report(report: &VersionsReport) {
    println!(
        "Wrote {} versions to {}",
        report.versions.len(),
        report.path.display()
    );
}
