//! depsnap CLI
//!
//! Command-line interface for depsnap

use clap::{Parser, Subcommand};
use depsnap_core::logging_facility::{init, Profile};
use depsnap_engine::DepsnapConfig;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "depsnap")]
#[command(
    about = "depsnap - dependency version snapshots and comparison",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./depsnap.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format: pretty or json
    #[arg(long, global = true, default_value = "pretty")]
    log_format: Profile,

    /// Directory that relative output files resolve against
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Record effective dependency versions, pinning snapshots to builds
    Versions(commands::versions::VersionsArgs),
    /// Record literal resolved versions without metadata lookups
    CreateVersions(commands::versions::CreateVersionsArgs),
    /// Fingerprint resolved artifact files
    Hash(commands::hash::HashArgs),
    /// List cached snapshot builds per repository
    ListSnapshots(commands::snapshots::ListSnapshotsArgs),
    /// Compare two version snapshots
    Compare(commands::compare::CompareArgs),
    /// Stage a previously published versions file as the comparison baseline
    Retrieve(commands::retrieve::RetrieveArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = DepsnapConfig::load_or_default(cli.config.as_deref())?;
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    match cli.command {
        Commands::Versions(args) => commands::versions::execute(args, config),
        Commands::CreateVersions(args) => commands::versions::execute_create(args, config),
        Commands::Hash(args) => commands::hash::execute(args, config),
        Commands::ListSnapshots(args) => commands::snapshots::execute(args, config),
        Commands::Compare(args) => commands::compare::execute(args, config),
        Commands::Retrieve(args) => commands::retrieve::execute(args, config),
    }
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_format);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
