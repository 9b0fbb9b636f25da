//! Subcommand argument parsing and output.

pub mod compare;
pub mod hash;
pub mod retrieve;
pub mod snapshots;
pub mod versions;

use clap::Args;
use std::path::{Path, PathBuf};

/// Resolution input shared by every command that inspects artifacts.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Resolution input (YAML or JSON) listing repositories and artifacts
    #[arg(long, short, default_value = "resolution.yml")]
    pub input: PathBuf,
}

/// Anchor a command-line path to the working directory so it is not
/// re-rooted under the configured output directory.
pub fn from_cwd(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
