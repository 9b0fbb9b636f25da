//! Resolution input produced by the host build tool.
//!
//! ```yaml
//! local_repository: /home/ci/.m2/repository
//! repositories:
//!   - { id: central, url: "https://repo.maven.apache.org/maven2" }
//! artifacts:
//!   - { group: org.example, name: core, version: 1.2.0, file: org/example/core/1.2.0/core-1.2.0.jar }
//! ```
//!
//! JSON documents are accepted too. Relative paths resolve against the
//! directory holding the input document.

#![allow(clippy::result_large_err)]

use crate::errors::{invalid_input, io_error_at, Result};
use depsnap_core::model::{Repositories, Repository, ResolvedArtifact};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolutionInput {
    /// Root of the local artifact repository; required for remote lookups
    #[serde(default)]
    pub local_repository: Option<PathBuf>,
    #[serde(default)]
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub artifacts: Vec<ResolvedArtifact>,
}

impl ResolutionInput {
    /// Declared repositories, with `remote_id` designated for remote lookups
    /// when given.
    pub fn repositories(&self, remote_id: Option<&str>) -> Repositories {
        let repositories = Repositories::new(self.repositories.clone());
        match remote_id {
            Some(id) => repositories.with_remote(id),
            None => repositories,
        }
    }

    fn resolve_relative(mut self, base: &Path) -> Self {
        let absolutize = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        if let Some(local) = self.local_repository.as_mut() {
            absolutize(local);
        }
        for artifact in &mut self.artifacts {
            absolutize(&mut artifact.file);
        }
        self
    }
}

/// Parse a resolution input document.
///
/// # Errors
///
/// Returns `InvalidInput` naming `location` when the document is malformed.
pub fn parse_resolution_input(content: &str, location: &str) -> Result<ResolutionInput> {
    serde_yaml::from_str(content).map_err(|e| {
        invalid_input("load_input", format!("Malformed resolution input: {}", e))
            .with_path(location.to_string())
    })
}

/// Load a resolution input file.
///
/// # Errors
///
/// - `Io` when the file cannot be read
/// - `InvalidInput` when the document is malformed
pub fn load_resolution_input(path: &Path) -> Result<ResolutionInput> {
    let content = fs::read_to_string(path).map_err(|e| io_error_at("load_input", path, e))?;
    let input = parse_resolution_input(&content, &path.display().to_string())?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let input = input.resolve_relative(base);
    tracing::debug!(
        path = %path.display(),
        artifact_count = input.artifacts.len(),
        repository_count = input.repositories.len(),
        "loaded resolution input"
    );
    Ok(input)
}
