//! Configuration file (`depsnap.toml`).
//!
//! Every field is optional. Output file names that are relative resolve
//! against `output_dir`; command-line flags are applied on top by the CLI.
//!
//! ```toml
//! algorithm = "md5Hex"
//! include_all_artifacts = true
//! output_dir = "build/depsnap"
//! remote_repository = "internal"
//! url_policy = "preserve"
//!
//! [[exclusions]]
//! group = "org.example"
//! name = "docs"
//! ```

#![allow(clippy::result_large_err)]

use depsnap_core::diff::StatusLabels;
use depsnap_core::errors::{DepsnapError, ExError};
use depsnap_core::fingerprint::DigestAlgorithm;
use depsnap_core::model::ExclusionRule;
use depsnap_core::version_map::{VersionKeyStyle, VersionMapOptions};
use depsnap_store::errors::{io_error_at, Result};
use depsnap_store::UrlPolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Conventional config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "depsnap.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepsnapConfig {
    pub algorithm: DigestAlgorithm,
    pub exclusions: Vec<ExclusionRule>,
    /// Include transitive artifacts in version and hash maps
    pub include_all_artifacts: bool,
    /// Baseline snapshot; defaults to the retrieved versions file
    pub compare_from: Option<PathBuf>,
    /// Snapshot compared against the baseline; defaults to the versions file
    pub compare_to: Option<PathBuf>,
    pub missing_status: String,
    pub differ_status: String,
    pub match_status: String,
    pub output_dir: PathBuf,
    pub versions_file: PathBuf,
    pub retrieved_versions_file: PathBuf,
    pub hash_file: PathBuf,
    pub snapshots_file: PathBuf,
    pub diff_status_file: PathBuf,
    pub diff_file: PathBuf,
    /// Repository id consulted for remote metadata; first declared if unset
    pub remote_repository: Option<String>,
    pub url_policy: UrlPolicy,
    pub remote_timeout_secs: u64,
    /// Key classified artifacts as `name:classifier` in version maps
    pub classifier_qualified_keys: bool,
}

impl Default for DepsnapConfig {
    fn default() -> Self {
        let labels = StatusLabels::default();
        Self {
            algorithm: DigestAlgorithm::default(),
            exclusions: Vec::new(),
            include_all_artifacts: false,
            compare_from: None,
            compare_to: None,
            missing_status: labels.missing,
            differ_status: labels.differ,
            match_status: labels.matched,
            output_dir: PathBuf::from("target/depsnap"),
            versions_file: PathBuf::from("versions.yml"),
            retrieved_versions_file: PathBuf::from("versions-retrieved.yml"),
            hash_file: PathBuf::from("hashes.yml"),
            snapshots_file: PathBuf::from("snapshots.json"),
            diff_status_file: PathBuf::from("versions-diff-status.txt"),
            diff_file: PathBuf::from("versions-diff.json"),
            remote_repository: None,
            url_policy: UrlPolicy::default(),
            remote_timeout_secs: 10,
            classifier_qualified_keys: false,
        }
    }
}

fn config_error(reason: impl Into<String>) -> ExError {
    ExError::from(DepsnapError::InvalidConfig {
        reason: reason.into(),
    })
    .with_op("load_config")
}

impl DepsnapConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed TOML, unknown keys, an
    /// unsupported algorithm or an invalid value.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns `Io` when the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str) with the path attached.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| io_error_at("load_config", path, e))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| e.with_path(path.display().to_string()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `path` if given, else `depsnap.toml` in the working directory if
    /// it exists, else the defaults.
    ///
    /// # Errors
    ///
    /// As [`load`](Self::load).
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let conventional = Path::new(DEFAULT_CONFIG_FILE);
                if conventional.is_file() {
                    Self::load(conventional)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Check values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.remote_timeout_secs == 0 {
            return Err(config_error("remote_timeout_secs must be greater than zero"));
        }
        for (field, label) in [
            ("missing_status", &self.missing_status),
            ("differ_status", &self.differ_status),
            ("match_status", &self.match_status),
        ] {
            if label.trim().is_empty() {
                return Err(config_error(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }

    fn output_path(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.output_dir.join(file)
        }
    }

    pub fn versions_path(&self) -> PathBuf {
        self.output_path(&self.versions_file)
    }

    pub fn retrieved_versions_path(&self) -> PathBuf {
        self.output_path(&self.retrieved_versions_file)
    }

    pub fn hash_path(&self) -> PathBuf {
        self.output_path(&self.hash_file)
    }

    pub fn snapshots_path(&self) -> PathBuf {
        self.output_path(&self.snapshots_file)
    }

    pub fn diff_status_path(&self) -> PathBuf {
        self.output_path(&self.diff_status_file)
    }

    pub fn diff_path(&self) -> PathBuf {
        self.output_path(&self.diff_file)
    }

    pub fn compare_from_path(&self) -> PathBuf {
        self.compare_from
            .clone()
            .unwrap_or_else(|| self.retrieved_versions_path())
    }

    pub fn compare_to_path(&self) -> PathBuf {
        self.compare_to
            .clone()
            .unwrap_or_else(|| self.versions_path())
    }

    pub fn status_labels(&self) -> StatusLabels {
        StatusLabels {
            missing: self.missing_status.clone(),
            differ: self.differ_status.clone(),
            matched: self.match_status.clone(),
        }
    }

    pub fn version_map_options(&self) -> VersionMapOptions {
        VersionMapOptions {
            include_transitive: self.include_all_artifacts,
            key_style: if self.classifier_qualified_keys {
                VersionKeyStyle::ClassifierQualified
            } else {
                VersionKeyStyle::Artifact
            },
        }
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depsnap_core::errors::ExErrorKind;

    #[test]
    fn test_defaults() {
        let config = DepsnapConfig::default();
        assert_eq!(config.algorithm, DigestAlgorithm::Sha1);
        assert_eq!(
            config.versions_path(),
            PathBuf::from("target/depsnap/versions.yml")
        );
        assert_eq!(
            config.compare_from_path(),
            PathBuf::from("target/depsnap/versions-retrieved.yml")
        );
        assert_eq!(config.compare_to_path(), config.versions_path());
        assert_eq!(config.remote_timeout(), Duration::from_secs(10));
        assert_eq!(config.status_labels(), StatusLabels::default());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(
            DepsnapConfig::from_toml_str("").unwrap(),
            DepsnapConfig::default()
        );
    }

    #[test]
    fn test_full_document() {
        let config = DepsnapConfig::from_toml_str(
            r#"
algorithm = "md5Hex"
include_all_artifacts = true
output_dir = "build/out"
hash_file = "/abs/hashes.yml"
match_status = "SAME"
remote_repository = "internal"
url_policy = "preserve"
remote_timeout_secs = 3
classifier_qualified_keys = true

[[exclusions]]
group = "org.example"
name = "docs"

[[exclusions]]
artifactId = "sources"
"#,
        )
        .unwrap();

        assert_eq!(config.algorithm, DigestAlgorithm::Md5);
        assert_eq!(config.exclusions.len(), 2);
        assert_eq!(config.exclusions[1].name.as_deref(), Some("sources"));
        assert_eq!(config.versions_path(), PathBuf::from("build/out/versions.yml"));
        assert_eq!(config.hash_path(), PathBuf::from("/abs/hashes.yml"));
        assert_eq!(config.status_labels().matched, "SAME");
        assert_eq!(config.url_policy, UrlPolicy::Preserve);
        assert_eq!(
            config.version_map_options().key_style,
            VersionKeyStyle::ClassifierQualified
        );
        assert!(config.version_map_options().include_transitive);
    }

    #[test]
    fn test_unsupported_algorithm_is_config_error() {
        let err = DepsnapConfig::from_toml_str(r#"algorithm = "sha256""#).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
        assert!(err.to_string().contains("md5Hex"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = DepsnapConfig::from_toml_str("algoritm = \"md5\"").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = DepsnapConfig::from_toml_str("remote_timeout_secs = 0").unwrap_err();
        assert!(err.to_string().contains("remote_timeout_secs"));
    }

    #[test]
    fn test_blank_status_label_is_rejected() {
        let err = DepsnapConfig::from_toml_str("differ_status = \"  \"").unwrap_err();
        assert!(err.to_string().contains("differ_status"));
    }
}
