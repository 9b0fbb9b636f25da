//! Remote repository metadata over HTTP.
//!
//! The metadata URL mirrors the artifact's location in the local repository:
//! `<repository url>/<artifact dir relative to local repo>/maven-metadata.xml`.
//! Each lookup is a single blocking request with a bounded timeout and no
//! retries.

#![allow(clippy::result_large_err)]

use crate::errors::{invalid_input, metadata_fetch, Result};
use depsnap_core::errors::{DepsnapError, ExError};
use depsnap_core::metadata::{parse_metadata_str, REMOTE_METADATA_FILE};
use depsnap_core::model::{Repository, RepositoryMetadata, ResolvedArtifact};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How repository base URLs are normalized before a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlPolicy {
    /// Rewrite `http://` to `https://`.
    #[default]
    UpgradeToHttps,
    /// Use the declared URL unchanged.
    Preserve,
}

impl UrlPolicy {
    pub fn normalize(&self, url: &str) -> String {
        match self {
            UrlPolicy::UpgradeToHttps => match url.strip_prefix("http://") {
                Some(rest) => format!("https://{}", rest),
                None => url.to_string(),
            },
            UrlPolicy::Preserve => url.to_string(),
        }
    }
}

/// Fetches `maven-metadata.xml` documents from remote repositories.
pub struct HttpMetadataFetcher {
    client: Client,
    local_repository: PathBuf,
    url_policy: UrlPolicy,
}

impl HttpMetadataFetcher {
    /// Build a fetcher for artifacts stored under `local_repository`.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the HTTP client cannot be constructed.
    pub fn new(
        local_repository: impl Into<PathBuf>,
        url_policy: UrlPolicy,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            ExError::from(DepsnapError::Internal {
                message: format!("Failed to build HTTP client: {}", e),
            })
        })?;
        Ok(Self {
            client,
            local_repository: local_repository.into(),
            url_policy,
        })
    }

    /// Metadata URL for `artifact` on `repository`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the artifact's directory is not inside the
    /// local repository root.
    pub fn metadata_url(
        &self,
        artifact: &ResolvedArtifact,
        repository: &Repository,
    ) -> Result<String> {
        let relative = artifact
            .directory()
            .and_then(|dir| dir.strip_prefix(&self.local_repository).ok())
            .map(|rel| {
                rel.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .filter(|rel| !rel.is_empty())
            .ok_or_else(|| {
                invalid_input(
                    "metadata_url",
                    format!(
                        "artifact file {} is not inside local repository {}",
                        artifact.file.display(),
                        self.local_repository.display()
                    ),
                )
                .with_coordinate(artifact.coordinate())
            })?;

        let base = self.url_policy.normalize(&repository.url);
        Ok(format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            relative,
            REMOTE_METADATA_FILE
        ))
    }

    /// Fetch and parse the remote metadata for `artifact`.
    ///
    /// HTTP 404 yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - `Timeout` when the request exceeds the configured timeout
    /// - `MetadataFetch` on transport failure or a non-success status
    /// - `InvalidMetadata` when the response body cannot be parsed
    /// - `InvalidInput` when no URL can be derived for the artifact
    pub fn fetch(
        &self,
        artifact: &ResolvedArtifact,
        repository: &Repository,
    ) -> Result<Option<RepositoryMetadata>> {
        let url = self.metadata_url(artifact, repository)?;
        tracing::debug!(url = %url, repository_id = %repository.id, "fetching remote metadata");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(url = %url, "no remote metadata");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(metadata_fetch(&url, format!("HTTP {}", status)));
        }

        let body = response.text().map_err(|e| transport_error(&url, e))?;
        let metadata = parse_metadata_str(&body, &url)
            .map_err(|e| ExError::from(e).with_op("fetch_remote_metadata"))?;
        Ok(Some(metadata))
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> ExError {
    if err.is_timeout() {
        ExError::from(DepsnapError::Timeout {
            url: url.to_string(),
        })
        .with_op("fetch_remote_metadata")
    } else {
        metadata_fetch(url, err.to_string())
    }
}
