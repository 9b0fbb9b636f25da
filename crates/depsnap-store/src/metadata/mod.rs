//! Repository metadata access.
//!
//! - [`local`]: cached `maven-metadata-<repoId>.xml` files next to artifacts
//! - [`remote`]: `maven-metadata.xml` fetched over HTTP
//!
//! [`MavenMetadataSource`] combines both behind the resolver's
//! [`MetadataSource`] capability.

#![allow(clippy::result_large_err)]

pub mod local;
pub mod remote;

pub use local::read_local;
pub use remote::{HttpMetadataFetcher, UrlPolicy};

use depsnap_core::errors::ExError;
use depsnap_core::model::{Repository, RepositoryMetadata, ResolvedArtifact};
use depsnap_core::MetadataSource;

/// Filesystem-backed local metadata plus an optional HTTP fetcher.
///
/// Without a fetcher every remote lookup reports "no record", which is how
/// offline runs and `list-snapshots` (local only) are served.
pub struct MavenMetadataSource {
    remote: Option<HttpMetadataFetcher>,
}

impl MavenMetadataSource {
    pub fn new(remote: HttpMetadataFetcher) -> Self {
        Self {
            remote: Some(remote),
        }
    }

    pub fn local_only() -> Self {
        Self { remote: None }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }
}

impl MetadataSource for MavenMetadataSource {
    fn local(
        &self,
        artifact: &ResolvedArtifact,
        repository: &Repository,
    ) -> Result<Option<RepositoryMetadata>, ExError> {
        read_local(artifact, &repository.id)
    }

    fn remote(
        &self,
        artifact: &ResolvedArtifact,
        repository: &Repository,
    ) -> Result<Option<RepositoryMetadata>, ExError> {
        match &self.remote {
            Some(fetcher) => fetcher.fetch(artifact, repository),
            None => Ok(None),
        }
    }
}
