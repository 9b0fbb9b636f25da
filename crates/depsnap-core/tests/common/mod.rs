//! Shared fixtures for depsnap-core integration tests.

#![allow(dead_code)]

use depsnap_core::errors::{ExError, ExErrorKind};
use depsnap_core::model::{Repository, RepositoryMetadata, ResolvedArtifact, SnapshotInfo};
use depsnap_core::MetadataSource;
use std::cell::Cell;
use std::collections::HashMap;

/// What a fake repository returns for one artifact.
#[derive(Clone)]
pub enum Canned {
    Meta(RepositoryMetadata),
    Fail(ExErrorKind),
}

/// In-memory metadata source keyed by `(repository id, artifact name)`.
#[derive(Default)]
pub struct FakeSource {
    pub local: HashMap<(String, String), Canned>,
    pub remote: HashMap<(String, String), Canned>,
    pub calls: Cell<usize>,
}

impl FakeSource {
    pub fn with_local(mut self, repo: &str, name: &str, canned: Canned) -> Self {
        self.local.insert((repo.to_string(), name.to_string()), canned);
        self
    }

    pub fn with_remote(mut self, repo: &str, name: &str, canned: Canned) -> Self {
        self.remote.insert((repo.to_string(), name.to_string()), canned);
        self
    }

    fn answer(
        table: &HashMap<(String, String), Canned>,
        artifact: &ResolvedArtifact,
        repository: &Repository,
    ) -> Result<Option<RepositoryMetadata>, ExError> {
        match table.get(&(repository.id.clone(), artifact.name.clone())) {
            Some(Canned::Meta(m)) => Ok(Some(m.clone())),
            Some(Canned::Fail(kind)) => Err(ExError::new(*kind).with_message("canned failure")),
            None => Ok(None),
        }
    }
}

impl MetadataSource for FakeSource {
    fn local(
        &self,
        artifact: &ResolvedArtifact,
        repository: &Repository,
    ) -> Result<Option<RepositoryMetadata>, ExError> {
        self.calls.set(self.calls.get() + 1);
        Self::answer(&self.local, artifact, repository)
    }

    fn remote(
        &self,
        artifact: &ResolvedArtifact,
        repository: &Repository,
    ) -> Result<Option<RepositoryMetadata>, ExError> {
        self.calls.set(self.calls.get() + 1);
        Self::answer(&self.remote, artifact, repository)
    }
}

pub fn snapshot_meta(base: &str, timestamp: &str, build_number: u32) -> Canned {
    Canned::Meta(RepositoryMetadata {
        base_version: Some(base.to_string()),
        snapshot: Some(SnapshotInfo {
            timestamp: timestamp.to_string(),
            build_number,
        }),
    })
}

pub fn release_meta(version: &str) -> Canned {
    Canned::Meta(RepositoryMetadata {
        base_version: Some(version.to_string()),
        snapshot: None,
    })
}
