//! Configured repositories, in declaration order.

use serde::{Deserialize, Serialize};

/// A remote repository as declared by the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: String,
    pub url: String,
}

impl Repository {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// Ordered repository list plus the one consulted for remote metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repositories {
    entries: Vec<Repository>,
    remote_id: Option<String>,
}

impl Repositories {
    pub fn new(entries: Vec<Repository>) -> Self {
        Self {
            entries,
            remote_id: None,
        }
    }

    /// Designate the repository used for remote metadata lookups by id.
    pub fn with_remote(mut self, id: impl Into<String>) -> Self {
        self.remote_id = Some(id.into());
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Repository> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The designated remote repository: the configured id if it is declared,
    /// otherwise the first declared repository.
    pub fn designated_remote(&self) -> Option<&Repository> {
        match self.remote_id.as_deref() {
            Some(id) => self.entries.iter().find(|r| r.id == id),
            None => self.entries.first(),
        }
    }
}

impl<'a> IntoIterator for &'a Repositories {
    type Item = &'a Repository;
    type IntoIter = std::slice::Iter<'a, Repository>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
