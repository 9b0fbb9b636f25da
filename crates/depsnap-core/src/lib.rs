//! depsnap Core - dependency version resolution and snapshot comparison
//!
//! This crate holds the pure decision logic of depsnap:
//! - Resolved artifact, repository and metadata models
//! - Repository metadata XML parsing
//! - Snapshot version disambiguation over an injected [`MetadataSource`]
//! - Exclusion rules and streaming content digests
//! - Canonical version, hash and snapshot-listing maps
//! - Structural snapshot diffing with MATCH / DIFFER / MISSING verdicts
//!
//! Filesystem and network access live in `depsnap-store`; this crate only
//! sees what it is handed.

pub mod diff;
pub mod errors;
pub mod fingerprint;
pub mod logging_facility;
pub mod metadata;
pub mod model;
pub mod resolver;
pub mod version_map;

// Re-export commonly used types
pub use errors::{DepsnapError, ExError, ExErrorKind, Result};
pub use fingerprint::DigestAlgorithm;
pub use model::{ExclusionRule, Repositories, Repository, RepositoryMetadata, ResolvedArtifact};
pub use resolver::MetadataSource;
pub use version_map::{HashSnapshot, SnapshotListing, VersionSnapshot};
