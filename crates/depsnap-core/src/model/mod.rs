//! Domain models supplied by the external resolver or parsed from repository metadata.

pub mod artifact;
pub mod exclusion;
pub mod metadata;
pub mod repository;

pub use artifact::ResolvedArtifact;
pub use exclusion::ExclusionRule;
pub use metadata::{RepositoryMetadata, SnapshotInfo};
pub use repository::{Repositories, Repository};
