//! depsnap Store - filesystem and network adapters
//!
//! Provides:
//! - Local cached metadata reads and HTTP remote metadata fetches, combined
//!   into a [`MavenMetadataSource`](metadata::MavenMetadataSource)
//! - Parallel artifact fingerprinting
//! - Atomic YAML/JSON/text snapshot writes and snapshot document reads
//! - Resolution input loading
//! - Retrieval of a previously published versions file

pub mod errors;
pub mod fingerprint;
pub mod input;
pub mod metadata;
pub mod retrieve;
pub mod snapshot;

// Re-export key types
pub use errors::Result;
pub use input::ResolutionInput;
pub use metadata::{MavenMetadataSource, UrlPolicy};
