//! Content digests for resolved artifacts.
//!
//! Digests are computed over a `Read` stream in fixed-size chunks so that
//! arbitrarily large artifacts never need to be held in memory.

use crate::errors::{DepsnapError, Result};
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::io::Read;
use std::str::FromStr;

pub use crate::model::exclusion::should_exclude;

const CHUNK_SIZE: usize = 64 * 1024;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DigestAlgorithm {
    #[default]
    Sha1,
    Md5,
}

impl DigestAlgorithm {
    /// Canonical configuration name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "sha1Hex",
            DigestAlgorithm::Md5 => "md5Hex",
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = DepsnapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" | "sha1hex" => Ok(DigestAlgorithm::Sha1),
            "md5" | "md5hex" => Ok(DigestAlgorithm::Md5),
            _ => Err(DepsnapError::UnsupportedAlgorithm {
                algorithm: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for DigestAlgorithm {
    type Error = DepsnapError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DigestAlgorithm> for String {
    fn from(value: DigestAlgorithm) -> Self {
        value.name().to_string()
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Digest everything readable from `reader`, returning lowercase hex.
pub fn digest_reader<R: Read>(reader: R, algorithm: DigestAlgorithm) -> std::io::Result<String> {
    match algorithm {
        DigestAlgorithm::Sha1 => stream_digest::<Sha1, R>(reader),
        DigestAlgorithm::Md5 => stream_digest::<Md5, R>(reader),
    }
}

fn stream_digest<D: Digest, R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = D::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
