//! Snapshot diff engine.
//!
//! Compares two serialized snapshots at the structured-document level and
//! classifies the relationship as MATCH, DIFFER or MISSING.
//!
//! ## Entry point
//!
//! ```
//! use depsnap_core::diff::{compare_documents, DiffVerdict};
//! use serde_json::json;
//!
//! let from = json!({"org.example": {"core": "1.2.0"}});
//! let to = json!({"org.example": {"core": "1.3.0"}});
//! let outcome = compare_documents(&from, &to);
//! assert_eq!(outcome.verdict, DiffVerdict::Differ);
//! ```
//!
//! ## Guarantees
//!
//! - **Structural equality**: formatting and key order never cause DIFFER.
//! - **Minimal patch**: DIFFER carries an RFC 6902 style patch addressed by
//!   JSON pointer, computed over the document tree rather than text lines.
//! - **Shape agnostic**: works equally on version maps and hash maps.

pub mod engine;
pub mod model;

pub use engine::{compare_documents, missing};
pub use model::{DiffOutcome, DiffVerdict, PatchEntry, PatchOp, StatusLabels};
