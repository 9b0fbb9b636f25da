//! Snapshot document persistence.

pub mod atomic;
pub mod persist;

pub use atomic::atomic_write;
pub use persist::{read_document, remove_if_exists, write_json, write_snapshot, write_text};
