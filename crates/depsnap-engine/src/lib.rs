//! depsnap Engine - Orchestration layer
//!
//! Runs the depsnap operations end to end: load what they need through
//! `depsnap-store`, decide with `depsnap-core`, write the outputs, and own
//! the operation boundary logging.

pub mod commands;
pub mod config;

pub use config::DepsnapConfig;
