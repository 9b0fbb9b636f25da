//! Command orchestration layer.
//!
//! Each operation loads what it needs through `depsnap-store`, decides with
//! `depsnap-core` and writes its outputs.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for every operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` and
//! `tracing::warn!()` for internal details.

pub mod compare;
pub mod engine_command;
pub mod hash;
pub mod list_snapshots;
pub mod retrieve;
pub mod versions;

fn elapsed_ms(start: std::time::Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
