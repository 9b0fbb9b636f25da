//! Operation boundary macros.
//!
//! Every engine operation emits exactly one `start` event and then either one
//! `end` or one `end_error` event, all tagged with the operation name. Callers
//! need `tracing` and `depsnap-core-types` as dependencies.

/// Emit the `start` event of an operation, with optional extra fields.
///
/// ```
/// # use depsnap_core::log_op_start;
/// log_op_start!("compare");
/// log_op_start!("versions", artifact_count = 3);
/// log_op_start!("retrieve", path = %"/work/versions.yml");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {{
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = depsnap_core_types::schema::EVENT_START,
            $($($field)*)?
        );
    }};
}

/// Emit the `end` event of an operation. `duration_ms` is mandatory.
///
/// ```
/// # use depsnap_core::log_op_end;
/// log_op_end!("create_versions", duration_ms = 4);
/// log_op_end!("compare", duration_ms = 12, verdict = "MATCH", patch_len = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = depsnap_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        );
    }};
}

/// Emit the `end_error` event of an operation, recording the error's kind and
/// stable code. The error may be anything convertible into
/// [`ExError`](crate::errors::ExError).
///
/// ```
/// # use depsnap_core::log_op_error;
/// # use depsnap_core::errors::{DepsnapError, ExError, ExErrorKind};
/// let err = DepsnapError::UnsupportedAlgorithm { algorithm: "crc32".to_string() };
/// log_op_error!("hash", err, duration_ms = 10);
///
/// let err = ExError::new(ExErrorKind::InvalidMetadata)
///     .with_coordinate("org.example:api:jar:2.0.0-SNAPSHOT");
/// log_op_error!("versions", err, duration_ms = 7, artifact_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = depsnap_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            error = %ex_err,
            $($($field)*)?
        );
    }};
}
