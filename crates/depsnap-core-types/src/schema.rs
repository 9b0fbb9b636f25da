//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Artifact identifiers
pub const FIELD_COORDINATE: &str = "coordinate";
pub const FIELD_REPOSITORY_ID: &str = "repository_id";
pub const FIELD_PATH: &str = "path";

// Collection sizes
pub const FIELD_ARTIFACT_COUNT: &str = "artifact_count";
pub const FIELD_PATCH_LEN: &str = "patch_len";

// Outcome fields
pub const FIELD_VERDICT: &str = "verdict";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
