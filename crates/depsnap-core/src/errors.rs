use thiserror::Error;

/// Result type alias using DepsnapError
pub type Result<T> = std::result::Result<T, DepsnapError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    InvalidInput,
    InvalidConfig,
    UnsupportedAlgorithm,

    // Metadata
    /// A metadata document exists but cannot be parsed (corrupted cache or bad response)
    InvalidMetadata,
    /// A remote metadata document could not be fetched
    MetadataFetch,

    // Snapshot documents
    /// A serialized snapshot could not be parsed back into a document
    InvalidSnapshot,

    // Integration/IO
    Io,
    Serialization,
    Timeout,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::UnsupportedAlgorithm => "ERR_UNSUPPORTED_ALGORITHM",
            ExErrorKind::InvalidMetadata => "ERR_INVALID_METADATA",
            ExErrorKind::MetadataFetch => "ERR_METADATA_FETCH",
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus the originating coordinate and path so that
/// a hard failure always names what it was working on.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    coordinate: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            coordinate: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add artifact coordinate context
    pub fn with_coordinate(mut self, coordinate: impl Into<String>) -> Self {
        self.coordinate = Some(coordinate.into());
        self
    }

    /// Add file path or URL context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the artifact coordinate context, if any
    pub fn coordinate(&self) -> Option<&str> {
        self.coordinate.as_deref()
    }

    /// Get the path or URL context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(coordinate) = &self.coordinate {
            write!(f, " (artifact: {})", coordinate)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the pure core and the configuration layer.
///
/// Filesystem, transport and snapshot-document failures are classified
/// directly as [`ExError`]s by the store helpers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DepsnapError {
    // ===== Configuration Errors =====
    /// Digest algorithm is neither SHA-1 nor MD5
    #[error("Unsupported digest algorithm '{algorithm}': please specify either md5Hex or sha1Hex")]
    UnsupportedAlgorithm { algorithm: String },

    /// Configuration value is invalid
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ===== Metadata Errors =====
    /// Metadata document exists but could not be parsed
    #[error("Unable to read metadata from {location}: {reason}")]
    InvalidMetadata { location: String, reason: String },

    /// Remote metadata request exceeded its timeout
    #[error("Timed out fetching metadata from {url}")]
    Timeout { url: String },

    // ===== Generic Errors =====
    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from DepsnapError to ExError
impl From<DepsnapError> for ExError {
    fn from(err: DepsnapError) -> Self {
        let message = err.to_string();
        match err {
            DepsnapError::UnsupportedAlgorithm { .. } => {
                ExError::new(ExErrorKind::UnsupportedAlgorithm).with_message(message)
            }
            DepsnapError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }
            DepsnapError::InvalidMetadata { location, reason } => {
                ExError::new(ExErrorKind::InvalidMetadata)
                    .with_path(location)
                    .with_message(format!("Unable to read metadata: {}", reason))
            }
            DepsnapError::Timeout { url } => ExError::new(ExErrorKind::Timeout)
                .with_path(url)
                .with_message("Metadata request timed out"),
            DepsnapError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_stable() {
        let cases = [
            (ExErrorKind::UnsupportedAlgorithm, "ERR_UNSUPPORTED_ALGORITHM"),
            (ExErrorKind::InvalidMetadata, "ERR_INVALID_METADATA"),
            (ExErrorKind::MetadataFetch, "ERR_METADATA_FETCH"),
            (ExErrorKind::InvalidSnapshot, "ERR_INVALID_SNAPSHOT"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::Timeout, "ERR_TIMEOUT"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_unsupported_algorithm_names_valid_choices() {
        let err = DepsnapError::UnsupportedAlgorithm {
            algorithm: "sha256".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("md5Hex"));
        assert!(msg.contains("sha1Hex"));

        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::UnsupportedAlgorithm);
        assert!(ex.to_string().contains("sha256"));
    }

    #[test]
    fn test_invalid_metadata_carries_location() {
        let ex: ExError = DepsnapError::InvalidMetadata {
            location: "/m2/org/example/api/maven-metadata-central.xml".to_string(),
            reason: "unexpected end of file".to_string(),
        }
        .into();
        assert_eq!(ex.kind(), ExErrorKind::InvalidMetadata);
        assert_eq!(
            ex.path(),
            Some("/m2/org/example/api/maven-metadata-central.xml")
        );
        assert!(ex.to_string().contains("unexpected end of file"));
    }

    #[test]
    fn test_timeout_names_url() {
        let ex: ExError = DepsnapError::Timeout {
            url: "https://repo.example/maven-metadata.xml".to_string(),
        }
        .into();
        assert_eq!(ex.code(), "ERR_TIMEOUT");
        assert_eq!(ex.path(), Some("https://repo.example/maven-metadata.xml"));
    }
}
