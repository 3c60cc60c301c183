//! Error type shared by the shape and client layers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for SageMaker operations.
pub type SageMakerResult<T> = std::result::Result<T, SageMakerError>;

/// Represents an error raised locally by a shape or returned by the service.
///
/// Shapes perform almost no validation of their own: apart from duplicate map
/// keys, constraint violations (lengths, patterns, ranges, unknown enum
/// values) are accepted as-is and only rejected by the service at call time.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SageMakerError {
    /// A map-valued field was given a key it already contains.
    #[error("Duplicated keys ({key}) are provided")]
    DuplicateKey {
        /// The offending key.
        key: String,
    },

    /// A string could not be parsed into a closed enum type.
    ///
    /// Records still accept and store such strings verbatim; this error only
    /// arises when converting into the typed enum.
    #[error("Cannot create enum from {value} value for {kind}")]
    UnknownEnumValue {
        /// The enum type name.
        kind: String,
        /// The unrecognized wire value.
        value: String,
    },

    /// The named resource does not exist.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// An account limit was exceeded (too many training jobs, etc.).
    #[error("Resource limit exceeded: {0}")]
    ResourceLimitExceeded(String),

    /// The resource is busy and cannot be modified or deleted.
    #[error("Resource in use: {0}")]
    ResourceInUse(String),

    /// An error response returned by the service.
    #[error("Service error: {0}")]
    Service(String),

    /// An internal client-side error while attempting the call.
    #[error("Client error: {0}")]
    Client(String),
}

impl SageMakerError {
    /// Builds an `UnknownEnumValue` error, logging the rejected value.
    #[must_use]
    pub fn unknown_enum_value(kind: &'static str, value: &str) -> Self {
        tracing::debug!(kind, value, "unrecognized enum value");
        Self::UnknownEnumValue { kind: kind.to_string(), value: value.to_string() }
    }

    /// Builds a `DuplicateKey` error for a map-valued field.
    #[must_use]
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = SageMakerError::duplicate_key("MY_VAR");
        assert_eq!(err.to_string(), "Duplicated keys (MY_VAR) are provided");
    }

    #[test]
    fn test_unknown_enum_value_display() {
        let err = SageMakerError::unknown_enum_value("CandidateStatus", "Archived");
        assert_eq!(
            err.to_string(),
            "Cannot create enum from Archived value for CandidateStatus"
        );
    }

    #[test]
    fn test_error_round_trips_through_json() {
        let err = SageMakerError::ResourceNotFound("no such training job".to_string());
        let json = serde_json::to_string(&err).unwrap();
        let back: SageMakerError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
