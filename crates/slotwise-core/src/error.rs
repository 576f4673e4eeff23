//! Core error types for slotwise-core.
//!
//! The engine has exactly one interesting failure class: malformed input
//! from the integration layer. An empty suggestion list is a valid business
//! outcome and is never reported through these types.

use thiserror::Error;

/// Core error type for slotwise-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors raised when the caller hands the engine inputs it
/// promised never to produce.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end ({end}) must be greater than start ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Hour outside [0, 23]
    #[error("Hour of day must be in [0, 23], got {0}")]
    HourOutOfRange(u8),

    /// Minute outside [0, 59]
    #[error("Minute of hour must be in [0, 59], got {0}")]
    MinuteOutOfRange(u8),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    /// Shorthand for an [`InvalidValue`](ValidationError::InvalidValue) error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
