//! Error types for event validation

use thiserror::Error;

/// Validation errors
///
/// The distinct kinds exist for diagnostics; the HTTP layer collapses all of
/// them to the same client-visible response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Request body declared as non-JSON
    #[error("request is not of JSON type")]
    UnsupportedMediaType,

    /// Access key mismatch
    #[error("access key does not match")]
    Unauthorized,

    /// Missing required field or unrecognized field present
    #[error("invalid event shape: {message}")]
    InvalidShape { message: String },

    /// `$`-prefixed event name outside the reserved allow-list
    #[error("event name {name} shouldn't start with $")]
    ReservedNameViolation { name: String },

    /// `$unset` event with empty or absent properties
    #[error("unset event's properties cannot be empty")]
    EmptyUnsetProperties,

    /// Malformed or out-of-policy eventTime
    #[error("event time must conform to ISO 8601 format: {value}")]
    InvalidTimestamp { value: String },
}

impl ValidationError {
    /// Create a shape error for a missing required field
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: format!("cannot find the required field: {}", field.into()),
        }
    }

    /// Create a shape error for a field outside the allowed set
    pub fn unexpected_field(field: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: format!("invalid field in the event object: {}", field.into()),
        }
    }

    /// Create a shape error for a field with the wrong value type
    pub fn invalid_field(field: impl Into<String>, expected: &str) -> Self {
        Self::InvalidShape {
            message: format!("field {} must be {expected}", field.into()),
        }
    }

    /// Create a reserved-name violation error
    pub fn reserved_name(name: impl Into<String>) -> Self {
        Self::ReservedNameViolation { name: name.into() }
    }

    /// Create a timestamp error
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
        }
    }
}

/// Result type alias for validation
pub type Result<T> = std::result::Result<T, ValidationError>;
