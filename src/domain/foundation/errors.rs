//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction or command input
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be positive, got {actual}")]
    NotPositive { field: String, actual: i64 },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Range '{field}' is empty: {min}..={max}")]
    EmptyRange { field: String, min: i64, max: i64 },
}

impl ValidationError {
    /// Creates a not-positive validation error.
    pub fn not_positive(field: impl Into<String>, actual: i64) -> Self {
        ValidationError::NotPositive {
            field: field.into(),
            actual,
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an empty range validation error.
    pub fn empty_range(field: impl Into<String>, min: i64, max: i64) -> Self {
        ValidationError::EmptyRange {
            field: field.into(),
            min,
            max,
        }
    }
}
