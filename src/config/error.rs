//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Base prep time must be positive")]
    InvalidBasePrepTime,

    #[error("Item count range must be non-empty and start at 1 or more")]
    InvalidItemRange,

    #[error("At least one staffing choice is required")]
    NoStaffingChoices,

    #[error("Staffing choices must be positive percentages")]
    InvalidStaffingChoice,

    #[error("Display and summary windows must be positive")]
    InvalidWindow,
}
