//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("{0} required")]
    MissingField(&'static str),

    /// The provided identifier is zero or negative.
    #[error("id must be positive, got {0}")]
    NonPositiveId(i64),

    /// The provided email address is invalid.
    #[error("invalid email format: {0}")]
    InvalidEmail(String),

    /// The provided phone number does not match the configured pattern.
    #[error("invalid phone format: {0}")]
    InvalidPhone(String),

    /// The configured phone pattern is not a valid regular expression.
    #[error("invalid phone pattern {pattern}: {reason}")]
    InvalidPhonePattern { pattern: String, reason: String },
}
