//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email regex is valid")
});

/// A type-safe wrapper for email addresses.
///
/// # Validation Rules
///
/// - Local part: alphanumerics plus `.`, `_`, `%`, `+`, `-`
/// - Exactly one `@`
/// - Domain with at least one `.` and a final label of two or more letters
///
/// # Example
///
/// ```
/// use contact_manager::domain::EmailAddress;
///
/// let email = EmailAddress::new("user.name+tag@sub.domain.com").unwrap();
/// assert_eq!(email.as_str(), "user.name+tag@sub.domain.com");
/// assert!(EmailAddress::new("plainaddress").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
