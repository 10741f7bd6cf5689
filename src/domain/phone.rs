//! PhoneNumber value object and the configurable pattern it is checked against.

use super::errors::ValidationError;
use regex::Regex;
use std::fmt;

/// Default national format: `+7` followed by exactly ten digits.
pub const DEFAULT_PHONE_PATTERN: &str = r"^\+7\d{10}$";

/// A compiled phone number pattern.
///
/// The pattern is always applied to the whole input, so a configured
/// pattern without anchors is still strict.
#[derive(Debug, Clone)]
pub struct PhonePattern {
    source: String,
    regex: Regex,
}

impl PhonePattern {
    /// Compile a pattern.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhonePattern` if the pattern is not
    /// a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, ValidationError> {
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            ValidationError::InvalidPhonePattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as it was configured.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, phone: &str) -> bool {
        self.regex.is_match(phone)
    }
}

impl Default for PhonePattern {
    fn default() -> Self {
        Self::new(DEFAULT_PHONE_PATTERN).expect("default phone pattern is valid")
    }
}

/// A phone number that matched the configured [`PhonePattern`].
///
/// # Example
///
/// ```
/// use contact_manager::domain::{PhoneNumber, PhonePattern};
///
/// let pattern = PhonePattern::default();
/// assert!(PhoneNumber::parse("+71234567890", &pattern).is_ok());
/// assert!(PhoneNumber::parse("71234567890", &pattern).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate a phone number against `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number does not match.
    pub fn parse(phone: impl Into<String>, pattern: &PhonePattern) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !pattern.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
