//! CreatorIdentity value object.

use super::errors::ValidationError;
use std::fmt;

/// The authenticated identity that owns and scopes contacts.
///
/// Only the identity interceptor constructs one of these from a validated
/// token; every repository call takes it by reference so no read or delete
/// can run unscoped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreatorIdentity(String);

impl CreatorIdentity {
    /// Wrap a resolved identity string, rejecting an empty one.
    pub fn new(identity: impl Into<String>) -> Result<Self, ValidationError> {
        let identity = identity.into();
        if identity.trim().is_empty() {
            return Err(ValidationError::MissingField("creator identity"));
        }
        Ok(Self(identity))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreatorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
