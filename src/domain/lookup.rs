//! Lookup key for finding a single contact.

use super::{EmailAddress, PhoneNumber, ValidationError};
use std::fmt;

/// Which field a lookup matches on, carrying the value to match.
///
/// Exactly one predicate is active per lookup, so there is no way to build
/// a request that is ambiguous about which column to search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactLookup {
    ByName(String),
    ByEmail(EmailAddress),
    ByPhone(PhoneNumber),
}

impl ContactLookup {
    /// Lookup by name; the name must be non-empty.
    pub fn by_name(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        super::require("name", &name)?;
        Ok(Self::ByName(name))
    }

    /// Storage column this lookup matches against.
    pub fn column(&self) -> &'static str {
        match self {
            Self::ByName(_) => "name",
            Self::ByEmail(_) => "email",
            Self::ByPhone(_) => "phone",
        }
    }

    /// The value to match.
    pub fn value(&self) -> &str {
        match self {
            Self::ByName(name) => name,
            Self::ByEmail(email) => email.as_str(),
            Self::ByPhone(phone) => phone.as_str(),
        }
    }
}

impl fmt::Display for ContactLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column(), self.value())
    }
}
