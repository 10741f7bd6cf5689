//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the pieces of a contact:
//! identifiers, email addresses, phone numbers, the owning creator identity,
//! and the lookup key used to find a contact. Each value object validates at
//! construction time so invalid input can never reach the service layer.

pub mod contact_id;
pub mod creator;
pub mod email;
pub mod errors;
pub mod lookup;
pub mod phone;

pub use contact_id::ContactId;
pub use creator::CreatorIdentity;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use lookup::ContactLookup;
pub use phone::{PhoneNumber, PhonePattern, DEFAULT_PHONE_PATTERN};

/// A validated create payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

impl NewContact {
    /// Validate raw create fields, checking presence before format.
    pub fn parse(
        name: &str,
        email: &str,
        phone: &str,
        pattern: &PhonePattern,
    ) -> Result<Self, ValidationError> {
        require("name", name)?;
        require("email", email)?;
        require("phone", phone)?;

        Ok(Self {
            name: name.to_string(),
            email: EmailAddress::new(email)?,
            phone: PhoneNumber::parse(phone, pattern)?,
        })
    }
}

/// Reject an empty required field.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}
