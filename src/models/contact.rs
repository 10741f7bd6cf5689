//! Contact model representing a stored contact record.

use crate::domain::ContactId;

/// A contact owned by a creator identity.
///
/// Once returned from storage a `Contact` is a plain value; it holds no
/// reference back into the repository that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Storage-assigned identifier
    pub id: ContactId,

    /// Identity of the caller that created this contact
    pub creator: String,

    /// Display name
    pub name: String,

    /// Contact email address
    pub email: String,

    /// Contact phone number
    pub phone: String,
}
