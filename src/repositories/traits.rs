use crate::domain::{ContactId, ContactLookup, CreatorIdentity, NewContact};
use crate::error::StorageResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Storage port for contacts.
///
/// Every operation is scoped by the creator identity; there is no way to read
/// or delete another creator's contact through this trait. Implementations
/// rely on the storage engine for isolation and add no application locks
/// beyond what the engine needs.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a contact and return its newly assigned identifier.
    ///
    /// Fails with `StorageError::AlreadyExists` when a uniqueness constraint
    /// is violated.
    async fn save(&self, creator: &CreatorIdentity, contact: &NewContact)
        -> StorageResult<ContactId>;

    /// Find the first contact matching `lookup` for this creator.
    ///
    /// Fails with `StorageError::NotFound` when nothing matches.
    async fn find(&self, creator: &CreatorIdentity, lookup: &ContactLookup)
        -> StorageResult<Contact>;

    /// Delete a contact by identifier for this creator.
    ///
    /// Fails with `StorageError::NotFound` when no row was removed.
    async fn delete(&self, creator: &CreatorIdentity, id: ContactId) -> StorageResult<()>;
}
