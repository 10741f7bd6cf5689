//! Contact service layer.
//!
//! Enforces uniqueness, not-found semantics, and per-creator scoping on top
//! of a [`ContactRepository`].

use crate::domain::{ContactId, ContactLookup, CreatorIdentity, EmailAddress, NewContact, PhoneNumber};
use crate::error::{ContactError, ContactResult, StorageError};
use crate::models::Contact;
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Create a contact owned by `creator` and return its identifier.
    async fn create_contact(
        &self,
        creator: &CreatorIdentity,
        contact: NewContact,
    ) -> ContactResult<ContactId>;

    async fn get_contact_by_name(
        &self,
        creator: &CreatorIdentity,
        name: String,
    ) -> ContactResult<Contact>;

    async fn get_contact_by_email(
        &self,
        creator: &CreatorIdentity,
        email: EmailAddress,
    ) -> ContactResult<Contact>;

    async fn get_contact_by_phone(
        &self,
        creator: &CreatorIdentity,
        phone: PhoneNumber,
    ) -> ContactResult<Contact>;

    /// Delete one of `creator`'s contacts.
    ///
    /// Deleting an identifier the creator does not own (or that is already
    /// gone) is `ContactError::ContactNotFound`, not a silent success.
    async fn delete_contact(&self, creator: &CreatorIdentity, id: ContactId) -> ContactResult<()>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    async fn find(
        &self,
        op: &'static str,
        creator: &CreatorIdentity,
        lookup: ContactLookup,
    ) -> ContactResult<Contact> {
        info!(op, creator = %creator, %lookup, "searching for contact");

        self.repository
            .find(creator, &lookup)
            .await
            .map_err(|e| translate(op, e))
    }
}

/// Map a storage error into the service vocabulary, logging faults.
fn translate(op: &'static str, err: StorageError) -> ContactError {
    match err {
        StorageError::AlreadyExists => {
            warn!(op, "contact already exists");
            ContactError::ContactExists
        }
        StorageError::NotFound => {
            info!(op, "contact not found");
            ContactError::ContactNotFound
        }
        other => {
            error!(op, error = %other, "storage operation failed");
            ContactError::Storage(other)
        }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn create_contact(
        &self,
        creator: &CreatorIdentity,
        contact: NewContact,
    ) -> ContactResult<ContactId> {
        const OP: &str = "contact_service.create_contact";
        info!(op = OP, creator = %creator, "creating contact");

        let id = self
            .repository
            .save(creator, &contact)
            .await
            .map_err(|e| translate(OP, e))?;

        info!(op = OP, id = id.get(), "contact created");
        Ok(id)
    }

    async fn get_contact_by_name(
        &self,
        creator: &CreatorIdentity,
        name: String,
    ) -> ContactResult<Contact> {
        self.find(
            "contact_service.get_contact_by_name",
            creator,
            ContactLookup::ByName(name),
        )
        .await
    }

    async fn get_contact_by_email(
        &self,
        creator: &CreatorIdentity,
        email: EmailAddress,
    ) -> ContactResult<Contact> {
        self.find(
            "contact_service.get_contact_by_email",
            creator,
            ContactLookup::ByEmail(email),
        )
        .await
    }

    async fn get_contact_by_phone(
        &self,
        creator: &CreatorIdentity,
        phone: PhoneNumber,
    ) -> ContactResult<Contact> {
        self.find(
            "contact_service.get_contact_by_phone",
            creator,
            ContactLookup::ByPhone(phone),
        )
        .await
    }

    async fn delete_contact(&self, creator: &CreatorIdentity, id: ContactId) -> ContactResult<()> {
        const OP: &str = "contact_service.delete_contact";
        info!(op = OP, creator = %creator, id = id.get(), "deleting contact");

        self.repository
            .delete(creator, id)
            .await
            .map_err(|e| translate(OP, e))
    }
}
