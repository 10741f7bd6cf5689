use async_trait::async_trait;
use contact_manager::domain::{ContactId, ContactLookup, CreatorIdentity, NewContact};
use contact_manager::error::{StorageError, StorageResult};
use contact_manager::models::Contact;
use contact_manager::repositories::ContactRepository;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// In-memory implementation of ContactRepository with the same per-creator
/// uniqueness rules as the SQLite schema. Tracks method calls and can be
/// told to fail the next call with an infrastructure error.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<BTreeMap<i64, Contact>>>,
    next_id: Arc<Mutex<i64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_next: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Total calls across all methods.
    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    /// Make the next call fail with a storage fault.
    pub fn fail_next_call(&self) {
        *self.fail_next.lock().unwrap() = true;
    }

    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) -> StorageResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        let mut fail = self.fail_next.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(StorageError::Task("simulated disk failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn save(
        &self,
        creator: &CreatorIdentity,
        contact: &NewContact,
    ) -> StorageResult<ContactId> {
        self.track_call("save")?;

        let mut contacts = self.contacts.lock().unwrap();
        let conflict = contacts.values().any(|c| {
            c.creator == creator.as_str()
                && (c.name == contact.name
                    || c.email == contact.email.as_str()
                    || c.phone == contact.phone.as_str())
        });
        if conflict {
            return Err(StorageError::AlreadyExists);
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = ContactId::new(*next_id).unwrap();

        contacts.insert(
            id.get(),
            Contact {
                id,
                creator: creator.as_str().to_string(),
                name: contact.name.clone(),
                email: contact.email.as_str().to_string(),
                phone: contact.phone.as_str().to_string(),
            },
        );
        Ok(id)
    }

    async fn find(
        &self,
        creator: &CreatorIdentity,
        lookup: &ContactLookup,
    ) -> StorageResult<Contact> {
        self.track_call("find")?;

        let contacts = self.contacts.lock().unwrap();
        contacts
            .values()
            .filter(|c| c.creator == creator.as_str())
            .find(|c| match lookup {
                ContactLookup::ByName(name) => &c.name == name,
                ContactLookup::ByEmail(email) => c.email == email.as_str(),
                ContactLookup::ByPhone(phone) => c.phone == phone.as_str(),
            })
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn delete(&self, creator: &CreatorIdentity, id: ContactId) -> StorageResult<()> {
        self.track_call("delete")?;

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.get(&id.get()) {
            Some(c) if c.creator == creator.as_str() => {
                contacts.remove(&id.get());
                Ok(())
            }
            _ => Err(StorageError::NotFound),
        }
    }
}
