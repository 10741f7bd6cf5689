//! SQLite-backed contact repository.
//!
//! A single `rusqlite` connection is shared behind a mutex and every statement
//! runs on tokio's blocking pool. If the awaiting request is dropped, a
//! statement that has not started yet is skipped and one that is running is
//! interrupted through the connection's interrupt handle.

use crate::domain::{ContactId, ContactLookup, CreatorIdentity, NewContact};
use crate::error::{StorageError, StorageResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, ErrorCode, InterruptHandle, OptionalExtension, Row};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS contacts (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    creator_email TEXT NOT NULL,
    name          TEXT NOT NULL,
    email         TEXT NOT NULL,
    phone         TEXT NOT NULL
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_contacts_creator_name  ON contacts(creator_email, name);
CREATE UNIQUE INDEX IF NOT EXISTS idx_contacts_creator_email ON contacts(creator_email, email);
CREATE UNIQUE INDEX IF NOT EXISTS idx_contacts_creator_phone ON contacts(creator_email, phone);
";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Contact repository on top of a single SQLite connection.
#[derive(Clone)]
pub struct SqliteContactRepository {
    conn: Arc<Mutex<Connection>>,
    interrupt: Arc<InterruptHandle>,
}

impl SqliteContactRepository {
    /// Open (or create) the database file at `path` and ensure the schema.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// In-memory database, mostly for tests.
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StorageResult<Self> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(SCHEMA)?;

        let interrupt = Arc::new(conn.get_interrupt_handle());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            interrupt,
        })
    }

    /// Run `op` on the blocking pool, aborting it if this future is dropped.
    async fn run<T, F>(&self, op: F) -> StorageResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> StorageResult<T> + Send + 'static,
    {
        let conn = self.conn.clone();
        let phase = Arc::new(Mutex::new(Phase::Pending));
        let mut guard = CancelOnDrop {
            phase: phase.clone(),
            interrupt: self.interrupt.clone(),
            armed: true,
        };

        let result = tokio::task::spawn_blocking(move || {
            let conn = conn.lock();
            {
                let mut phase = phase.lock();
                if *phase == Phase::Cancelled {
                    return Err(StorageError::Cancelled);
                }
                *phase = Phase::Running;
            }

            let result = op(&conn);
            *phase.lock() = Phase::Done;
            result
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?;

        guard.armed = false;
        result
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Running,
    Done,
    Cancelled,
}

/// Drop guard held by the awaiting side of [`SqliteContactRepository::run`].
struct CancelOnDrop {
    phase: Arc<Mutex<Phase>>,
    interrupt: Arc<InterruptHandle>,
    armed: bool,
}

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        // The phase lock is held across interrupt() so the blocking side
        // cannot finish and hand the connection to another statement first.
        let mut phase = self.phase.lock();
        match *phase {
            Phase::Pending => *phase = Phase::Cancelled,
            Phase::Running => {
                debug!("request dropped mid-statement, interrupting");
                self.interrupt.interrupt();
            }
            Phase::Done | Phase::Cancelled => {}
        }
    }
}

fn map_error(err: rusqlite::Error) -> StorageError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            StorageError::AlreadyExists
        }
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::OperationInterrupted => {
            StorageError::Cancelled
        }
        _ => StorageError::Database(err),
    }
}

fn contact_from_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    let id = ContactId::new(row.get(0)?)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Integer, Box::new(e)))?;

    Ok(Contact {
        id,
        creator: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
    })
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn save(
        &self,
        creator: &CreatorIdentity,
        contact: &NewContact,
    ) -> StorageResult<ContactId> {
        let creator = creator.as_str().to_string();
        let contact = contact.clone();

        let id = self
            .run(move |conn| {
                let mut stmt = conn.prepare_cached(
                    "INSERT INTO contacts (creator_email, name, email, phone) VALUES (?1, ?2, ?3, ?4)",
                )?;
                stmt.execute(params![
                    creator,
                    contact.name,
                    contact.email.as_str(),
                    contact.phone.as_str()
                ])
                .map_err(map_error)?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        debug!(id, "contact row inserted");
        ContactId::new(id).map_err(|e| StorageError::Task(e.to_string()))
    }

    async fn find(
        &self,
        creator: &CreatorIdentity,
        lookup: &ContactLookup,
    ) -> StorageResult<Contact> {
        // column() only yields fixed column names, never caller input
        let sql = format!(
            "SELECT id, creator_email, name, email, phone FROM contacts \
             WHERE creator_email = ?1 AND {} = ?2 ORDER BY id LIMIT 1",
            lookup.column()
        );
        let creator = creator.as_str().to_string();
        let value = lookup.value().to_string();

        self.run(move |conn| {
            let mut stmt = conn.prepare_cached(&sql)?;
            stmt.query_row(params![creator, value], contact_from_row)
                .optional()
                .map_err(map_error)?
                .ok_or(StorageError::NotFound)
        })
        .await
    }

    async fn delete(&self, creator: &CreatorIdentity, id: ContactId) -> StorageResult<()> {
        let creator = creator.as_str().to_string();

        let removed = self
            .run(move |conn| {
                let mut stmt =
                    conn.prepare_cached("DELETE FROM contacts WHERE creator_email = ?1 AND id = ?2")?;
                stmt.execute(params![creator, id.get()]).map_err(map_error)
            })
            .await?;

        if removed == 0 {
            return Err(StorageError::NotFound);
        }
        debug!(id = id.get(), "contact row deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, PhoneNumber, PhonePattern};

    fn creator(identity: &str) -> CreatorIdentity {
        CreatorIdentity::new(identity).unwrap()
    }

    fn new_contact(name: &str, email: &str, phone: &str) -> NewContact {
        NewContact {
            name: name.to_string(),
            email: EmailAddress::new(email).unwrap(),
            phone: PhoneNumber::parse(phone, &PhonePattern::default()).unwrap(),
        }
    }

    fn alice() -> NewContact {
        new_contact("Alice Smith", "alice@example.com", "+71234567890")
    }

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let repo = SqliteContactRepository::open_in_memory().unwrap();
        let bob = creator("bob@corp.com");

        let first = repo.save(&bob, &alice()).await.unwrap();
        let second = repo
            .save(&bob, &new_contact("Carol", "carol@example.com", "+70000000001"))
            .await
            .unwrap();

        assert_eq!(first.get(), 1);
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_save_duplicate_is_already_exists() {
        let repo = SqliteContactRepository::open_in_memory().unwrap();
        let bob = creator("bob@corp.com");
        repo.save(&bob, &alice()).await.unwrap();

        // same email, different name and phone
        let dup = new_contact("Alicia", "alice@example.com", "+70000000002");
        let result = repo.save(&bob, &dup).await;
        assert!(matches!(result, Err(StorageError::AlreadyExists)));
    }

    #[tokio::test]
    async fn test_same_fields_allowed_for_different_creators() {
        let repo = SqliteContactRepository::open_in_memory().unwrap();
        repo.save(&creator("bob@corp.com"), &alice()).await.unwrap();
        let result = repo.save(&creator("eve@corp.com"), &alice()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_find_by_each_field() {
        let repo = SqliteContactRepository::open_in_memory().unwrap();
        let bob = creator("bob@corp.com");
        let contact = alice();
        let id = repo.save(&bob, &contact).await.unwrap();

        for lookup in [
            ContactLookup::ByName(contact.name.clone()),
            ContactLookup::ByEmail(contact.email.clone()),
            ContactLookup::ByPhone(contact.phone.clone()),
        ] {
            let found = repo.find(&bob, &lookup).await.unwrap();
            assert_eq!(found.id, id);
            assert_eq!(found.creator, "bob@corp.com");
            assert_eq!(found.name, "Alice Smith");
            assert_eq!(found.email, "alice@example.com");
            assert_eq!(found.phone, "+71234567890");
        }
    }

    #[tokio::test]
    async fn test_find_is_scoped_by_creator() {
        let repo = SqliteContactRepository::open_in_memory().unwrap();
        repo.save(&creator("bob@corp.com"), &alice()).await.unwrap();

        let lookup = ContactLookup::by_name("Alice Smith").unwrap();
        let result = repo.find(&creator("eve@corp.com"), &lookup).await;
        assert!(matches!(result, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let repo = SqliteContactRepository::open_in_memory().unwrap();
        let bob = creator("bob@corp.com");
        let id = repo.save(&bob, &alice()).await.unwrap();

        // wrong owner leaves the row in place
        let result = repo.delete(&creator("eve@corp.com"), id).await;
        assert!(matches!(result, Err(StorageError::NotFound)));

        repo.delete(&bob, id).await.unwrap();
        let again = repo.delete(&bob, id).await;
        assert!(matches!(again, Err(StorageError::NotFound)));

        let lookup = ContactLookup::by_name("Alice Smith").unwrap();
        assert!(matches!(
            repo.find(&bob, &lookup).await,
            Err(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_reopen_file_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.db");
        let bob = creator("bob@corp.com");

        {
            let repo = SqliteContactRepository::open(&path).unwrap();
            repo.save(&bob, &alice()).await.unwrap();
        }

        let repo = SqliteContactRepository::open(&path).unwrap();
        let lookup = ContactLookup::by_name("Alice Smith").unwrap();
        assert_eq!(repo.find(&bob, &lookup).await.unwrap().id.get(), 1);
    }

    #[tokio::test]
    async fn test_dropped_call_interrupts_running_statement() {
        let repo = SqliteContactRepository::open_in_memory().unwrap();
        let (outcome_tx, outcome_rx) = tokio::sync::oneshot::channel();

        let slow = repo.run(move |conn| {
            let result = conn
                .query_row(
                    "WITH RECURSIVE c(x) AS (SELECT 1 UNION ALL SELECT x + 1 FROM c WHERE x < 300000000) \
                     SELECT count(*) FROM c",
                    [],
                    |row| row.get::<_, i64>(0),
                )
                .map_err(map_error);
            let _ = outcome_tx.send(matches!(result, Err(StorageError::Cancelled)));
            result
        });
        let timed_out = tokio::time::timeout(Duration::from_millis(200), slow).await;
        assert!(timed_out.is_err());

        // the connection is released once the interrupted statement unwinds
        let saved = tokio::time::timeout(
            Duration::from_secs(5),
            repo.save(&creator("bob@corp.com"), &alice()),
        )
        .await
        .expect("save blocked behind the dropped statement");
        assert_eq!(saved.unwrap().get(), 1);

        // a closed channel means the statement was skipped before it started
        assert!(outcome_rx.await.unwrap_or(true), "statement ran to completion");
    }

    #[test]
    fn test_cancel_guard_marks_pending_statement() {
        let conn = Connection::open_in_memory().unwrap();
        let phase = Arc::new(Mutex::new(Phase::Pending));
        drop(CancelOnDrop {
            phase: phase.clone(),
            interrupt: Arc::new(conn.get_interrupt_handle()),
            armed: true,
        });
        assert_eq!(*phase.lock(), Phase::Cancelled);
    }

    #[test]
    fn test_disarmed_guard_leaves_phase_alone() {
        let conn = Connection::open_in_memory().unwrap();
        let phase = Arc::new(Mutex::new(Phase::Done));
        drop(CancelOnDrop {
            phase: phase.clone(),
            interrupt: Arc::new(conn.get_interrupt_handle()),
            armed: false,
        });
        assert_eq!(*phase.lock(), Phase::Done);
    }
}
