//! Error types for the contact manager.
//!
//! Each layer has its own `thiserror` enum. Layers translate the *kind* of a
//! lower-layer error into their own vocabulary; the gRPC handler is the only
//! place a kind becomes a caller-visible status.

use thiserror::Error;

/// Errors raised by the persistence adapter.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A configured uniqueness constraint was violated
    #[error("contact already exists")]
    AlreadyExists,

    /// No row matched the scoped predicate
    #[error("contact not found")]
    NotFound,

    /// The calling request went away before the statement completed
    #[error("storage operation cancelled")]
    Cancelled,

    /// Any other storage fault
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The blocking task running the statement failed
    #[error("storage task failed: {0}")]
    Task(String),
}

/// Errors raised by the contact service.
#[derive(Error, Debug)]
pub enum ContactError {
    /// Domain conflict on create
    #[error("contact exists")]
    ContactExists,

    /// Domain absence on lookup or delete
    #[error("contact not found")]
    ContactNotFound,

    /// Infrastructure fault, detail kept for server-side logs
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

/// Errors raised while resolving a caller's identity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// No `authorization` entry in the metadata
    #[error("missing authorization header")]
    MissingAuthorization,

    /// The header was present but not a usable bearer token
    #[error("invalid token format")]
    InvalidTokenFormat,

    /// The identity service rejected the token
    #[error("invalid authorization token")]
    InvalidToken,

    /// The identity service does not know our application id
    #[error("app not found")]
    AppNotFound,

    /// The identity service failed internally
    #[error("auth service internal error")]
    ServiceInternal,

    /// Every attempt ran past the per-attempt timeout
    #[error("auth service timed out")]
    Timeout,

    /// Connection or protocol failure talking to the identity service
    #[error("auth service transport error: {0}")]
    Transport(String),
}

impl IdentityError {
    /// Whether the failure is the caller's credential rather than our
    /// collaborator.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            Self::MissingAuthorization
                | Self::InvalidTokenFormat
                | Self::InvalidToken
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with IdentityError
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
