//! Contact Manager - a gRPC service for creator-scoped contact records.
//!
//! Authenticated callers create, look up (by name, email, or phone), and
//! delete contacts they own. Identity is resolved by an external SSO service.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (ids, email, phone, lookup keys)
//! - **models**: The stored `Contact` record
//! - **repositories**: Storage port and its SQLite implementation
//! - **services**: Business rules and error-kind translation
//! - **server**: gRPC handlers and the server loop
//! - **auth**: Identity interceptor and the typed caller identity
//! - **client**: SSO client with bounded retries
//! - **config** / **observability**: Environment configuration and logging

pub mod app;
pub mod auth;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;

pub use app::App;
pub use auth::{AuthenticatedContactManager, CallerIdentity, IdentityInterceptor};
pub use client::{IdentityValidator, ResolvedIdentity, SsoClient};
pub use config::{Config, Environment, SsoConfig};
pub use error::{ConfigError, ContactError, IdentityError, StorageError};
pub use models::Contact;
pub use repositories::{ContactRepository, SqliteContactRepository};
pub use server::{ContactManager, ContactManagerRpc, ContactManagerServer};
pub use services::{ContactService, ContactServiceImpl};
