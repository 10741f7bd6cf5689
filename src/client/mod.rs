//! Client for the external identity (SSO) service.
//!
//! The contact manager never issues or inspects tokens itself; it exchanges a
//! bearer token for a resolved identity through [`IdentityValidator`]. The
//! production implementation is [`SsoClient`], a tonic client with bounded
//! retries on transient status codes.

pub mod proto;
mod retry;
mod sso;

pub use retry::{is_transient, retry_transient};
pub use sso::SsoClient;

use crate::error::IdentityResult;
use async_trait::async_trait;

/// Identity returned by the SSO service for a valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// Account identifier in the SSO service
    pub user_id: String,

    /// Email-like identity string that scopes contact ownership
    pub email: String,

    /// Whether the token was accepted
    pub is_valid: bool,
}

/// Exchanges a bearer token for a resolved identity.
#[async_trait]
pub trait IdentityValidator: Send + Sync {
    /// Validate `token` on behalf of application `app_id`.
    async fn validate_token(&self, token: &str, app_id: i32) -> IdentityResult<ResolvedIdentity>;
}
