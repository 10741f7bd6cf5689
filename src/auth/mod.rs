//! Caller authentication.
//!
//! [`IdentityInterceptor`] resolves the bearer token on an inbound call into a
//! [`CallerIdentity`] stored in the request extensions. Handlers read it back
//! through [`CallerIdentity::from_request`]; there is no untyped lookup.

mod interceptor;

pub use interceptor::{AuthenticatedContactManager, IdentityInterceptor};

use crate::domain::CreatorIdentity;
use crate::error::{IdentityError, IdentityResult};
use tonic::metadata::MetadataMap;
use tonic::{Request, Status};
use tracing::error;

/// Metadata key carrying the bearer credential.
pub const AUTHORIZATION_KEY: &str = "authorization";

const BEARER_PREFIX: &str = "Bearer ";

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity(pub CreatorIdentity);

impl CallerIdentity {
    /// Store this identity on `request`.
    pub fn attach<T>(self, request: &mut Request<T>) {
        request.extensions_mut().insert(self);
    }

    /// Read the caller identity placed by the interceptor.
    ///
    /// A missing identity means the handler was reached without going
    /// through authentication, which is a server fault: `INTERNAL`, never
    /// `INVALID_ARGUMENT`.
    pub fn from_request<T>(request: &Request<T>) -> Result<CreatorIdentity, Status> {
        match request.extensions().get::<CallerIdentity>() {
            Some(caller) => Ok(caller.0.clone()),
            None => {
                error!("request reached handler without caller identity");
                Err(Status::internal("cannot resolve caller identity"))
            }
        }
    }
}

/// Extract the bearer token from call metadata.
///
/// Accepts `Bearer <token>` or a bare token, matching the SSO clients that
/// send either form.
pub fn bearer_token(metadata: &MetadataMap) -> IdentityResult<String> {
    let value = metadata
        .get(AUTHORIZATION_KEY)
        .ok_or(IdentityError::MissingAuthorization)?
        .to_str()
        .map_err(|_| IdentityError::InvalidTokenFormat)?;

    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim();
    if token.is_empty() {
        return Err(IdentityError::InvalidTokenFormat);
    }
    Ok(token.to_string())
}
