use super::proto::auth_client::AuthClient;
use super::proto::ValidateTokenRequest;
use super::retry::retry_transient;
use super::{IdentityValidator, ResolvedIdentity};
use crate::config::SsoConfig;
use crate::error::{IdentityError, IdentityResult};
use async_trait::async_trait;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Status};
use tracing::debug;

/// gRPC client for the SSO service.
#[derive(Clone)]
pub struct SsoClient {
    api: AuthClient<Channel>,
    timeout: Duration,
    retries_count: u32,
}

impl SsoClient {
    /// Build a client whose channel connects on first use.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Transport` if the address is not a valid URI.
    pub fn connect_lazy(config: &SsoConfig) -> IdentityResult<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let endpoint = Endpoint::from_shared(config.address.clone())
            .map_err(|e| IdentityError::Transport(e.to_string()))?
            .connect_timeout(timeout);

        Ok(Self {
            api: AuthClient::new(endpoint.connect_lazy()),
            timeout,
            retries_count: config.retries_count,
        })
    }
}

/// Map an SSO status into the identity error vocabulary.
fn identity_error(status: Status) -> IdentityError {
    match status.code() {
        Code::InvalidArgument | Code::Unauthenticated => IdentityError::InvalidToken,
        Code::NotFound => IdentityError::AppNotFound,
        Code::Internal => IdentityError::ServiceInternal,
        Code::DeadlineExceeded => IdentityError::Timeout,
        _ => IdentityError::Transport(status.message().to_string()),
    }
}

#[async_trait]
impl IdentityValidator for SsoClient {
    async fn validate_token(&self, token: &str, app_id: i32) -> IdentityResult<ResolvedIdentity> {
        debug!(app_id, "validating token with sso");

        let response = retry_transient(self.retries_count, self.timeout, || {
            let mut api = self.api.clone();
            let request = ValidateTokenRequest {
                token: token.to_string(),
                app_id,
            };
            async move { api.validate_token(request).await }
        })
        .await
        .map_err(identity_error)?
        .into_inner();

        // A successful call is a valid token; rejections arrive as statuses.
        Ok(ResolvedIdentity {
            user_id: response.user_id,
            email: response.email,
            is_valid: true,
        })
    }
}
