use super::{bearer_token, CallerIdentity};
use crate::client::IdentityValidator;
use crate::domain::CreatorIdentity;
use crate::error::IdentityError;
use crate::server::proto::contact_manager_server::ContactManager;
use crate::server::proto::*;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{debug, error, warn};

/// Resolves the caller of each inbound request through the SSO service.
#[derive(Clone)]
pub struct IdentityInterceptor {
    validator: Arc<dyn IdentityValidator>,
    app_id: i32,
}

impl IdentityInterceptor {
    pub fn new(validator: Arc<dyn IdentityValidator>, app_id: i32) -> Self {
        Self { validator, app_id }
    }

    /// Validate the request's bearer token and attach the caller identity.
    ///
    /// Credential problems are `UNAUTHENTICATED`; identity-service faults are
    /// `UNAVAILABLE` or `INTERNAL` with the detail kept in the logs.
    pub async fn authenticate<T>(&self, mut request: Request<T>) -> Result<Request<T>, Status> {
        let token = bearer_token(request.metadata()).map_err(reject)?;

        let resolved = self
            .validator
            .validate_token(&token, self.app_id)
            .await
            .map_err(reject)?;

        if !resolved.is_valid {
            return Err(reject(IdentityError::InvalidToken));
        }

        let creator =
            CreatorIdentity::new(resolved.email).map_err(|_| reject(IdentityError::InvalidToken))?;
        debug!(creator = %creator, user_id = %resolved.user_id, "caller authenticated");

        CallerIdentity(creator).attach(&mut request);
        Ok(request)
    }
}

fn reject(err: IdentityError) -> Status {
    if err.is_credential_error() {
        warn!(error = %err, "rejecting unauthenticated call");
        return Status::unauthenticated(err.to_string());
    }

    error!(error = %err, "identity validation failed");
    match err {
        IdentityError::Timeout | IdentityError::Transport(_) => {
            Status::unavailable("identity service unavailable")
        }
        _ => Status::internal("cannot validate credentials"),
    }
}

/// Runs every call through an [`IdentityInterceptor`] before `inner`.
pub struct AuthenticatedContactManager<S> {
    inner: S,
    interceptor: IdentityInterceptor,
}

impl<S> AuthenticatedContactManager<S> {
    pub fn new(inner: S, interceptor: IdentityInterceptor) -> Self {
        Self { inner, interceptor }
    }
}

#[tonic::async_trait]
impl<S: ContactManager> ContactManager for AuthenticatedContactManager<S> {
    async fn create_contact(
        &self,
        request: Request<CreateContactRequest>,
    ) -> Result<Response<CreateContactResponse>, Status> {
        let request = self.interceptor.authenticate(request).await?;
        self.inner.create_contact(request).await
    }

    async fn get_contact_by_name(
        &self,
        request: Request<GetContactByNameRequest>,
    ) -> Result<Response<GetContactResponse>, Status> {
        let request = self.interceptor.authenticate(request).await?;
        self.inner.get_contact_by_name(request).await
    }

    async fn get_contact_by_email(
        &self,
        request: Request<GetContactByEmailRequest>,
    ) -> Result<Response<GetContactResponse>, Status> {
        let request = self.interceptor.authenticate(request).await?;
        self.inner.get_contact_by_email(request).await
    }

    async fn get_contact_by_phone(
        &self,
        request: Request<GetContactByPhoneRequest>,
    ) -> Result<Response<GetContactResponse>, Status> {
        let request = self.interceptor.authenticate(request).await?;
        self.inner.get_contact_by_phone(request).await
    }

    async fn delete_contact(
        &self,
        request: Request<DeleteContactRequest>,
    ) -> Result<Response<DeleteContactResponse>, Status> {
        let request = self.interceptor.authenticate(request).await?;
        self.inner.delete_contact(request).await
    }
}
