//! Application wiring: storage, service, handler, and identity interceptor.

use crate::auth::{AuthenticatedContactManager, IdentityInterceptor};
use crate::client::{IdentityValidator, SsoClient};
use crate::config::Config;
use crate::repositories::{ContactRepository, SqliteContactRepository};
use crate::server::{run_server, ContactManagerRpc};
use crate::services::{ContactService, ContactServiceImpl};
use anyhow::{Context, Result};
use std::future::Future;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// A fully wired contact manager ready to serve.
pub struct App {
    handler: AuthenticatedContactManager<ContactManagerRpc>,
    addr: SocketAddr,
    timeout: Duration,
}

impl App {
    /// Build the application against the configured SSO service.
    ///
    /// Must be called inside a tokio runtime; the SSO channel is created
    /// lazily and connects on the first call.
    pub fn build(config: &Config) -> Result<Self> {
        let validator = SsoClient::connect_lazy(&config.sso)
            .with_context(|| format!("invalid sso address {}", config.sso.address))?;

        Self::with_validator(config, Arc::new(validator))
    }

    /// Build the application with a caller-supplied identity validator.
    pub fn with_validator(config: &Config, validator: Arc<dyn IdentityValidator>) -> Result<Self> {
        if let Some(parent) = config.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("cannot create storage directory {}", parent.display())
                })?;
            }
        }

        let repository = SqliteContactRepository::open(&config.storage_path).with_context(|| {
            format!("cannot open storage {}", config.storage_path.display())
        })?;
        info!(path = %config.storage_path.display(), "storage opened");

        let repository = Arc::new(repository) as Arc<dyn ContactRepository>;
        let service = Arc::new(ContactServiceImpl::new(repository)) as Arc<dyn ContactService>;
        let rpc = ContactManagerRpc::new(service, config.phone_pattern.clone());
        let interceptor = IdentityInterceptor::new(validator, config.sso.app_id);

        Ok(Self {
            handler: AuthenticatedContactManager::new(rpc, interceptor),
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.grpc_port)),
            timeout: Duration::from_secs(config.grpc_timeout_secs),
        })
    }

    /// Address the server will bind.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        run_server(self.handler, self.addr, self.timeout, shutdown).await
    }
}
