//! gRPC server for the contact manager.
//!
//! This module wires the generated `ContactManager` service into a tonic
//! server with a per-call timeout and graceful shutdown.

pub mod handlers;
pub mod proto;

pub use handlers::{contact_status, ContactManagerRpc};
pub use proto::contact_manager_server::{ContactManager, ContactManagerServer};

use anyhow::Result;
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tonic::transport::Server;
use tracing::info;

/// Serve `service` on `addr` until `shutdown` resolves.
///
/// # Arguments
/// * `service` - The fully wired handler (normally authenticated)
/// * `addr` - Socket address to bind
/// * `timeout` - Deadline applied to every inbound call
/// * `shutdown` - Resolves when the server should stop accepting calls
pub async fn run_server<S, F>(service: S, addr: SocketAddr, timeout: Duration, shutdown: F) -> Result<()>
where
    S: ContactManager,
    F: Future<Output = ()>,
{
    info!(%addr, "grpc server started");

    Server::builder()
        .timeout(timeout)
        .add_service(ContactManagerServer::new(service))
        .serve_with_shutdown(addr, shutdown)
        .await?;

    info!("grpc server stopped");
    Ok(())
}
