//! Contact manager - main entry point
//!
//! Loads configuration from the environment, wires storage, service, and the
//! SSO-backed identity interceptor, then serves gRPC until SIGINT/SIGTERM.

use anyhow::Result;
use contact_manager::observability::init_tracing;
use contact_manager::{App, Config};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_tracing(config.env);
    info!(env = %config.env, "configuration loaded");

    let app = App::build(&config)?;
    info!(
        addr = %app.addr(),
        sso = %config.sso.address,
        "starting contact manager"
    );

    app.run(shutdown_signal()).await?;

    info!("application stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
