//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::http::AppServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Bring up every subsystem and serve until a shutdown signal arrives.
pub async fn start(config: AppConfig) -> Result<()> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|source| Error::Address {
                address: config.observability.metrics_address.clone(),
                source,
            })?;
        metrics::init_metrics(addr)?;
    }

    let server = AppServer::new(config)?;

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}
