//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;

use stock_router::config::AppConfig;
use stock_router::http::AppServer;
use stock_router::lifecycle::Shutdown;

/// Start a server on an ephemeral local port.
///
/// The returned `Shutdown` stops it when triggered.
pub async fn spawn_server(config: AppConfig) -> (SocketAddr, Shutdown) {
    let server = AppServer::new(config).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    wait_until_ready(addr).await;
    (addr, shutdown)
}

async fn wait_until_ready(addr: SocketAddr) {
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server at {} never became ready", addr);
}

#[allow(dead_code)]
pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}
