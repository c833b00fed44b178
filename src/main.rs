//! Stock viewer server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser request
//!     ──────────────▶ http::server ──▶ /api/*  ──▶ stocks::StockBook ──▶ JSON
//!                          │
//!                          └────────▶ pages ──▶ routing (history → route table)
//!                                                   │
//!                                                   ▼
//!                                        views (Home | Stock | not found)
//!
//!     Cross-cutting: config, observability, lifecycle
//! ```

use std::path::PathBuf;

use clap::Parser;

use stock_router::config::{load_config, AppConfig};
use stock_router::lifecycle;
use stock_router::observability::logging;

#[derive(Parser)]
#[command(name = "stock-router")]
#[command(about = "Serves the stock viewer pages and its JSON API", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "stock-router starting"
    );

    lifecycle::start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
