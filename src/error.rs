//! Crate-level error type.

use std::net::AddrParseError;

use thiserror::Error;

use crate::config::ConfigError;
use crate::routing::RouteError;
use crate::views::ViewError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("invalid address `{address}`: {source}")]
    Address {
        address: String,
        source: AddrParseError,
    },

    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
