//! Stock viewer route table and application server.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod stocks;
pub mod views;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use http::AppServer;
pub use lifecycle::Shutdown;
pub use routing::{route_table, RouteMatch, RouterConfig};
