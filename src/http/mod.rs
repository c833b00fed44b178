//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → /api/*  → api.rs (JSON from StockBook)
//!     → other   → pages.rs (history strategy → route table → view)
//!     → error.rs (map failures to responses)
//!     → Send to client
//! ```

pub mod api;
pub mod cors;
pub mod error;
pub mod pages;
pub mod request;
pub mod server;

pub use error::AppError;
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{AppServer, AppState};
