//! Views rendered for matched routes.
//!
//! # Data Flow
//! ```text
//! RouteMatch { view, params }
//!     → render.rs (build template context from StockBook)
//!     → templates.rs (Tera templates, HTML autoescaped)
//!     → HTML string
//! ```

pub mod render;
pub mod templates;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub use render::ViewRenderer;

/// The views a route can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Home,
    Stock,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Home => f.write_str("Home"),
            View::Stock => f.write_str("Stock"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("view {view} requires route parameter `{param}`")]
    MissingParam { view: View, param: &'static str },

    #[error(transparent)]
    Route(#[from] crate::routing::RouteError),
}
