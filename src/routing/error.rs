//! Routing error types.

use thiserror::Error;

/// Errors raised while building patterns and tables or generating URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("pattern `{0}` must start with '/'")]
    MissingLeadingSlash(String),

    #[error("pattern `{0}` contains an empty segment")]
    EmptySegment(String),

    #[error("pattern `{pattern}` has invalid parameter name `{name}`")]
    InvalidParamName { pattern: String, name: String },

    #[error("pattern `{pattern}` declares parameter `{name}` more than once")]
    DuplicateParam { pattern: String, name: String },

    #[error("route name `{0}` is registered more than once")]
    DuplicateName(String),

    #[error("pattern `{pattern}` overlaps with `{existing}`")]
    DuplicatePattern { pattern: String, existing: String },

    #[error("no route named `{0}`")]
    UnknownRoute(String),

    #[error("pattern `{pattern}` requires a non-empty `{param}` parameter")]
    MissingParam { pattern: String, param: String },
}

/// Errors raised by the navigator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No route matches the requested path. The route table has no catch-all.
    #[error("no route matches `{0}`")]
    NotFound(String),

    /// The location is outside the history base.
    #[error("location `{0}` is outside the history base")]
    OutsideBase(String),
}
