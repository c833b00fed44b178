//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route declaration (at startup):
//!     route_table()
//!     → RouteEntry[] (name, PathPattern, View)
//!     → Freeze as immutable RouterConfig { history, routes }
//!
//! Navigation:
//!     address-bar location
//!     → history.rs (strip base / extract fragment)
//!     → router.rs (first matching entry)
//!     → matcher.rs (segment comparison, parameter capture)
//!     → Return: RouteMatch or no match
//! ```
//!
//! # Design Decisions
//! - Routes declared at startup, immutable at runtime
//! - No regex (segment comparison only)
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)
//! - No catch-all route; callers decide what "not found" means

pub mod error;
pub mod history;
pub mod matcher;
pub mod navigator;
pub mod router;

pub use error::{NavigationError, RouteError};
pub use history::{HistoryStrategy, NavigationHistory};
pub use matcher::{MatchOptions, PathPattern, RouteParams, Segment};
pub use navigator::Navigator;
pub use router::{route_table, route_table_with, RouteEntry, RouteMatch, RouteTable, RouterConfig};
