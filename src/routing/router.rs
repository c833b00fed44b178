//! Route table and router configuration.
//!
//! # Responsibilities
//! - Declare the application's routes (`route_table`)
//! - Validate tables built from outside input
//! - Resolve a path to the first matching route
//! - Generate paths from route names (reverse routing)
//!
//! # Design Decisions
//! - Immutable after construction; shared via `Arc`
//! - First match wins, in declaration order
//! - Explicit `None` on no match rather than a silent default route

use serde::Serialize;

use crate::routing::error::RouteError;
use crate::routing::history::HistoryStrategy;
use crate::routing::matcher::{MatchOptions, PathPattern, RouteParams, Segment};
use crate::views::View;

/// A single route: name, pattern and the view it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    name: String,
    pattern: PathPattern,
    view: View,
}

impl RouteEntry {
    pub fn new(name: impl Into<String>, pattern: PathPattern, view: View) -> Self {
        Self {
            name: name.into(),
            pattern,
            view,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn view(&self) -> View {
        self.view
    }
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// The path that was resolved.
    pub path: String,
    /// Name of the matched route.
    pub name: String,
    /// Pattern of the matched route.
    pub pattern: String,
    pub view: View,
    pub params: RouteParams,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered, validated sequence of routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    options: MatchOptions,
}

impl RouteTable {
    /// Build a table, rejecting duplicate names and overlapping patterns.
    pub fn new(entries: Vec<RouteEntry>, options: MatchOptions) -> Result<Self, RouteError> {
        validate_entries(&entries, &options)?;
        Ok(Self { entries, options })
    }

    /// Re-validate the table under different matching options.
    pub fn with_options(self, options: MatchOptions) -> Result<Self, RouteError> {
        Self::new(self.entries, options)
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// First route matching `path`, in declaration order.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.entries.iter().find_map(|entry| {
            entry
                .pattern
                .matches(path, &self.options)
                .map(|params| RouteMatch {
                    path: path.to_string(),
                    name: entry.name.clone(),
                    pattern: entry.pattern.to_string(),
                    view: entry.view,
                    params,
                })
        })
    }

    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Concrete path for the named route.
    pub fn href(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        self.get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?
            .pattern
            .href(params)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_entries(entries: &[RouteEntry], options: &MatchOptions) -> Result<(), RouteError> {
    for (i, entry) in entries.iter().enumerate() {
        let mut seen: Vec<&str> = Vec::new();
        for name in entry.pattern.param_names() {
            if seen.contains(&name) {
                return Err(RouteError::DuplicateParam {
                    pattern: entry.pattern.to_string(),
                    name: name.to_string(),
                });
            }
            seen.push(name);
        }

        for earlier in &entries[..i] {
            if earlier.name == entry.name {
                return Err(RouteError::DuplicateName(entry.name.clone()));
            }
            if earlier.pattern.overlaps(&entry.pattern, options) {
                return Err(RouteError::DuplicatePattern {
                    pattern: entry.pattern.to_string(),
                    existing: earlier.pattern.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Routes plus the history strategy used to expose them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    history: HistoryStrategy,
    routes: RouteTable,
}

impl RouterConfig {
    pub fn new(history: HistoryStrategy, routes: RouteTable) -> Self {
        Self { history, routes }
    }

    pub fn history(&self) -> &HistoryStrategy {
        &self.history
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.routes.resolve(path)
    }

    /// Address-bar location of the named route.
    pub fn location(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        let path = self.routes.href(name, params)?;
        Ok(self.history.location(&path))
    }
}

/// The application's route table, using web history at `/`.
pub fn route_table() -> RouterConfig {
    route_table_with(HistoryStrategy::default())
}

/// The application's route table with a chosen history strategy.
pub fn route_table_with(history: HistoryStrategy) -> RouterConfig {
    let entries = vec![
        RouteEntry::new("home", PathPattern::root(), View::Home),
        RouteEntry::new(
            "stock",
            PathPattern::from_segments([Segment::literal("stock"), Segment::param("ticker")]),
            View::Stock,
        ),
    ];

    RouterConfig {
        history,
        routes: RouteTable {
            entries,
            options: MatchOptions::default(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let config = route_table();
        let routes: Vec<_> = config
            .routes()
            .iter()
            .map(|e| (e.name().to_string(), e.pattern().to_string(), e.view()))
            .collect();
        assert_eq!(
            routes,
            vec![
                ("home".to_string(), "/".to_string(), View::Home),
                ("stock".to_string(), "/stock/:ticker".to_string(), View::Stock),
            ]
        );
        assert_eq!(config.history(), &HistoryStrategy::Web { base: "/".into() });
    }

    #[test]
    fn test_static_table_passes_validation() {
        let config = route_table();
        let table = config.routes().clone();
        let rebuilt = RouteTable::new(table.entries.clone(), table.options).unwrap();
        assert_eq!(rebuilt, table);
    }

    #[test]
    fn test_resolve_home() {
        let m = route_table().resolve("/").unwrap();
        assert_eq!(m.view, View::Home);
        assert_eq!(m.name, "home");
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_resolve_stock() {
        let m = route_table().resolve("/stock/AAPL").unwrap();
        assert_eq!(m.view, View::Stock);
        assert_eq!(m.param("ticker"), Some("AAPL"));
        assert_eq!(m.pattern, "/stock/:ticker");
    }

    #[test]
    fn test_unmatched_paths() {
        let config = route_table();
        assert_eq!(config.resolve("/stock/"), None);
        assert_eq!(config.resolve("/about"), None);
        assert_eq!(config.resolve("/stock/AAPL/news"), None);
    }

    #[test]
    fn test_initializer_is_idempotent() {
        assert_eq!(route_table(), route_table());
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(
            vec![
                RouteEntry::new("featured", PathPattern::parse("/stock/featured").unwrap(), View::Home),
                RouteEntry::new("stock", PathPattern::parse("/stock/:ticker").unwrap(), View::Stock),
            ],
            MatchOptions::default(),
        )
        .unwrap();

        assert_eq!(table.resolve("/stock/featured").unwrap().name, "featured");
        assert_eq!(table.resolve("/stock/TSLA").unwrap().name, "stock");
    }

    #[test]
    fn test_rejects_duplicates() {
        let dup_name = RouteTable::new(
            vec![
                RouteEntry::new("home", PathPattern::root(), View::Home),
                RouteEntry::new("home", PathPattern::parse("/stock/:ticker").unwrap(), View::Stock),
            ],
            MatchOptions::default(),
        );
        assert_eq!(dup_name, Err(RouteError::DuplicateName("home".into())));

        let dup_pattern = RouteTable::new(
            vec![
                RouteEntry::new("a", PathPattern::parse("/stock/:ticker").unwrap(), View::Stock),
                RouteEntry::new("b", PathPattern::parse("/STOCK/:symbol").unwrap(), View::Stock),
            ],
            MatchOptions::default(),
        );
        assert!(matches!(dup_pattern, Err(RouteError::DuplicatePattern { .. })));

        let dup_param = RouteTable::new(
            vec![RouteEntry::new(
                "pair",
                PathPattern::from_segments([Segment::param("t"), Segment::param("t")]),
                View::Stock,
            )],
            MatchOptions::default(),
        );
        assert!(matches!(dup_param, Err(RouteError::DuplicateParam { .. })));
    }

    #[test]
    fn test_sensitive_options_allow_case_variants() {
        let entries = vec![
            RouteEntry::new("lower", PathPattern::parse("/stock").unwrap(), View::Home),
            RouteEntry::new("upper", PathPattern::parse("/STOCK").unwrap(), View::Home),
        ];
        let sensitive = MatchOptions {
            sensitive: true,
            strict: false,
        };
        let table = RouteTable::new(entries, sensitive).unwrap();
        assert!(table.with_options(MatchOptions::default()).is_err());
    }

    #[test]
    fn test_href_and_location() {
        let config = route_table_with(HistoryStrategy::Hash { base: "/".into() });
        let mut params = RouteParams::new();
        assert_eq!(config.routes().href("home", &params).unwrap(), "/");

        params.insert("ticker".into(), "MSFT".into());
        assert_eq!(config.location("stock", &params).unwrap(), "/#/stock/MSFT");
        assert_eq!(
            config.routes().href("about", &params),
            Err(RouteError::UnknownRoute("about".into()))
        );
    }
}
