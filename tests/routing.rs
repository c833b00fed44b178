//! Route table behaviour through the public API.

use std::sync::Arc;

use stock_router::routing::{route_table, Navigator, NavigationError};
use stock_router::views::View;

#[test]
fn test_root_resolves_to_home_without_params() {
    let m = route_table().resolve("/").unwrap();
    assert_eq!(m.view, View::Home);
    assert!(m.params.is_empty());
}

#[test]
fn test_stock_path_binds_ticker() {
    let m = route_table().resolve("/stock/AAPL").unwrap();
    assert_eq!(m.view, View::Stock);
    assert_eq!(m.param("ticker"), Some("AAPL"));
    assert_eq!(m.params.len(), 1);
}

#[test]
fn test_empty_ticker_has_no_route() {
    assert!(route_table().resolve("/stock/").is_none());
}

#[test]
fn test_unrelated_path_has_no_route() {
    assert!(route_table().resolve("/about").is_none());
}

#[test]
fn test_table_initialisation_is_idempotent() {
    let first = route_table();
    let second = route_table();
    assert_eq!(first, second);
    assert_eq!(first.routes().len(), 2);
}

#[test]
fn test_navigation_session() {
    let mut nav = Navigator::new(Arc::new(route_table()), "/").unwrap();
    nav.push("/stock/AAPL").unwrap();
    nav.push("/stock/GOOGL").unwrap();
    assert_eq!(
        nav.push("/about").unwrap_err(),
        NavigationError::NotFound("/about".into())
    );

    assert_eq!(nav.back().and_then(|m| m.param("ticker").map(str::to_string)), Some("AAPL".into()));
    assert_eq!(nav.location(), "/stock/AAPL");
}
