//! In-app navigation over the route table.
//!
//! Only paths that resolve are ever pushed, so every history entry carries a
//! valid [`RouteMatch`].

use std::sync::Arc;

use crate::observability::metrics;
use crate::routing::error::NavigationError;
use crate::routing::history::NavigationHistory;
use crate::routing::router::{RouteMatch, RouterConfig};

/// Navigation state: the router configuration plus a history stack.
#[derive(Debug, Clone)]
pub struct Navigator {
    config: Arc<RouterConfig>,
    history: NavigationHistory<RouteMatch>,
}

impl Navigator {
    /// Start at `initial`, which must resolve.
    pub fn new(config: Arc<RouterConfig>, initial: &str) -> Result<Self, NavigationError> {
        let first = resolve(&config, initial)?;
        metrics::record_navigation(&first.name);
        Ok(Self {
            config,
            history: NavigationHistory::new(first),
        })
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn current(&self) -> &RouteMatch {
        self.history.current()
    }

    /// Address-bar form of the current location.
    pub fn location(&self) -> String {
        self.config.history().location(&self.current().path)
    }

    pub fn history(&self) -> &NavigationHistory<RouteMatch> {
        &self.history
    }

    /// Navigate to `path`. Unmatched paths leave the history untouched.
    pub fn push(&mut self, path: &str) -> Result<&RouteMatch, NavigationError> {
        let next = resolve(&self.config, path)?;
        if self.history.push(next) {
            tracing::debug!(path = %path, route = %self.current().name, "Navigated");
            metrics::record_navigation(&self.current().name);
        }
        Ok(self.current())
    }

    /// Navigate to an address-bar location, translating it through the
    /// history strategy first.
    pub fn open(&mut self, location: &str) -> Result<&RouteMatch, NavigationError> {
        let path = self
            .config
            .history()
            .path_from(location)
            .ok_or_else(|| NavigationError::OutsideBase(location.to_string()))?;
        self.push(&path)
    }

    /// Replace the current entry with `path`.
    pub fn replace(&mut self, path: &str) -> Result<&RouteMatch, NavigationError> {
        let next = resolve(&self.config, path)?;
        if self.history.replace(next) {
            tracing::debug!(path = %path, route = %self.current().name, "Replaced");
            metrics::record_navigation(&self.current().name);
        }
        Ok(self.current())
    }

    pub fn back(&mut self) -> Option<&RouteMatch> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&RouteMatch> {
        self.go(1)
    }

    pub fn go(&mut self, delta: isize) -> Option<&RouteMatch> {
        if self.history.go(delta) {
            tracing::debug!(delta, route = %self.current().name, "History traversal");
            metrics::record_navigation(&self.current().name);
            Some(self.current())
        } else {
            None
        }
    }
}

fn resolve(config: &RouterConfig, path: &str) -> Result<RouteMatch, NavigationError> {
    config.resolve(path).ok_or_else(|| {
        tracing::warn!(path = %path, "No route matched");
        NavigationError::NotFound(path.to_string())
    })
}
