//! History strategies and the navigation stack.
//!
//! A [`HistoryStrategy`] maps in-app paths to and from the form shown in the
//! address bar. [`NavigationHistory`] is the back/forward stack itself.

use serde::{Deserialize, Serialize};

fn default_base() -> String {
    "/".to_string()
}

/// How in-app navigation is synchronised with the URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum HistoryStrategy {
    /// Real URL paths under `base`, e.g. `/stock/AAPL`.
    Web {
        #[serde(default = "default_base")]
        base: String,
    },
    /// Path carried in the fragment, e.g. `/#/stock/AAPL`.
    Hash {
        #[serde(default = "default_base")]
        base: String,
    },
    /// No URL synchronisation.
    Memory,
}

impl Default for HistoryStrategy {
    fn default() -> Self {
        HistoryStrategy::Web {
            base: default_base(),
        }
    }
}

impl HistoryStrategy {
    pub fn base(&self) -> &str {
        match self {
            HistoryStrategy::Web { base } | HistoryStrategy::Hash { base } => base,
            HistoryStrategy::Memory => "/",
        }
    }

    /// Base without its trailing slash; empty for `/`.
    fn prefix(&self) -> &str {
        self.base().trim_end_matches('/')
    }

    /// Address-bar form of an in-app path.
    pub fn location(&self, path: &str) -> String {
        match self {
            HistoryStrategy::Web { .. } => format!("{}{}", self.prefix(), path),
            HistoryStrategy::Hash { .. } => format!("{}/#{}", self.prefix(), path),
            HistoryStrategy::Memory => path.to_string(),
        }
    }

    /// In-app path for an address-bar location (path, query and fragment).
    ///
    /// Returns `None` when the location is outside the base.
    pub fn path_from(&self, location: &str) -> Option<String> {
        match self {
            HistoryStrategy::Web { .. } => {
                let rest = location.strip_prefix(self.prefix())?;
                if rest.is_empty() || rest.starts_with('?') || rest.starts_with('#') {
                    Some(format!("/{}", rest))
                } else if rest.starts_with('/') {
                    Some(rest.to_string())
                } else {
                    None
                }
            }
            HistoryStrategy::Hash { .. } => {
                let (before, fragment) = match location.split_once('#') {
                    Some((before, fragment)) => (before, Some(fragment)),
                    None => (location, None),
                };
                let before = before.split('?').next().unwrap_or_default();
                let rest = before.strip_prefix(self.prefix())?;
                if !(rest.is_empty() || rest == "/") {
                    return None;
                }
                match fragment {
                    Some(f) if f.starts_with('/') => Some(f.to_string()),
                    Some(f) => Some(format!("/{}", f)),
                    None => Some("/".to_string()),
                }
            }
            HistoryStrategy::Memory => Some(location.to_string()),
        }
    }
}

/// Back/forward stack with a cursor.
#[derive(Debug, Clone)]
pub struct NavigationHistory<T: Clone + PartialEq> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T: Clone + PartialEq> NavigationHistory<T> {
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    /// Push a new entry, discarding any forward entries.
    ///
    /// Pushing the current entry again is a no-op and returns false.
    pub fn push(&mut self, entry: T) -> bool {
        if *self.current() == entry {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor += 1;
        true
    }

    /// Replace the current entry in place.
    ///
    /// Returns false when the current entry already equals `entry`.
    pub fn replace(&mut self, entry: T) -> bool {
        if *self.current() == entry {
            return false;
        }
        self.entries[self.cursor] = entry;
        true
    }

    /// Move the cursor by `delta`. Returns false if the target is out of range.
    pub fn go(&mut self, delta: isize) -> bool {
        let Some(target) = self.cursor.checked_add_signed(delta) else {
            return false;
        };
        if delta == 0 || target >= self.entries.len() {
            return false;
        }
        self.cursor = target;
        true
    }

    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of entries, including the current one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
