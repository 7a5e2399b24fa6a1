//! Navigation: resolving requests against the route table.
//!
//! DESIGN
//! ======
//! `resolve` is the stateless entry point used by the HTTP layer: one path in,
//! one `Navigation` out. `Navigator` layers browser-style history on top of it
//! for session-scoped callers and enforces latest-request-wins: every
//! navigation takes a ticket from a monotonically increasing counter, and a
//! navigation whose deferred load finishes after a newer one started reports
//! `Superseded` instead of rendering.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::lazy::LoadError;
use super::table::{HOME_PATH, RouteTable, normalize_path};
use crate::views::View;

// =============================================================================
// OUTCOME
// =============================================================================

/// Result of a single navigation attempt.
#[derive(Debug, Clone)]
pub enum Navigation {
    Rendered { name: String, path: String, view: Arc<View> },
    NotFound { path: String },
    LoadFailed { name: String, path: String, error: LoadError },
    /// A newer navigation started before this one finished loading.
    Superseded,
}

impl Navigation {
    /// Route name for rendered or failed navigations.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Rendered { name, .. } | Self::LoadFailed { name, .. } => Some(name.as_str()),
            Self::NotFound { .. } | Self::Superseded => None,
        }
    }

    #[must_use]
    pub fn view(&self) -> Option<&Arc<View>> {
        match self {
            Self::Rendered { view, .. } => Some(view),
            _ => None,
        }
    }
}

/// Resolve `path` against `table`.
pub async fn resolve(table: &RouteTable, path: &str) -> Navigation {
    let Some(route) = table.lookup(path) else {
        let normalized = normalize_path(path);
        tracing::info!(path = %normalized, "no route matched");
        return Navigation::NotFound { path: normalized.to_owned() };
    };

    match route.resolve().await {
        Ok(view) => Navigation::Rendered { name: route.name().to_owned(), path: route.path().to_owned(), view },
        Err(error) => {
            tracing::warn!(route = route.name(), error = %error, "deferred view failed to load");
            Navigation::LoadFailed { name: route.name().to_owned(), path: route.path().to_owned(), error }
        }
    }
}

// =============================================================================
// HISTORY
// =============================================================================

/// Linear back/forward history, like a browser tab.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self { entries: vec![initial.into()], cursor: 0 }
    }

    /// Append `path` after the current entry, discarding forward entries.
    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.into());
        self.cursor += 1;
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].as_str())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].as_str())
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HOME_PATH)
    }
}

// =============================================================================
// NAVIGATOR
// =============================================================================

pub struct Navigator {
    table: Arc<RouteTable>,
    history: Mutex<History>,
    latest: AtomicU64,
}

impl Navigator {
    /// New navigator positioned at the home route.
    #[must_use]
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self { table, history: Mutex::new(History::default()), latest: AtomicU64::new(0) }
    }

    /// Navigate to `path`, recording it in history.
    pub async fn push(&self, path: &str) -> Navigation {
        self.lock_history().push(path);
        self.navigate(path).await
    }

    /// Navigate to the previous history entry. `None` at the start of history.
    pub async fn back(&self) -> Option<Navigation> {
        let path = self.lock_history().back()?.to_owned();
        Some(self.navigate(&path).await)
    }

    /// Navigate to the next history entry. `None` at the end of history.
    pub async fn forward(&self) -> Option<Navigation> {
        let path = self.lock_history().forward()?.to_owned();
        Some(self.navigate(&path).await)
    }

    #[must_use]
    pub fn current_path(&self) -> String {
        self.lock_history().current().to_owned()
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    async fn navigate(&self, path: &str) -> Navigation {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = resolve(&self.table, path).await;
        if self.latest.load(Ordering::SeqCst) != ticket {
            tracing::debug!(%path, ticket, "navigation superseded");
            return Navigation::Superseded;
        }
        outcome
    }

    fn lock_history(&self) -> std::sync::MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;
