//! Immutable route table.
//!
//! DESIGN
//! ======
//! The table is validated once at construction and never mutated. Lookups
//! are exact matches on a normalized path, backed by a `HashMap` index for
//! both paths and names.
//!
//! Normalization drops the query string and fragment, maps the empty path to
//! `/`, and strips a single trailing slash from non-root paths. Matching is
//! case-sensitive.

use std::collections::HashMap;

use super::route::Route;

pub const HOME_PATH: &str = "/";

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("invalid route path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },
    #[error("route name must not be empty (path {0})")]
    EmptyName(String),
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    #[error("duplicate route name: {0}")]
    DuplicateName(String),
    #[error("home route `/` is missing")]
    MissingHome,
    #[error("home route `/` must be eager")]
    DeferredHome,
}

// =============================================================================
// ROUTE TABLE
// =============================================================================

#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Validate `routes` and build the lookup indexes.
    ///
    /// # Errors
    ///
    /// Returns a `RouteTableError` for a malformed path, an empty name, a
    /// duplicate path or name, or a missing or deferred home route.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        let mut by_path = HashMap::with_capacity(routes.len());
        let mut by_name = HashMap::with_capacity(routes.len());

        for (idx, route) in routes.iter().enumerate() {
            validate_path(route.path())?;
            if route.name().is_empty() {
                return Err(RouteTableError::EmptyName(route.path().to_owned()));
            }
            if by_path.insert(route.path().to_owned(), idx).is_some() {
                return Err(RouteTableError::DuplicatePath(route.path().to_owned()));
            }
            if by_name.insert(route.name().to_owned(), idx).is_some() {
                return Err(RouteTableError::DuplicateName(route.name().to_owned()));
            }
        }

        let home = by_path.get(HOME_PATH).map(|&idx| &routes[idx]).ok_or(RouteTableError::MissingHome)?;
        if home.is_deferred() {
            return Err(RouteTableError::DeferredHome);
        }

        Ok(Self { routes, by_path, by_name })
    }

    /// Find the route registered for `path` after normalization.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        self.by_path.get(normalize_path(path)).map(|&idx| &self.routes[idx])
    }

    /// Find a route by its name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&idx| &self.routes[idx])
    }

    /// Reverse lookup: the path registered under `name`.
    #[must_use]
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.by_name(name).map(Route::path)
    }

    /// The home route. Always present.
    #[must_use]
    pub fn home(&self) -> &Route {
        &self.routes[self.by_path[HOME_PATH]]
    }

    /// Routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// =============================================================================
// PATH HELPERS
// =============================================================================

/// Canonical form used for lookups.
#[must_use]
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = &raw[..end];
    if path.is_empty() {
        return HOME_PATH;
    }
    if path.len() > 1 {
        if let Some(stripped) = path.strip_suffix('/') {
            return stripped;
        }
    }
    path
}

fn validate_path(path: &str) -> Result<(), RouteTableError> {
    let invalid = |reason| Err(RouteTableError::InvalidPath { path: path.to_owned(), reason });

    if !path.starts_with('/') {
        return invalid("must start with `/`");
    }
    if path.len() > 1 && path.ends_with('/') {
        return invalid("must not end with `/`");
    }
    if path.contains("//") {
        return invalid("must not contain empty segments");
    }
    if !path.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~' | '/')) {
        return invalid("contains characters outside the URL-safe set");
    }
    Ok(())
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
