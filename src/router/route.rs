//! A single route table entry.

use std::sync::Arc;

use super::lazy::{LazyView, LoadError, ViewLoader};
use crate::views::View;

/// How a route produces its view.
#[derive(Debug)]
pub enum ViewSource {
    /// Bound at startup; resolves without suspending.
    Eager(Arc<View>),
    /// Loaded on first navigation, then cached.
    Deferred(LazyView),
}

#[derive(Debug)]
pub struct Route {
    path: String,
    name: String,
    source: ViewSource,
}

impl Route {
    #[must_use]
    pub fn eager(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self { path: path.into(), name: name.into(), source: ViewSource::Eager(Arc::new(view)) }
    }

    #[must_use]
    pub fn deferred(path: impl Into<String>, name: impl Into<String>, loader: Arc<dyn ViewLoader>) -> Self {
        Self { path: path.into(), name: name.into(), source: ViewSource::Deferred(LazyView::new(loader)) }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn source(&self) -> &ViewSource {
        &self.source
    }

    #[must_use]
    pub fn is_deferred(&self) -> bool {
        matches!(self.source, ViewSource::Deferred(_))
    }

    /// Whether the view is available without a load step.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        match &self.source {
            ViewSource::Eager(_) => true,
            ViewSource::Deferred(lazy) => lazy.is_loaded(),
        }
    }

    /// The view of an eager route. Deferred routes return `None`.
    #[must_use]
    pub fn eager_view(&self) -> Option<Arc<View>> {
        match &self.source {
            ViewSource::Eager(view) => Some(Arc::clone(view)),
            ViewSource::Deferred(_) => None,
        }
    }

    /// Resolve the route's view, loading it if deferred.
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` when a deferred view fails to load.
    pub async fn resolve(&self) -> Result<Arc<View>, LoadError> {
        match &self.source {
            ViewSource::Eager(view) => Ok(Arc::clone(view)),
            ViewSource::Deferred(lazy) => lazy.resolve().await,
        }
    }
}
