//! Deferred view resolution.
//!
//! DESIGN
//! ======
//! Each deferred route owns a `LazyView`: a loader plus a `OnceCell` cache.
//! The first successful load is kept for the life of the process. Concurrent
//! first navigations share the same in-flight load. A failed load leaves the
//! cell empty, so the failure only affects the navigation that triggered it
//! and the next navigation tries again.

use std::fmt;
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::views::View;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("view source not found: {0}")]
    Missing(String),
    #[error("failed to read view source {path}: {message}")]
    Io { path: String, message: String },
    #[error("view source is not valid UTF-8: {0}")]
    Encoding(String),
    #[error("view loader failed: {0}")]
    Other(String),
}

// =============================================================================
// LOADER TRAIT
// =============================================================================

/// Produces a view on demand. Implementations may suspend (file reads,
/// template rendering) but must not block the runtime.
#[async_trait::async_trait]
pub trait ViewLoader: Send + Sync {
    async fn load(&self) -> Result<View, LoadError>;
}

// =============================================================================
// LAZY VIEW
// =============================================================================

/// A view that is loaded on first use and cached afterwards.
pub struct LazyView {
    loader: Arc<dyn ViewLoader>,
    cell: OnceCell<Arc<View>>,
}

impl LazyView {
    #[must_use]
    pub fn new(loader: Arc<dyn ViewLoader>) -> Self {
        Self { loader, cell: OnceCell::new() }
    }

    /// Return the cached view, loading it first if needed.
    ///
    /// # Errors
    ///
    /// Returns the loader's error when the view is not cached and the load
    /// fails. The error is not cached.
    pub async fn resolve(&self) -> Result<Arc<View>, LoadError> {
        let view = self
            .cell
            .get_or_try_init(|| async {
                let view = self.loader.load().await?;
                tracing::debug!(view = %view.name, "deferred view loaded");
                Ok::<_, LoadError>(Arc::new(view))
            })
            .await?;
        Ok(Arc::clone(view))
    }

    /// Whether a successful load has been cached.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView").field("loaded", &self.is_loaded()).finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "lazy_test.rs"]
mod tests;
