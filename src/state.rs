//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the route table, built and validated once at startup, and the
//! server configuration. Both are immutable after startup, so handlers only
//! ever read through the `Arc`s.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::router::{RouteTable, RouteTableError};
use crate::views::catalog;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(table: RouteTable, config: AppConfig) -> Self {
        Self { table: Arc::new(table), config: Arc::new(config) }
    }

    /// Build the catalog route table for `config` and wrap both.
    ///
    /// # Errors
    ///
    /// Returns a `RouteTableError` if the catalog fails validation.
    pub fn from_config(config: AppConfig) -> Result<Self, RouteTableError> {
        let table = catalog::route_table(&config.loader_kind(), &config.base)?;
        Ok(Self::new(table, config))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::config::BasePath;
    use std::path::Path;

    /// `AppState` with the default config and built-in views.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::from_config(AppConfig::default()).expect("catalog route table should be valid")
    }

    /// `AppState` mounted under `base`.
    #[must_use]
    pub fn test_app_state_with_base(base: &str) -> AppState {
        let config = AppConfig { base: BasePath::parse(base).expect("test base path"), ..AppConfig::default() };
        AppState::from_config(config).expect("catalog route table should be valid")
    }

    /// `AppState` whose tool views load from `dir`.
    #[must_use]
    pub fn test_app_state_with_views_dir(dir: &Path) -> AppState {
        let config = AppConfig { views_dir: Some(dir.to_path_buf()), ..AppConfig::default() };
        AppState::from_config(config).expect("catalog route table should be valid")
    }
}
