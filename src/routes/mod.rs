//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the HTTP surface under a single Axum router: a small
//! JSON API describing the route table, a health check, static assets under
//! the base path, and a fallback that turns every other GET into a page
//! navigation.

pub mod api;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let assets_mount = format!("{}assets", state.config.base.as_str());
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/api/routes", get(api::list_routes))
        .route("/api/routes/{name}", get(api::get_route))
        .route("/healthz", get(healthz))
        .nest_service(&assets_mount, assets)
        .fallback(pages::page)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
