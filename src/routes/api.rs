//! Route table introspection endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::config::BasePath;
use crate::router::Route;
use crate::state::AppState;
use crate::views::catalog::{self, Category};
use crate::views::pages::SITE_TITLE;

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub name: String,
    /// Path in the route table.
    pub path: String,
    /// Public URL including the base path.
    pub href: String,
    pub title: String,
    pub category: Option<Category>,
    pub deferred: bool,
    pub loaded: bool,
}

fn to_response(route: &Route, base: &BasePath) -> RouteResponse {
    let tool = catalog::find(route.name());
    RouteResponse {
        name: route.name().to_owned(),
        path: route.path().to_owned(),
        href: base.href(route.path()),
        title: tool.map_or(SITE_TITLE, |t| t.title).to_owned(),
        category: tool.map(|t| t.category),
        deferred: route.is_deferred(),
        loaded: route.is_loaded(),
    }
}

/// `GET /api/routes` — every route in registration order.
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteResponse>> {
    let base = &state.config.base;
    Json(state.table.iter().map(|route| to_response(route, base)).collect())
}

/// `GET /api/routes/:name` — named route lookup.
pub async fn get_route(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RouteResponse>, StatusCode> {
    let route = state.table.by_name(&name).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(to_response(route, &state.config.base)))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
