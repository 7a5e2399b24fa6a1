//! Page navigation handler.
//!
//! Every GET that no other route claims lands here and is treated as a
//! navigation request for the path. The response is always a full HTML
//! document: the resolved view, the not-found page, or the load-error page.

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::config::BasePath;
use crate::router::{Navigation, resolve};
use crate::state::AppState;
use crate::views::{View, pages};

/// Fallback handler: resolve the request path and render the page.
pub async fn page(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let base = &state.config.base;
    let Some(path) = base.strip(uri.path()) else {
        tracing::info!(path = uri.path(), base = base.as_str(), "request outside base path");
        return render(StatusCode::NOT_FOUND, &pages::not_found(uri.path(), base), base);
    };

    match resolve(&state.table, path).await {
        Navigation::Rendered { view, .. } => render(StatusCode::OK, &view, base),
        Navigation::NotFound { path } => render(StatusCode::NOT_FOUND, &pages::not_found(&path, base), base),
        Navigation::LoadFailed { name, error, .. } => {
            render(StatusCode::INTERNAL_SERVER_ERROR, &pages::load_error(&name, &error, base), base)
        }
        // Stateless resolution has no competing navigations.
        Navigation::Superseded => StatusCode::CONFLICT.into_response(),
    }
}

fn render(status: StatusCode, view: &View, base: &BasePath) -> Response {
    (status, Html(pages::document(view, base))).into_response()
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
