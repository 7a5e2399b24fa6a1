use super::*;
use crate::state::test_helpers;

async fn get(state: &AppState, path: &str) -> (StatusCode, String) {
    call(state, Method::GET, path).await
}

async fn call(state: &AppState, method: Method, path: &str) -> (StatusCode, String) {
    let uri: Uri = path.parse().expect("valid test uri");
    let response = page(State(state.clone()), method, uri).await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body should read");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn home_renders_ok() {
    let state = test_helpers::test_app_state();
    let (status, body) = get(&state, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-route=\"home\""));
}

#[tokio::test]
async fn tool_path_renders_its_view() {
    let state = test_helpers::test_app_state();
    let (status, body) = get(&state, "/jwt-decoder").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-route=\"jwt-decoder\""));
    assert!(body.contains("<title>JWT Decoder | Developer Tools</title>"));
}

#[tokio::test]
async fn trailing_slash_and_query_render_same_view() {
    let state = test_helpers::test_app_state();
    let (status, body) = get(&state, "/jwt-decoder/?token=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-route=\"jwt-decoder\""));
}

#[tokio::test]
async fn unknown_path_renders_not_found_page() {
    let state = test_helpers::test_app_state();
    let (status, body) = get(&state, "/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("data-route=\"not-found\""));
    assert!(body.contains("<code>/does-not-exist</code>"));
}

#[tokio::test]
async fn base_path_is_stripped_before_lookup() {
    let state = test_helpers::test_app_state_with_base("/tools/");

    let (status, body) = get(&state, "/tools/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-route=\"about\""));

    let (status, body) = get(&state, "/tools").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/tools/jwt-decoder\""));

    let (status, _) = get(&state, "/about").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn load_failure_renders_error_page_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_helpers::test_app_state_with_views_dir(dir.path());

    let (status, body) = get(&state, "/base64").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("data-route=\"load-error\""));
    assert!(body.contains("Base64View.html"));

    // Other navigations are unaffected, and the failed route retries.
    std::fs::write(dir.path().join("Base64View.html"), "<p>base64 ready</p>").unwrap();
    let (status, body) = get(&state, "/base64").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<p>base64 ready</p>"));
}

#[tokio::test]
async fn home_never_touches_views_dir() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_helpers::test_app_state_with_views_dir(dir.path());
    let (status, _) = get(&state, "/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_get_methods_are_rejected() {
    let state = test_helpers::test_app_state();
    let (status, _) = call(&state, Method::POST, "/json-formatter").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = call(&state, Method::HEAD, "/json-formatter").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn double_trailing_slash_is_not_found() {
    let state = test_helpers::test_app_state();
    let (status, body) = get(&state, "/jwt-decoder//").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("data-route=\"not-found\""));
}
