use super::*;
use crate::state::test_helpers;

#[test]
fn app_builds_for_root_and_nested_base() {
    let _ = app(test_helpers::test_app_state());
    let _ = app(test_helpers::test_app_state_with_base("/tools/"));
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}
