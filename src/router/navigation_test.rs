use super::*;
use crate::router::lazy::ViewLoader;
use crate::router::route::Route;
use tokio::time::{Duration, sleep};

struct DelayedLoader {
    name: &'static str,
    delay: Duration,
}

#[async_trait::async_trait]
impl ViewLoader for DelayedLoader {
    async fn load(&self) -> Result<View, LoadError> {
        sleep(self.delay).await;
        Ok(View::new(self.name, self.name, ""))
    }
}

struct BrokenLoader;

#[async_trait::async_trait]
impl ViewLoader for BrokenLoader {
    async fn load(&self) -> Result<View, LoadError> {
        Err(LoadError::Missing("BrokenView.html".into()))
    }
}

fn deferred(path: &str, name: &'static str, delay_ms: u64) -> Route {
    Route::deferred(path, name, Arc::new(DelayedLoader { name, delay: Duration::from_millis(delay_ms) }))
}

fn table() -> Arc<RouteTable> {
    Arc::new(
        RouteTable::new(vec![
            Route::eager("/", "home", View::new("home", "Home", "")),
            deferred("/jwt-decoder", "jwt-decoder", 0),
            deferred("/about", "about", 0),
            deferred("/slow", "slow", 80),
            Route::deferred("/broken", "broken", Arc::new(BrokenLoader)),
        ])
        .unwrap(),
    )
}

#[tokio::test]
async fn resolve_renders_registered_path() {
    let table = table();
    let nav = resolve(&table, "/jwt-decoder").await;
    assert_eq!(nav.name(), Some("jwt-decoder"));
    assert_eq!(nav.view().map(|v| v.name.as_str()), Some("jwt-decoder"));
}

#[tokio::test]
async fn resolve_trailing_slash_matches_same_route() {
    let table = table();
    let nav = resolve(&table, "/jwt-decoder/").await;
    match nav {
        Navigation::Rendered { name, path, .. } => {
            assert_eq!(name, "jwt-decoder");
            assert_eq!(path, "/jwt-decoder");
        }
        other => panic!("expected rendered, got {other:?}"),
    }
}

#[tokio::test]
async fn resolve_unknown_path_is_not_found() {
    let table = table();
    let nav = resolve(&table, "/does-not-exist?x=1").await;
    assert!(matches!(nav, Navigation::NotFound { ref path } if path == "/does-not-exist"));
    assert!(nav.name().is_none());
}

#[tokio::test]
async fn resolve_load_failure_is_reported() {
    let table = table();
    let nav = resolve(&table, "/broken").await;
    match nav {
        Navigation::LoadFailed { name, error, .. } => {
            assert_eq!(name, "broken");
            assert_eq!(error, LoadError::Missing("BrokenView.html".into()));
        }
        other => panic!("expected load failure, got {other:?}"),
    }
}

#[tokio::test]
async fn load_failure_does_not_poison_later_navigation() {
    let navigator = Navigator::new(table());
    assert!(matches!(navigator.push("/broken").await, Navigation::LoadFailed { .. }));
    assert_eq!(navigator.push("/about").await.name(), Some("about"));
}

#[test]
fn history_push_back_forward() {
    let mut history = History::default();
    assert_eq!(history.current(), "/");
    assert!(history.back().is_none());

    history.push("/about");
    history.push("/jwt-decoder");
    assert_eq!(history.len(), 3);
    assert_eq!(history.back(), Some("/about"));
    assert_eq!(history.back(), Some("/"));
    assert!(history.back().is_none());
    assert_eq!(history.forward(), Some("/about"));

    history.push("/base64");
    assert!(history.forward().is_none());
    assert_eq!(history.len(), 3);
    assert_eq!(history.current(), "/base64");
}

#[tokio::test]
async fn about_resolves_the_same_regardless_of_history() {
    let navigator = Navigator::new(table());

    let direct = navigator.push("/about").await;
    navigator.push("/jwt-decoder").await;
    let via_back = navigator.back().await.unwrap();
    navigator.push("/").await;
    let again = navigator.push("/about").await;

    for nav in [&direct, &via_back, &again] {
        assert_eq!(nav.name(), Some("about"));
    }
    assert!(Arc::ptr_eq(direct.view().unwrap(), via_back.view().unwrap()));
    assert!(Arc::ptr_eq(direct.view().unwrap(), again.view().unwrap()));
}

#[tokio::test]
async fn back_and_forward_at_edges_return_none() {
    let navigator = Navigator::new(table());
    assert!(navigator.back().await.is_none());
    assert!(navigator.forward().await.is_none());

    navigator.push("/about").await;
    assert_eq!(navigator.back().await.and_then(|n| n.name().map(str::to_owned)), Some("home".into()));
    assert_eq!(navigator.current_path(), "/");
    assert_eq!(navigator.forward().await.and_then(|n| n.name().map(str::to_owned)), Some("about".into()));
    assert_eq!(navigator.current_path(), "/about");
}

#[tokio::test]
async fn latest_navigation_wins() {
    let navigator = Arc::new(Navigator::new(table()));

    let slow = tokio::spawn({
        let navigator = navigator.clone();
        async move { navigator.push("/slow").await }
    });
    sleep(Duration::from_millis(10)).await;

    let fast = navigator.push("/about").await;
    assert_eq!(fast.name(), Some("about"));

    let slow = slow.await.unwrap();
    assert!(matches!(slow, Navigation::Superseded));
    assert_eq!(navigator.current_path(), "/about");
}

#[tokio::test]
async fn home_resolves_without_deferred_step() {
    let navigator = Navigator::new(table());
    assert!(navigator.table().home().is_loaded());
    let nav = navigator.push("/").await;
    assert_eq!(nav.name(), Some("home"));
}

#[tokio::test]
async fn resolve_normalizes_only_once() {
    let table = table();
    for path in ["/jwt-decoder//", "/jwt-decoder///"] {
        let nav = resolve(&table, path).await;
        assert!(matches!(nav, Navigation::NotFound { .. }), "{path} should not match, got {nav:?}");
    }
    assert!(matches!(
        resolve(&table, "/jwt-decoder//").await,
        Navigation::NotFound { ref path } if path == "/jwt-decoder/"
    ));
}
