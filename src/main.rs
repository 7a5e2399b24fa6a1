use devtools::config::AppConfig;
use devtools::routes;
use devtools::state::AppState;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; variables may come from the environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if let Some(dir) = &config.views_dir {
        tracing::info!(dir = %dir.display(), "tool views load from disk");
    }

    let addr = config.socket_addr();
    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "route table rejected");
            std::process::exit(1);
        }
    };
    tracing::info!(routes = state.table.len(), base = state.config.base.as_str(), "route table ready");

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "devtools listening");
    axum::serve(listener, app).await.expect("server failed");
}
