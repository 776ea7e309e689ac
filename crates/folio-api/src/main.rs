//! Folio API — portfolio site backend.
//!
//! Serves the static site and REST endpoints on the HTTP port, and the
//! live status WebSocket on a separate channel port.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use folio_api::config::ApiConfig;
use folio_api::routes;
use folio_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "folio-api starting");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(path = %path, "loading config file");
            ApiConfig::from_file(&path)?
        }
        None => ApiConfig::from_env(),
    };

    let state = AppState::from_config(&config)?;
    tracing::info!(
        command = %config.bridge_command,
        timeout_secs = config.bridge_timeout_secs,
        "AI service bridge configured"
    );

    let app = routes::build_app(state.clone(), &config);
    let channel = routes::build_channel_router(state);

    let http_addr = format!("{}:{}", config.host, config.port);
    let ws_addr = format!("{}:{}", config.host, config.ws_port);
    let http_listener = TcpListener::bind(&http_addr).await?;
    let ws_listener = TcpListener::bind(&ws_addr).await?;
    tracing::info!(addr = %http_addr, site_root = %config.site_root.display(), "HTTP listening");
    tracing::info!(addr = %ws_addr, "WebSocket channel listening");

    tokio::try_join!(
        async { axum::serve(http_listener, app).await },
        async { axum::serve(ws_listener, channel).await },
    )?;

    Ok(())
}
