use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::config::Config;
use crate::routes;
use crate::state::AppState;

/// Bind the configured address and serve probes until the process is killed.
pub async fn run(config: &Config) -> Result<()> {
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr).await.with_context(|| {
        if addr.port() < 1024 {
            format!("Failed to bind {addr} (ports below 1024 need root or CAP_NET_BIND_SERVICE)")
        } else {
            format!("Failed to bind {addr}")
        }
    })?;

    tracing::info!("Serving on port {}...", addr.port());

    serve(listener).await
}

/// Serve probes on an already bound listener.
///
/// Each connection gets its own task. Accept errors are retried by
/// `axum::serve`, so this only returns if the listener itself goes away.
pub async fn serve(listener: TcpListener) -> Result<()> {
    let app = routes::router(AppState::default());

    axum::serve(listener, app)
        .await
        .context("health responder server error")
}
