mod config;
mod error;
mod handlers;
mod routes;
mod server;
mod state;

use config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "health_responder=info,tower_http=warn".into()),
        )
        .init();

    tracing::info!("health-responder starting");

    let config = Config::from_env()?;
    config.log_startup();

    server::run(&config).await
}
