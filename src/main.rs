//! taskboard server binary

use std::sync::Arc;

use taskboard::config::AppConfig;
use taskboard::server::build_router;
use taskboard::store::SqliteTaskStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let store = SqliteTaskStore::connect(&config.database_url).await?;
    let app = build_router(Arc::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
