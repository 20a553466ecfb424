mod common;
mod config;
mod routes;

mod geography;
mod specimens;
mod taxonomy;

#[cfg(test)]
mod test_helpers;

use crate::config::Config;
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    tracing::info!("Starting server...");

    // Load configuration and environment variables to pass to the application
    let config: Config = Config::from_env()?;

    let db: DatabaseConnection = Database::connect(config.db_url.as_str())
        .await
        .context("Could not connect to the database")?;

    if db.ping().await.is_ok() {
        tracing::info!("Connected to the database");
    } else {
        tracing::warn!("Database did not answer the initial ping");
    }

    Migrator::up(&db, None)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("DB migrations complete");

    tracing::info!(
        "Starting server {} ({} deployment) ...",
        config.app_name,
        config.deployment.to_uppercase()
    );

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = routes::build_router(&db, &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
