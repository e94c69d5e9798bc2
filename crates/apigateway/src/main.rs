use anyhow::{Context, Result};
use apigateway::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let _log_guard = init_logger("apigateway", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to connect to database")?;

    if config.run_migrations {
        info!("📦 Applying bundled schema");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(&config, pool)
        .await
        .context("Failed to create AppState")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
