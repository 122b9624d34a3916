//! moviestore - movie records over HTTP
//!
//! Loads configuration from the environment, connects to PostgreSQL,
//! applies the schema and serves the movie API until shutdown.

use std::sync::Arc;

use moviestore::{
    config::Config,
    db::{self, Models},
    logging, Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Arc::new(Config::from_env()?);
    config.validate()?;

    logging::init_tracing(&config.server.log_level, &config.server.environment)?;

    // Log configuration (with sensitive data masked)
    config.log_config();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting moviestore");

    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;

    let models = Models::new(pool.clone(), config.database.query_timeout());

    moviestore::create_server(config, models).await?;

    pool.close().await;
    tracing::info!("moviestore shutdown complete");
    Ok(())
}
