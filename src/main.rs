use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod db;
mod domain;
mod metrics;
mod models;
mod store;
mod utils;

use store::{EntityStore, PgEntityStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,commerce_api=debug"))
        )
        .init();

    tracing::info!("🚀 Starting commerce API");

    let config = config::Config::from_env();

    // === 1. Connect to PostgreSQL and make sure the schema exists ===
    tracing::info!("Connecting to PostgreSQL...");
    let pool = db::connect(&config.database_url).await?;
    db::ensure_schema(&pool).await?;

    // === 2. Initialize Prometheus metrics ===
    tracing::info!("Initializing metrics");
    let metrics = Arc::new(metrics::Metrics::new()?);

    // === 3. Wire the entity store into the domain services ===
    let entity_store: Arc<dyn EntityStore> = Arc::new(PgEntityStore::new(pool));
    let state = api::AppState::new(entity_store, metrics);

    // === 4. Serve the JSON API ===
    tracing::info!("📡 Listening on http://{}", config.bind_addr);
    let data = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(api::routes)
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await?;

    Ok(())
}
