use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::utils::{retry_with_backoff, RetryConfig, RetryResult};

// ============================================================================
// Database Bootstrap
// ============================================================================
//
// Pool construction with connection retry, plus idempotent schema creation
// so a fresh database is usable without out-of-band migration tooling.
//
// ============================================================================

/// Tables created at startup. Cascading foreign keys implement the delete
/// policy: removing a customer removes its orders and their association rows,
/// removing a product or an order removes its association rows. The pair
/// primary key on order_product is what makes concurrent duplicate attaches
/// impossible.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS customer (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        address TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS product (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id BIGSERIAL PRIMARY KEY,
        order_date DATE NOT NULL,
        customer_id BIGINT NOT NULL REFERENCES customer(id) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS order_product (
        order_id BIGINT NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
        product_id BIGINT NOT NULL REFERENCES product(id) ON DELETE CASCADE,
        PRIMARY KEY (order_id, product_id)
    )",
];

/// Connect to PostgreSQL, retrying transient failures with backoff.
pub async fn connect(database_url: &str) -> anyhow::Result<PgPool> {
    let url = database_url.to_string();

    let result = retry_with_backoff(RetryConfig::aggressive(), move |_attempt| {
        let url = url.clone();
        async move {
            PgPoolOptions::new()
                .max_connections(5)
                .connect(&url)
                .await
        }
    })
    .await;

    match result {
        RetryResult::Success(pool) => {
            tracing::info!("✅ Connected to PostgreSQL");
            Ok(pool)
        }
        RetryResult::Failed(e) => Err(e.into()),
    }
}

/// Create the four relations if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}
