//! PostgreSQL connection pool and schema setup

use sqlx::postgres::{PgPool, PgPoolOptions};

/// Opens a connection pool against the configured store
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!(max_connections, "Database pool created");

    Ok(pool)
}

/// Creates the `categories` and `expenses` tables if they are missing
///
/// Safe to run on every startup.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // No foreign key: expenses reference categories by name only
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS expenses (
            id UUID PRIMARY KEY,
            amount DOUBLE PRECISION NOT NULL,
            category TEXT NOT NULL,
            note TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses (category)")
        .execute(pool)
        .await?;

    tracing::info!("Database schema ready");

    Ok(())
}
