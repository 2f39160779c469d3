//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Schema lives in the
//! workspace `migrations/` directory and is embedded at compile time.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Embedded schema migrations for both applications.
pub static MIGRATOR: Migrator = sqlx::migrate!("../migrations");

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/stagebill").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Apply all pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::info!("Running migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p stagebill-server -- --ignored

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn migrations_create_all_tables(pool: PgPool) {
        let tables: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT table_name::text FROM information_schema.tables
            WHERE table_schema = 'public'
              AND table_name IN ('venues', 'artists', 'shows', 'categories', 'questions')
            ORDER BY table_name
            "#,
        )
        .fetch_all(&pool)
        .await
        .expect("query failed");

        assert_eq!(
            tables,
            vec!["artists", "categories", "questions", "shows", "venues"]
        );
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn shows_require_existing_venue_and_artist(pool: PgPool) {
        let result = sqlx::query(
            "INSERT INTO shows (artist_id, venue_id, start_time) VALUES (1, 1, now())",
        )
        .execute(&pool)
        .await;

        let err = result.expect_err("dangling show inserted");
        assert!(matches!(
            err.as_database_error().map(|e| e.kind()),
            Some(sqlx::error::ErrorKind::ForeignKeyViolation)
        ));
    }
}
