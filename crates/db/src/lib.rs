//! Database access layer: pool construction, embedded migrations, and
//! per-table repositories over PostgreSQL via `sqlx`.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Convenience alias used throughout the API crate.
pub type DbPool = PgPool;

/// Create a connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip query.
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Verify the canonical enrollment-status rows exist.
///
/// The enrollment workflow resolves `active`, `completed`, and `cancelled`
/// by case-insensitive name at request time. A missing row there is a
/// seeding fault, so the server checks for all three at boot and refuses
/// to start instead of surfacing per-request not-found errors.
pub async fn verify_enrollment_statuses(pool: &PgPool) -> Result<(), learnhub_core::error::CoreError> {
    for name in ["active", "completed", "cancelled"] {
        let found: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM enrollment_statuses WHERE LOWER(status_name) = $1")
                .bind(name)
                .fetch_optional(pool)
                .await
                .map_err(|e| learnhub_core::error::CoreError::Internal(e.to_string()))?;
        if found.is_none() {
            return Err(learnhub_core::error::CoreError::not_found_key(
                "EnrollmentStatus",
                name,
            ));
        }
    }
    Ok(())
}
