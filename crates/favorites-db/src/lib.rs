//! # Favorites DB
//!
//! PostgreSQL connection pool and embedded migrations for the Favorites API.
//!
//! The `books` table is owned by the catalogue service; the migration here
//! only creates it when missing so a fresh database can serve favorites.
//!
//! # Example
//!
//! ```ignore
//! use favorites_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&database_url, 10).await?;
//! run_migrations(&pool).await?;
//! ```

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

pub use sqlx::PgPool;

/// Migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Creates a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and should be built once at startup
/// and shared through the application state.
///
/// # Errors
///
/// Returns the underlying [`sqlx::Error`] if the database cannot be reached.
#[tracing::instrument(skip(database_url))]
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!("Database pool initialized");
    Ok(pool)
}

/// Applies every pending migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
