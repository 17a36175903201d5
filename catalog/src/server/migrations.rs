//! Startup migration runner.
//!
//! Migrations are embedded at compile time and applied over a blocking
//! connection on a dedicated thread so the async runtime is never stalled.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;
use tracing::info;

/// Migrations bundled from the crate's `migrations/` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Failures raised while applying pending migrations.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Could not open a connection for the migration run.
    #[error("failed to connect for migrations: {0}")]
    Connection(String),

    /// A migration failed to apply.
    #[error("failed to run migrations: {0}")]
    Migration(String),

    /// The blocking migration task was cancelled or panicked.
    #[error("migration task did not complete")]
    TaskJoin,
}

/// Apply all pending migrations against `database_url`.
pub async fn run_pending(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&url)
            .map_err(|err| MigrationError::Connection(err.to_string()))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Migration(err.to_string()))?;
        info!(count = applied.len(), "database migrations applied");
        Ok(())
    })
    .await
    .map_err(|_| MigrationError::TaskJoin)?
}
