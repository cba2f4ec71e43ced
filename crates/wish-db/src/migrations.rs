//! Schema migrations
//!
//! SQL files live in the workspace `migrations/` directory and are loaded at
//! runtime, so the binary must be started from a directory that contains them
//! (or be given an explicit path).

use std::path::Path;

use sqlx::{migrate::Migrator, PgPool};
use tracing::info;

/// Migrations directory relative to the working directory
pub const DEFAULT_MIGRATIONS_DIR: &str = "migrations";

/// Apply all pending migrations found in `dir`
pub async fn run(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), sqlx::migrate::MigrateError> {
    let migrator = Migrator::new(dir.as_ref()).await?;
    migrator.run(pool).await?;
    info!(count = migrator.iter().count(), "Database migrations applied");
    Ok(())
}
