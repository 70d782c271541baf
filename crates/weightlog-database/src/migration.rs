//! Schema for the `weights` table.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use weightlog_core::error::{AppError, ErrorKind};
use weightlog_core::result::AppResult;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply any migration the database has not seen yet.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    let known = MIGRATOR.iter().count();
    info!(known, "Applying weight schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to migrate the weights table: {e}"),
            e,
        )
    })?;

    info!("Weight schema is current");
    Ok(())
}
