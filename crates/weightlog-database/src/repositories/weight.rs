//! PostgreSQL weight repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use weightlog_core::error::{AppError, ErrorKind};
use weightlog_core::result::AppResult;
use weightlog_core::traits::Repository;
use weightlog_core::types::WeightId;
use weightlog_entity::weight::{NewWeight, Weight};

use super::WeightStore;

const DATE_UNIQUE_CONSTRAINT: &str = "weights_date_key";

/// Repository for weight records stored in the `weights` table.
#[derive(Debug, Clone)]
pub struct PgWeightRepository {
    pool: PgPool,
}

impl PgWeightRepository {
    /// Create a new weight repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a write failure, turning a duplicate date into a conflict.
fn write_error(e: sqlx::Error, date: &str, action: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some(DATE_UNIQUE_CONSTRAINT) =>
        {
            AppError::with_source(
                ErrorKind::Conflict,
                format!("Weight for {date} already in the database"),
                e,
            )
        }
        _ => AppError::with_source(ErrorKind::Database, format!("Failed to {action} weight: {e}"), e),
    }
}

#[async_trait]
impl Repository<Weight, WeightId> for PgWeightRepository {
    type New = NewWeight;

    async fn save(&self, new: &NewWeight) -> AppResult<Weight> {
        sqlx::query_as::<_, Weight>(
            "INSERT INTO weights (date, max, min, difference) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&new.date)
        .bind(new.max)
        .bind(new.min)
        .bind(new.difference)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &new.date, "save"))
    }

    async fn find_all(&self) -> AppResult<Vec<Weight>> {
        sqlx::query_as::<_, Weight>("SELECT * FROM weights ORDER BY date ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to list weights: {e}"), e)
            })
    }

    async fn find_by_id(&self, id: WeightId) -> AppResult<Weight> {
        sqlx::query_as::<_, Weight>("SELECT * FROM weights WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to find weight: {e}"), e)
            })?
            .ok_or_else(|| AppError::not_found(format!("Weight {id} not found")))
    }

    async fn update(&self, id: WeightId, weight: &NewWeight) -> AppResult<Weight> {
        sqlx::query_as::<_, Weight>(
            "UPDATE weights SET date = $2, max = $3, min = $4, difference = $5, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&weight.date)
        .bind(weight.max)
        .bind(weight.min)
        .bind(weight.difference)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &weight.date, "update"))?
        .ok_or_else(|| AppError::not_found(format!("Weight {id} not found")))
    }

    async fn delete(&self, id: WeightId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM weights WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to delete weight: {e}"), e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Weight {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl WeightStore for PgWeightRepository {
    async fn find_by_date(&self, date: &str) -> AppResult<Weight> {
        sqlx::query_as::<_, Weight>("SELECT * FROM weights WHERE date = $1")
            .bind(date)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to find weight by date: {e}"),
                    e,
                )
            })?
            .ok_or_else(|| AppError::not_found(format!("No weight recorded for {date}")))
    }
}
