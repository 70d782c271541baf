//! In-memory weight repository.
//!
//! Mirrors the PostgreSQL contract: identifiers are assigned sequentially,
//! dates are unique, listings are ordered by date. Contents live only as long
//! as the process.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use weightlog_core::error::AppError;
use weightlog_core::result::AppResult;
use weightlog_core::traits::Repository;
use weightlog_core::types::WeightId;
use weightlog_entity::weight::{NewWeight, Weight};

use super::WeightStore;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<WeightId, Weight>,
    last_id: i64,
}

impl Table {
    fn date_taken(&self, date: &str, except: Option<WeightId>) -> bool {
        self.rows
            .values()
            .any(|w| w.date == date && Some(w.id) != except)
    }
}

/// Process-local weight repository.
#[derive(Debug, Default)]
pub struct MemoryWeightRepository {
    table: RwLock<Table>,
}

impl MemoryWeightRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate_date(date: &str) -> AppError {
    AppError::conflict(format!("Weight for {date} already in the database"))
}

#[async_trait]
impl Repository<Weight, WeightId> for MemoryWeightRepository {
    type New = NewWeight;

    async fn save(&self, new: &NewWeight) -> AppResult<Weight> {
        let mut table = self.table.write().await;
        if table.date_taken(&new.date, None) {
            return Err(duplicate_date(&new.date));
        }

        table.last_id += 1;
        let now = Utc::now();
        let weight = Weight {
            id: WeightId(table.last_id),
            date: new.date.clone(),
            max: new.max,
            min: new.min,
            difference: new.difference,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(weight.id, weight.clone());

        debug!(id = %weight.id, date = %weight.date, "Stored weight in memory");
        Ok(weight)
    }

    async fn find_all(&self) -> AppResult<Vec<Weight>> {
        let table = self.table.read().await;
        let mut weights: Vec<Weight> = table.rows.values().cloned().collect();
        weights.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(weights)
    }

    async fn find_by_id(&self, id: WeightId) -> AppResult<Weight> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Weight {id} not found")))
    }

    async fn update(&self, id: WeightId, weight: &NewWeight) -> AppResult<Weight> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Err(AppError::not_found(format!("Weight {id} not found")));
        }
        if table.date_taken(&weight.date, Some(id)) {
            return Err(duplicate_date(&weight.date));
        }

        let row = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Weight {id} not found")))?;
        row.date = weight.date.clone();
        row.max = weight.max;
        row.min = weight.min;
        row.difference = weight.difference;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: WeightId) -> AppResult<()> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Weight {id} not found")))
    }
}

#[async_trait]
impl WeightStore for MemoryWeightRepository {
    async fn find_by_date(&self, date: &str) -> AppResult<Weight> {
        self.table
            .read()
            .await
            .rows
            .values()
            .find(|w| w.date == date)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("No weight recorded for {date}")))
    }
}
