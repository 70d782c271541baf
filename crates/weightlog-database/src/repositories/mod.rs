//! Weight repository contract and its implementations.

pub mod memory;
pub mod weight;

use async_trait::async_trait;

use weightlog_core::result::AppResult;
use weightlog_core::traits::Repository;
use weightlog_core::types::WeightId;
use weightlog_entity::weight::{NewWeight, Weight};

pub use memory::MemoryWeightRepository;
pub use weight::PgWeightRepository;

/// Storage capability set the web layer depends on.
///
/// `find_all` returns records ordered by date, oldest first.
#[async_trait]
pub trait WeightStore: Repository<Weight, WeightId, New = NewWeight> {
    /// Find the record for a calendar date. Fails with `NotFound` when no
    /// record exists for it.
    async fn find_by_date(&self, date: &str) -> AppResult<Weight>;
}
