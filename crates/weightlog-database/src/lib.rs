//! # weightlog-database
//!
//! PostgreSQL connection management, migrations, and the weight repository
//! implementations (PostgreSQL and in-memory).

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{MemoryWeightRepository, PgWeightRepository, WeightStore};
