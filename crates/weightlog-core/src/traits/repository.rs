//! Generic repository trait for record storage.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic record-level capability set.
///
/// Point lookups, updates, and deletes that find no row fail with an error
/// of kind [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound) so
/// callers can tell a missing record apart from a storage failure.
/// Entity-specific queries live on extension traits next to the entity's
/// storage adapters.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Candidate value accepted by [`save`](Self::save), before storage
    /// assigns an identifier.
    type New: Send + Sync;

    /// Persist a new record; storage assigns its identifier.
    async fn save(&self, new: &Self::New) -> AppResult<Entity>;

    /// Every stored record. An empty table is an empty list, not an error.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Find a record by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Entity>;

    /// Replace every mutable field of the record with the given key.
    async fn update(&self, id: Id, entity: &Self::New) -> AppResult<Entity>;

    /// Remove the record with the given key.
    async fn delete(&self, id: Id) -> AppResult<()>;
}
