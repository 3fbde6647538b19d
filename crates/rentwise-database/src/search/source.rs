//! Backend abstraction for executing property queries.

use async_trait::async_trait;

use rentwise_core::result::AppResult;
use rentwise_entity::property::PropertyRow;

use super::SearchQuery;

/// A store that can answer compiled property searches.
///
/// Implementations must treat every predicate in the query as a
/// conjunction and must not impose an ordering the caller relies on.
#[async_trait]
pub trait PropertySource: Send + Sync + 'static {
    /// Return every property matching all predicates of `query`.
    async fn search(&self, query: &SearchQuery) -> AppResult<Vec<PropertyRow>>;

    /// Find one property with its location.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<PropertyRow>>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> AppResult<()>;
}
