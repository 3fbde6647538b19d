//! Property search and lookup.

use std::sync::Arc;

use tracing::{debug, info, warn};

use rentwise_core::error::AppError;
use rentwise_core::result::AppResult;
use rentwise_database::{PropertySource, SearchCompiler, SearchParams};
use rentwise_entity::property::PropertyRow;

/// Property service: parses search parameters, compiles them, and runs
/// the result against a [`PropertySource`].
#[derive(Clone)]
pub struct PropertyService {
    /// Backing store.
    source: Arc<dyn PropertySource>,
    /// Filter compiler carrying the configured search radius.
    compiler: SearchCompiler,
}

impl std::fmt::Debug for PropertyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyService")
            .field("compiler", &self.compiler)
            .finish_non_exhaustive()
    }
}

impl PropertyService {
    /// Creates a new property service.
    pub fn new(source: Arc<dyn PropertySource>, compiler: SearchCompiler) -> Self {
        Self { source, compiler }
    }

    /// Searches properties matching every supplied parameter.
    ///
    /// Parameters are validated before the store is contacted; a malformed
    /// value fails the whole request and nothing is executed.
    pub async fn search(&self, params: &SearchParams) -> AppResult<Vec<PropertyRow>> {
        let filter = params.to_filter().inspect_err(|e| {
            debug!(field = ?e.field, error = %e.message, "Rejected search parameters");
        })?;

        let query = self.compiler.compile(&filter);
        let rows = self.source.search(&query).await?;

        info!(
            predicates = ?query.predicate_names(),
            results = rows.len(),
            "Property search completed"
        );

        Ok(rows)
    }

    /// Fetches a single property with its location.
    pub async fn get(&self, id: i32) -> AppResult<PropertyRow> {
        self.source
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Property {id} not found")))
    }

    /// Checks that the backing store answers.
    pub async fn health(&self) -> AppResult<()> {
        self.source.ping().await.map_err(|e| {
            warn!(error = %e, "Property store health check failed");
            AppError::service_unavailable("Property store is unreachable")
        })
    }
}
