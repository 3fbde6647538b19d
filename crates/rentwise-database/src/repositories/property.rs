//! Property repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error};

use rentwise_core::error::{AppError, ErrorKind};
use rentwise_core::result::AppResult;
use rentwise_entity::property::PropertyRow;

use crate::search::render::{render, render_by_id};
use crate::search::{BindValue, PropertySource, RenderedQuery, SearchQuery};

/// Repository for property queries against PostgreSQL/PostGIS.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Create a new property repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Bind every value of `rendered` and fetch all rows.
    ///
    /// Failures are logged with the SQL text, which only ever holds
    /// placeholders, and surface as database errors carrying the cause.
    async fn fetch(
        &self,
        rendered: RenderedQuery,
        context: &'static str,
    ) -> AppResult<Vec<PropertyRow>> {
        let RenderedQuery { sql, binds } = rendered;

        let mut query = sqlx::query_as::<_, PropertyRow>(&sql);
        for value in binds {
            query = match value {
                BindValue::Int(v) => query.bind(v),
                BindValue::Float(v) => query.bind(v),
                BindValue::IntArray(v) => query.bind(v),
                BindValue::TextArray(v) => query.bind(v),
                BindValue::PropertyType(v) => query.bind(v),
                BindValue::Timestamp(v) => query.bind(v),
            };
        }

        let result = query.fetch_all(&self.pool).await;
        result.map_err(|e| {
            error!(sql = %sql, error = %e, "{context} failed");
            AppError::with_source(ErrorKind::Database, format!("{context} failed"), e)
        })
    }
}

#[async_trait]
impl PropertySource for PropertyRepository {
    async fn search(&self, query: &SearchQuery) -> AppResult<Vec<PropertyRow>> {
        let rendered = render(query);
        debug!(
            sql = %rendered.sql,
            binds = rendered.binds.len(),
            predicates = ?query.predicate_names(),
            "Executing property search"
        );

        self.fetch(rendered, "Property search").await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<PropertyRow>> {
        let rows = self.fetch(render_by_id(id), "Property lookup").await?;

        Ok(rows.into_iter().next())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
