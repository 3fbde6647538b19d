//! In-memory property source.

use async_trait::async_trait;

use rentwise_core::result::AppResult;
use rentwise_entity::lease::Lease;
use rentwise_entity::property::PropertyRow;

use super::{Predicate, PropertySource, SearchQuery};

/// Evaluates compiled searches against rows held in memory.
///
/// Semantics match the SQL rendering, with haversine distance standing in
/// for PostGIS `ST_DWithin`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPropertySource {
    rows: Vec<PropertyRow>,
    leases: Vec<Lease>,
}

impl InMemoryPropertySource {
    /// Create a source over `rows` and their `leases`.
    pub fn new(rows: Vec<PropertyRow>, leases: Vec<Lease>) -> Self {
        Self { rows, leases }
    }

    /// Create a source over `rows` with no leases.
    pub fn from_rows(rows: Vec<PropertyRow>) -> Self {
        Self::new(rows, Vec::new())
    }

    /// Rows matching every predicate of `query`, in insertion order.
    pub fn evaluate(&self, query: &SearchQuery) -> Vec<PropertyRow> {
        self.rows
            .iter()
            .filter(|row| query.predicates.iter().all(|p| self.matches(p, row)))
            .cloned()
            .collect()
    }

    fn matches(&self, predicate: &Predicate, row: &PropertyRow) -> bool {
        let p = &row.property;
        match predicate {
            Predicate::IdIn(ids) => ids.contains(&p.id),
            Predicate::PriceAtLeast(v) => p.price_per_month >= *v,
            Predicate::PriceAtMost(v) => p.price_per_month <= *v,
            Predicate::BedsAtLeast(v) => p.beds >= *v,
            Predicate::BathsAtLeast(v) => p.baths >= *v,
            Predicate::SquareFeetAtLeast(v) => f64::from(p.square_feet) >= *v,
            Predicate::SquareFeetAtMost(v) => f64::from(p.square_feet) <= *v,
            Predicate::PropertyTypeIs(t) => p.property_type == *t,
            Predicate::HasAmenities(tags) => p.has_amenities(tags),
            Predicate::LeaseStartsBy(at) => self
                .leases
                .iter()
                .any(|lease| lease.property_id == p.id && lease.starts_by(*at)),
            Predicate::WithinRadius { center, radius_km } => {
                center.is_within(&row.location.point(), *radius_km)
            }
        }
    }
}

#[async_trait]
impl PropertySource for InMemoryPropertySource {
    async fn search(&self, query: &SearchQuery) -> AppResult<Vec<PropertyRow>> {
        Ok(self.evaluate(query))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<PropertyRow>> {
        Ok(self.rows.iter().find(|r| r.property.id == id).cloned())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
