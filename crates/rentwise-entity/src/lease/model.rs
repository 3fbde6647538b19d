//! Lease entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A signed lease between a tenant and a property.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    /// Unique lease identifier.
    pub id: i32,
    /// The leased property.
    pub property_id: i32,
    /// Identity-provider subject of the tenant.
    pub tenant_id: String,
    /// First day of the lease.
    pub start_date: DateTime<Utc>,
    /// Last day of the lease.
    pub end_date: DateTime<Utc>,
    /// Monthly rent agreed on the lease.
    pub rent: f64,
    /// Security deposit held.
    pub deposit: f64,
}

impl Lease {
    /// Whether the lease has started on or before `at`.
    pub fn starts_by(&self, at: DateTime<Utc>) -> bool {
        self.start_date <= at
    }
}
