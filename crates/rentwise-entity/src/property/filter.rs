//! Typed property search filter.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use rentwise_core::types::GeoPoint;

use crate::property::PropertyType;

/// Constraints for a property search. Every field is optional; an empty
/// filter matches every property.
///
/// Minimums and maximums are inclusive, and `beds`/`baths` mean "at least".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// Restrict to these property ids.
    pub favorite_ids: Vec<i32>,
    /// Lowest acceptable monthly rent.
    pub price_min: Option<f64>,
    /// Highest acceptable monthly rent.
    pub price_max: Option<f64>,
    /// Minimum number of bedrooms.
    pub beds: Option<i32>,
    /// Minimum number of bathrooms.
    pub baths: Option<f64>,
    /// Smallest acceptable floor area.
    pub square_feet_min: Option<f64>,
    /// Largest acceptable floor area.
    pub square_feet_max: Option<f64>,
    /// Required kind of dwelling.
    pub property_type: Option<PropertyType>,
    /// Tags the property must all carry.
    pub amenities: BTreeSet<String>,
    /// Only properties with a lease starting on or before this instant.
    pub available_from: Option<DateTime<Utc>>,
    /// Search centre for the radius filter.
    pub location: Option<GeoPoint>,
}

impl PropertyFilter {
    /// Whether the filter constrains nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
