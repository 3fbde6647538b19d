//! Typed search predicates.

use chrono::{DateTime, Utc};

use rentwise_core::types::GeoPoint;
use rentwise_entity::property::PropertyType;

/// One constraint of a property search.
///
/// Predicates carry their bound values and say nothing about how they are
/// executed; see [`render`](super::render) and
/// [`InMemoryPropertySource`](super::InMemoryPropertySource).
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Property id is one of the listed ids.
    IdIn(Vec<i32>),
    /// `price_per_month >= value`.
    PriceAtLeast(f64),
    /// `price_per_month <= value`.
    PriceAtMost(f64),
    /// `beds >= value`.
    BedsAtLeast(i32),
    /// `baths >= value`.
    BathsAtLeast(f64),
    /// `square_feet >= value`.
    SquareFeetAtLeast(f64),
    /// `square_feet <= value`.
    SquareFeetAtMost(f64),
    /// Exact property type.
    PropertyTypeIs(PropertyType),
    /// The property's amenities are a superset of these tags.
    HasAmenities(Vec<String>),
    /// At least one lease on the property starts on or before the instant.
    LeaseStartsBy(DateTime<Utc>),
    /// Great-circle distance from `center` is at most `radius_km`.
    WithinRadius {
        /// Search centre.
        center: GeoPoint,
        /// Radius in kilometres.
        radius_km: f64,
    },
}

impl Predicate {
    /// Radius predicate around `center`.
    pub fn within_radius(center: GeoPoint, radius_km: f64) -> Self {
        Self::WithinRadius { center, radius_km }
    }

    /// Short name used in logs; never includes the bound value.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IdIn(_) => "id_in",
            Self::PriceAtLeast(_) => "price_min",
            Self::PriceAtMost(_) => "price_max",
            Self::BedsAtLeast(_) => "beds",
            Self::BathsAtLeast(_) => "baths",
            Self::SquareFeetAtLeast(_) => "square_feet_min",
            Self::SquareFeetAtMost(_) => "square_feet_max",
            Self::PropertyTypeIs(_) => "property_type",
            Self::HasAmenities(_) => "amenities",
            Self::LeaseStartsBy(_) => "available_from",
            Self::WithinRadius { .. } => "within_radius",
        }
    }
}
