//! Filter to predicate compilation.

use rentwise_core::config::SearchConfig;
use rentwise_core::config::search::DEFAULT_SEARCH_RADIUS_KM;
use rentwise_entity::property::PropertyFilter;

use super::Predicate;

/// A compiled property search: the conjunction of its predicates.
///
/// An empty predicate list matches every property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Predicates, all of which must hold.
    pub predicates: Vec<Predicate>,
}

impl SearchQuery {
    /// Whether the query constrains nothing.
    pub fn is_unconstrained(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Predicate names, for logging.
    pub fn predicate_names(&self) -> Vec<&'static str> {
        self.predicates.iter().map(Predicate::name).collect()
    }
}

/// Compiles [`PropertyFilter`]s into [`SearchQuery`]s.
#[derive(Debug, Clone, Copy)]
pub struct SearchCompiler {
    radius_km: f64,
}

impl SearchCompiler {
    /// Create a compiler applying `radius_km` to location filters.
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Create a compiler from the `search` configuration section.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.radius_km)
    }

    /// The radius applied to location filters, in kilometres.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Build the predicate list for `filter`.
    ///
    /// Each populated field contributes exactly one predicate, independent
    /// of the others.
    pub fn compile(&self, filter: &PropertyFilter) -> SearchQuery {
        let mut predicates = Vec::new();

        if !filter.favorite_ids.is_empty() {
            predicates.push(Predicate::IdIn(filter.favorite_ids.clone()));
        }
        if let Some(min) = filter.price_min {
            predicates.push(Predicate::PriceAtLeast(min));
        }
        if let Some(max) = filter.price_max {
            predicates.push(Predicate::PriceAtMost(max));
        }
        if let Some(beds) = filter.beds {
            predicates.push(Predicate::BedsAtLeast(beds));
        }
        if let Some(baths) = filter.baths {
            predicates.push(Predicate::BathsAtLeast(baths));
        }
        if let Some(min) = filter.square_feet_min {
            predicates.push(Predicate::SquareFeetAtLeast(min));
        }
        if let Some(max) = filter.square_feet_max {
            predicates.push(Predicate::SquareFeetAtMost(max));
        }
        if let Some(property_type) = filter.property_type {
            predicates.push(Predicate::PropertyTypeIs(property_type));
        }
        if !filter.amenities.is_empty() {
            predicates.push(Predicate::HasAmenities(
                filter.amenities.iter().cloned().collect(),
            ));
        }
        if let Some(at) = filter.available_from {
            predicates.push(Predicate::LeaseStartsBy(at));
        }
        if let Some(center) = filter.location {
            predicates.push(Predicate::within_radius(center, self.radius_km));
        }

        SearchQuery { predicates }
    }
}

impl Default for SearchCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_RADIUS_KM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rentwise_core::types::GeoPoint;
    use rentwise_entity::property::PropertyType;

    #[test]
    fn test_empty_filter_compiles_to_nothing() {
        let query = SearchCompiler::default().compile(&PropertyFilter::default());
        assert!(query.is_unconstrained());
    }

    #[test]
    fn test_every_field_contributes_one_predicate_in_order() {
        let at = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
        let filter = PropertyFilter {
            favorite_ids: vec![4, 9],
            price_min: Some(1000.0),
            price_max: Some(2000.0),
            beds: Some(2),
            baths: Some(1.5),
            square_feet_min: Some(500.0),
            square_feet_max: Some(1500.0),
            property_type: Some(PropertyType::Villa),
            amenities: ["Pool".to_string(), "Gym".to_string()].into(),
            available_from: Some(at),
            location: Some(GeoPoint::new(40.0, -74.0)),
        };

        let query = SearchCompiler::new(25.0).compile(&filter);

        assert_eq!(
            query.predicates,
            vec![
                Predicate::IdIn(vec![4, 9]),
                Predicate::PriceAtLeast(1000.0),
                Predicate::PriceAtMost(2000.0),
                Predicate::BedsAtLeast(2),
                Predicate::BathsAtLeast(1.5),
                Predicate::SquareFeetAtLeast(500.0),
                Predicate::SquareFeetAtMost(1500.0),
                Predicate::PropertyTypeIs(PropertyType::Villa),
                Predicate::HasAmenities(vec!["Gym".to_string(), "Pool".to_string()]),
                Predicate::LeaseStartsBy(at),
                Predicate::WithinRadius {
                    center: GeoPoint::new(40.0, -74.0),
                    radius_km: 25.0,
                },
            ]
        );
    }

    #[test]
    fn test_default_radius() {
        let filter = PropertyFilter {
            location: Some(GeoPoint::new(0.0, 0.0)),
            ..Default::default()
        };
        let query = SearchCompiler::default().compile(&filter);
        assert_eq!(
            query.predicates,
            vec![Predicate::within_radius(GeoPoint::new(0.0, 0.0), 1000.0)]
        );
        assert_eq!(query.predicate_names(), vec!["within_radius"]);
    }
}
