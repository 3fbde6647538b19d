//! Rendering compiled searches to parameterized PostgreSQL.
//!
//! Every user-supplied value becomes a positional bind; the SQL text only
//! ever contains placeholders, so it is safe to log as-is.

use chrono::{DateTime, Utc};

use rentwise_entity::property::PropertyType;

use super::{Predicate, SearchQuery};

/// Base projection: every property column plus the joined location as a
/// JSON object with unpacked coordinates.
pub const PROPERTY_SELECT: &str = "SELECT p.*, \
     json_build_object(\
     'id', l.id, \
     'address', l.address, \
     'city', l.city, \
     'state', l.state, \
     'country', l.country, \
     'postalCode', l.postal_code, \
     'coordinates', json_build_object(\
     'longitude', ST_X(l.coordinates::geometry), \
     'latitude', ST_Y(l.coordinates::geometry))\
     ) AS location \
     FROM properties p \
     JOIN locations l ON p.location_id = l.id";

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Int(i32),
    Float(f64),
    IntArray(Vec<i32>),
    TextArray(Vec<String>),
    PropertyType(PropertyType),
    Timestamp(DateTime<Utc>),
}

/// SQL text with its binds, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuery {
    /// Statement with `$n` placeholders.
    pub sql: String,
    /// Values for `$1..=$n`.
    pub binds: Vec<BindValue>,
}

/// Render a search into a single `SELECT`.
///
/// Predicates are joined with `AND`; an unconstrained search has no
/// `WHERE` clause.
pub fn render(query: &SearchQuery) -> RenderedQuery {
    let mut binds = Vec::new();
    let conditions: Vec<String> = query
        .predicates
        .iter()
        .map(|predicate| render_predicate(predicate, &mut binds))
        .collect();

    let mut sql = PROPERTY_SELECT.to_string();
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }

    RenderedQuery { sql, binds }
}

/// Render the single-property lookup.
pub fn render_by_id(id: i32) -> RenderedQuery {
    RenderedQuery {
        sql: format!("{PROPERTY_SELECT} WHERE p.id = $1"),
        binds: vec![BindValue::Int(id)],
    }
}

fn push(binds: &mut Vec<BindValue>, value: BindValue) -> usize {
    binds.push(value);
    binds.len()
}

fn render_predicate(predicate: &Predicate, binds: &mut Vec<BindValue>) -> String {
    match predicate {
        Predicate::IdIn(ids) => {
            let n = push(binds, BindValue::IntArray(ids.clone()));
            format!("p.id = ANY(${n})")
        }
        Predicate::PriceAtLeast(v) => {
            let n = push(binds, BindValue::Float(*v));
            format!("p.price_per_month >= ${n}")
        }
        Predicate::PriceAtMost(v) => {
            let n = push(binds, BindValue::Float(*v));
            format!("p.price_per_month <= ${n}")
        }
        Predicate::BedsAtLeast(v) => {
            let n = push(binds, BindValue::Int(*v));
            format!("p.beds >= ${n}")
        }
        Predicate::BathsAtLeast(v) => {
            let n = push(binds, BindValue::Float(*v));
            format!("p.baths >= ${n}")
        }
        Predicate::SquareFeetAtLeast(v) => {
            let n = push(binds, BindValue::Float(*v));
            format!("p.square_feet >= ${n}")
        }
        Predicate::SquareFeetAtMost(v) => {
            let n = push(binds, BindValue::Float(*v));
            format!("p.square_feet <= ${n}")
        }
        Predicate::PropertyTypeIs(t) => {
            let n = push(binds, BindValue::PropertyType(*t));
            format!("p.property_type = ${n}")
        }
        Predicate::HasAmenities(tags) => {
            let n = push(binds, BindValue::TextArray(tags.clone()));
            format!("p.amenities @> ${n}::text[]")
        }
        Predicate::LeaseStartsBy(at) => {
            let n = push(binds, BindValue::Timestamp(*at));
            format!(
                "EXISTS (SELECT 1 FROM leases le WHERE le.property_id = p.id AND le.start_date <= ${n})"
            )
        }
        Predicate::WithinRadius { center, radius_km } => {
            // ST_MakePoint takes (x, y), i.e. longitude first.
            let lon = push(binds, BindValue::Float(center.longitude));
            let lat = push(binds, BindValue::Float(center.latitude));
            let meters = push(binds, BindValue::Float(radius_km * 1000.0));
            format!(
                "ST_DWithin(l.coordinates, \
                 ST_SetSRID(ST_MakePoint(${lon}, ${lat}), 4326)::geography, ${meters})"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rentwise_core::types::GeoPoint;

    #[test]
    fn test_unconstrained_has_no_where_clause() {
        let rendered = render(&SearchQuery::default());
        assert_eq!(rendered.sql, PROPERTY_SELECT);
        assert!(!rendered.sql.contains("WHERE"));
        assert!(rendered.binds.is_empty());
    }

    #[test]
    fn test_placeholders_follow_bind_order() {
        let query = SearchQuery {
            predicates: vec![
                Predicate::PriceAtLeast(1000.0),
                Predicate::PriceAtMost(2000.0),
                Predicate::BedsAtLeast(2),
            ],
        };

        let rendered = render(&query);

        assert!(rendered.sql.ends_with(
            " WHERE p.price_per_month >= $1 AND p.price_per_month <= $2 AND p.beds >= $3"
        ));
        assert_eq!(
            rendered.binds,
            vec![
                BindValue::Float(1000.0),
                BindValue::Float(2000.0),
                BindValue::Int(2),
            ]
        );
    }

    #[test]
    fn test_values_never_appear_in_sql() {
        let query = SearchQuery {
            predicates: vec![
                Predicate::HasAmenities(vec!["WiFi'; DROP TABLE properties; --".to_string()]),
                Predicate::IdIn(vec![31337]),
            ],
        };

        let rendered = render(&query);

        assert!(!rendered.sql.contains("DROP"));
        assert!(!rendered.sql.contains("31337"));
        assert!(rendered.sql.contains("p.amenities @> $1::text[]"));
        assert!(rendered.sql.contains("p.id = ANY($2)"));
    }

    #[test]
    fn test_availability_is_an_exists_subquery() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let rendered = render(&SearchQuery {
            predicates: vec![Predicate::LeaseStartsBy(at)],
        });

        assert!(rendered.sql.contains(
            "EXISTS (SELECT 1 FROM leases le WHERE le.property_id = p.id AND le.start_date <= $1)"
        ));
        assert_eq!(rendered.binds, vec![BindValue::Timestamp(at)]);
    }

    #[test]
    fn test_radius_binds_longitude_first_in_meters() {
        let rendered = render(&SearchQuery {
            predicates: vec![
                Predicate::PropertyTypeIs(PropertyType::Cottage),
                Predicate::within_radius(GeoPoint::new(51.5, -0.12), 2.5),
            ],
        });

        assert!(rendered.sql.contains("p.property_type = $1"));
        assert!(rendered.sql.contains(
            "ST_DWithin(l.coordinates, ST_SetSRID(ST_MakePoint($2, $3), 4326)::geography, $4)"
        ));
        assert_eq!(
            rendered.binds,
            vec![
                BindValue::PropertyType(PropertyType::Cottage),
                BindValue::Float(-0.12),
                BindValue::Float(51.5),
                BindValue::Float(2500.0),
            ]
        );
    }

    #[test]
    fn test_area_and_baths_predicates() {
        let rendered = render(&SearchQuery {
            predicates: vec![
                Predicate::BathsAtLeast(1.5),
                Predicate::SquareFeetAtLeast(600.0),
                Predicate::SquareFeetAtMost(1200.0),
            ],
        });

        assert!(rendered.sql.ends_with(
            " WHERE p.baths >= $1 AND p.square_feet >= $2 AND p.square_feet <= $3"
        ));
        assert_eq!(
            rendered.binds,
            vec![
                BindValue::Float(1.5),
                BindValue::Float(600.0),
                BindValue::Float(1200.0),
            ]
        );
    }

    #[test]
    fn test_by_id() {
        let rendered = render_by_id(12);
        assert!(rendered.sql.ends_with("WHERE p.id = $1"));
        assert_eq!(rendered.binds, vec![BindValue::Int(12)]);
    }
}
