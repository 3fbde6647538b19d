//! Property entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::location::Location;
use crate::property::PropertyType;

/// A rental listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique property identifier.
    pub id: i32,
    /// Listing title.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Monthly rent.
    pub price_per_month: f64,
    /// Security deposit.
    pub security_deposit: f64,
    /// Application fee.
    pub application_fee: f64,
    /// Public URLs of the listing photos.
    pub photo_urls: Vec<String>,
    /// Amenity tags, e.g. `WiFi`, `Parking`.
    pub amenities: Vec<String>,
    /// Highlight tags shown on the listing card.
    pub highlights: Vec<String>,
    /// Whether pets are allowed.
    pub is_pets_allowed: bool,
    /// Whether a parking spot is included.
    pub is_parking_included: bool,
    /// Number of bedrooms.
    pub beds: i32,
    /// Number of bathrooms (half baths allowed).
    pub baths: f64,
    /// Floor area in square feet.
    pub square_feet: i32,
    /// Kind of dwelling.
    pub property_type: PropertyType,
    /// When the listing was published.
    pub posted_date: DateTime<Utc>,
    /// Average review rating.
    pub average_rating: Option<f64>,
    /// Number of reviews.
    pub number_of_reviews: Option<i32>,
    /// The location row this property points at.
    pub location_id: i32,
    /// Identity-provider subject of the managing user.
    pub manager_id: String,
}

impl Property {
    /// Whether the listing carries every tag in `required`.
    pub fn has_amenities<'a>(&self, required: impl IntoIterator<Item = &'a String>) -> bool {
        required
            .into_iter()
            .all(|tag| self.amenities.iter().any(|a| a == tag))
    }
}

/// A property joined with its location, as returned by property queries.
///
/// Serializes as the property's fields with a nested `location` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PropertyRow {
    /// All property columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub property: Property,
    /// The joined location, decoded from the `location` JSON column.
    #[sqlx(json)]
    pub location: Location,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Coordinates;
    use chrono::TimeZone;

    fn sample_row() -> PropertyRow {
        PropertyRow {
            property: Property {
                id: 7,
                name: "Sunny loft".to_string(),
                description: "Top floor".to_string(),
                price_per_month: 1500.0,
                security_deposit: 500.0,
                application_fee: 50.0,
                photo_urls: vec![],
                amenities: vec!["WiFi".to_string(), "Parking".to_string()],
                highlights: vec![],
                is_pets_allowed: true,
                is_parking_included: true,
                beds: 2,
                baths: 1.5,
                square_feet: 900,
                property_type: PropertyType::Apartment,
                posted_date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
                average_rating: None,
                number_of_reviews: Some(0),
                location_id: 3,
                manager_id: "mgr-1".to_string(),
            },
            location: Location {
                id: 3,
                address: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                country: "US".to_string(),
                postal_code: "62701".to_string(),
                coordinates: Coordinates {
                    longitude: -89.65,
                    latitude: 39.78,
                },
            },
        }
    }

    #[test]
    fn test_row_json_shape() {
        let json = serde_json::to_value(sample_row()).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["pricePerMonth"], 1500.0);
        assert_eq!(json["propertyType"], "Apartment");
        assert_eq!(json["location"]["postalCode"], "62701");
        assert_eq!(json["location"]["coordinates"]["longitude"], -89.65);
        assert_eq!(json["location"]["coordinates"]["latitude"], 39.78);
        assert!(json.get("property").is_none());
    }

    #[test]
    fn test_has_amenities_is_containment() {
        let row = sample_row();
        let wifi = vec!["WiFi".to_string()];
        let wifi_pool = vec!["WiFi".to_string(), "Pool".to_string()];

        assert!(row.property.has_amenities(&wifi));
        assert!(!row.property.has_amenities(&wifi_pool));
        assert!(row.property.has_amenities(&Vec::<String>::new()));
    }
}
