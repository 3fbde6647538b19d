//! Query-string parameters of the property search endpoint.

use serde::Deserialize;
use tracing::debug;

use rentwise_core::error::AppError;
use rentwise_core::result::AppResult;
use rentwise_core::types::GeoPoint;
use rentwise_core::types::wire::{
    constrained, parse_date, parse_list, parse_non_negative, parse_opt, present, split_list,
};
use rentwise_entity::property::{PropertyFilter, PropertyType};

/// Raw search parameters exactly as they appear on the wire.
///
/// `beds`, `baths`, `propertyType` and `availableFrom` accept the literal
/// `"any"` for "no constraint". `amenities` and `favoriteIds` are
/// comma-separated lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub favorite_ids: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub beds: Option<String>,
    pub baths: Option<String>,
    pub property_type: Option<String>,
    pub square_feet_min: Option<String>,
    pub square_feet_max: Option<String>,
    pub amenities: Option<String>,
    pub available_from: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl SearchParams {
    /// Validate and convert into a typed filter.
    ///
    /// Fails with a field-tagged validation error on the first malformed
    /// value. A lone or non-numeric coordinate disables the location filter
    /// instead of failing.
    pub fn to_filter(&self) -> AppResult<PropertyFilter> {
        let property_type = constrained(self.property_type.as_deref())
            .map(str::parse::<PropertyType>)
            .transpose()?;

        let available_from = constrained(self.available_from.as_deref())
            .map(|v| parse_date("availableFrom", v))
            .transpose()?;

        Ok(PropertyFilter {
            favorite_ids: parse_list("favoriteIds", self.favorite_ids.as_deref())?,
            price_min: parse_non_negative("priceMin", self.price_min.as_deref())?,
            price_max: parse_non_negative("priceMax", self.price_max.as_deref())?,
            beds: parse_opt("beds", constrained(self.beds.as_deref()))?,
            baths: parse_non_negative("baths", constrained(self.baths.as_deref()))?,
            square_feet_min: parse_non_negative("squareFeetMin", self.square_feet_min.as_deref())?,
            square_feet_max: parse_non_negative("squareFeetMax", self.square_feet_max.as_deref())?,
            property_type,
            amenities: split_list(self.amenities.as_deref())
                .into_iter()
                .map(str::to_string)
                .collect(),
            available_from,
            location: self.location()?,
        })
    }

    fn location(&self) -> AppResult<Option<GeoPoint>> {
        let coordinate = |raw: Option<&str>| {
            present(raw)
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite())
        };
        let latitude = coordinate(self.latitude.as_deref());
        let longitude = coordinate(self.longitude.as_deref());

        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            if self.latitude.is_some() || self.longitude.is_some() {
                debug!("Ignoring incomplete or non-numeric coordinates");
            }
            return Ok(None);
        };

        let point = GeoPoint::new(latitude, longitude);
        if !point.is_valid() {
            let field = if (-90.0..=90.0).contains(&latitude) {
                "longitude"
            } else {
                "latitude"
            };
            return Err(AppError::invalid_field(
                field,
                format!("Coordinates out of range: ({latitude}, {longitude})"),
            ));
        }

        Ok(Some(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn params(pairs: &[(&str, &str)]) -> SearchParams {
        let mut p = SearchParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "favoriteIds" => p.favorite_ids = value,
                "priceMin" => p.price_min = value,
                "priceMax" => p.price_max = value,
                "beds" => p.beds = value,
                "baths" => p.baths = value,
                "propertyType" => p.property_type = value,
                "squareFeetMin" => p.square_feet_min = value,
                "squareFeetMax" => p.square_feet_max = value,
                "amenities" => p.amenities = value,
                "availableFrom" => p.available_from = value,
                "latitude" => p.latitude = value,
                "longitude" => p.longitude = value,
                other => panic!("unknown key {other}"),
            }
        }
        p
    }

    #[test]
    fn test_empty_params_give_empty_filter() {
        assert!(SearchParams::default().to_filter().unwrap().is_empty());
    }

    #[test]
    fn test_any_sentinel_equals_unset() {
        let with_any = params(&[
            ("beds", "any"),
            ("baths", "any"),
            ("propertyType", "any"),
            ("availableFrom", "any"),
        ]);
        assert_eq!(
            with_any.to_filter().unwrap(),
            SearchParams::default().to_filter().unwrap()
        );
    }

    #[test]
    fn test_full_parse() {
        let filter = params(&[
            ("favoriteIds", "3,5"),
            ("priceMin", "1000"),
            ("priceMax", "2000.50"),
            ("beds", "2"),
            ("baths", "1.5"),
            ("propertyType", "Townhouse"),
            ("squareFeetMin", "600"),
            ("squareFeetMax", "1200"),
            ("amenities", "WiFi,Parking,WiFi"),
            ("availableFrom", "2024-07-01"),
            ("latitude", "34.05"),
            ("longitude", "-118.24"),
        ])
        .to_filter()
        .unwrap();

        assert_eq!(filter.favorite_ids, vec![3, 5]);
        assert_eq!(filter.price_min, Some(1000.0));
        assert_eq!(filter.price_max, Some(2000.5));
        assert_eq!(filter.beds, Some(2));
        assert_eq!(filter.baths, Some(1.5));
        assert_eq!(filter.property_type, Some(PropertyType::Townhouse));
        assert_eq!(filter.square_feet_min, Some(600.0));
        assert_eq!(filter.square_feet_max, Some(1200.0));
        assert_eq!(filter.amenities.len(), 2);
        assert_eq!(
            filter.available_from,
            Some(Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(filter.location, Some(GeoPoint::new(34.05, -118.24)));
    }

    #[test]
    fn test_validation_errors_name_the_field() {
        let cases = [
            ("propertyType", "NotARealType", "propertyType"),
            ("availableFrom", "31/12/2024", "availableFrom"),
            ("priceMin", "cheap", "priceMin"),
            ("priceMax", "-5", "priceMax"),
            ("beds", "2.5", "beds"),
            ("baths", "lots", "baths"),
            ("favoriteIds", "1,two", "favoriteIds"),
        ];

        for (key, value, field) in cases {
            let err = params(&[(key, value)]).to_filter().unwrap_err();
            assert!(err.is_validation(), "{key}={value}");
            assert_eq!(err.field.as_deref(), Some(field), "{key}={value}");
        }
    }

    #[test]
    fn test_single_coordinate_is_ignored() {
        let filter = params(&[("latitude", "34.05")]).to_filter().unwrap();
        assert_eq!(filter.location, None);

        let filter = params(&[("latitude", "34.05"), ("longitude", "west")])
            .to_filter()
            .unwrap();
        assert_eq!(filter.location, None);

        for (lat, lon) in [("NaN", "10"), ("34", "NaN"), ("inf", "10"), ("34", "-infinity")] {
            let filter = params(&[("latitude", lat), ("longitude", lon)])
                .to_filter()
                .unwrap();
            assert_eq!(filter.location, None, "({lat}, {lon})");
        }
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let err = params(&[("latitude", "95"), ("longitude", "10")])
            .to_filter()
            .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("latitude"));

        let err = params(&[("latitude", "45"), ("longitude", "190")])
            .to_filter()
            .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("longitude"));
    }
}
