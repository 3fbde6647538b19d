//! Location value embedded in property rows.

use serde::{Deserialize, Serialize};

use rentwise_core::types::GeoPoint;

/// Longitude/latitude pair as exposed over the API.
///
/// The database stores a PostGIS `geography(Point, 4326)`; queries unpack
/// it with `ST_X`/`ST_Y` so callers never see a raw geometry encoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Latitude in decimal degrees.
    pub latitude: f64,
}

impl From<Coordinates> for GeoPoint {
    fn from(c: Coordinates) -> Self {
        GeoPoint::new(c.latitude, c.longitude)
    }
}

impl From<GeoPoint> for Coordinates {
    fn from(p: GeoPoint) -> Self {
        Self {
            longitude: p.longitude,
            latitude: p.latitude,
        }
    }
}

/// Street address and position of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique location identifier.
    pub id: i32,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Country.
    pub country: String,
    /// Postal code.
    pub postal_code: String,
    /// Position of the property.
    pub coordinates: Coordinates,
}

impl Location {
    /// The location as a point for distance calculations.
    pub fn point(&self) -> GeoPoint {
        self.coordinates.into()
    }
}
