//! Geographic points and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, `-90..=90`.
    pub latitude: f64,
    /// Longitude, `-180..=180`.
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point without range checks.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Haversine distance to `other` in kilometres.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // Clamp guards asin against rounding just above 1.0 for antipodal points.
        2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
    }

    /// Whether `other` lies within `radius_km` of this point (inclusive).
    pub fn is_within(&self, other: &GeoPoint, radius_km: f64) -> bool {
        self.distance_km(other) <= radius_km
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero_distance() {
        let p = GeoPoint::new(34.0522, -118.2437);
        assert_eq!(p.distance_km(&p), 0.0);
        assert!(p.is_within(&p, 0.0));
    }

    #[test]
    fn test_known_distance() {
        let los_angeles = GeoPoint::new(34.0522, -118.2437);
        let san_francisco = GeoPoint::new(37.7749, -122.4194);
        let d = los_angeles.distance_km(&san_francisco);
        assert!((d - 559.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn test_range_validation() {
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.1).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}
