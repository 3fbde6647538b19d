//! Property search configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Radius used by the "near a point" filter when none is configured.
///
/// 1000 km is far wider than a typical neighbourhood search and is pending
/// product review; deployments can narrow it with `search.radius_km`.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 1000.0;

/// Settings for the property search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Great-circle radius in kilometres applied when a request carries
    /// both `latitude` and `longitude`.
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
        }
    }
}

impl SearchConfig {
    /// Reject radii that would make every location search match nothing.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.radius_km.is_finite() || self.radius_km < 0.0 {
            return Err(AppError::configuration(format!(
                "search.radius_km must be a finite, non-negative number, got {}",
                self.radius_km
            )));
        }
        Ok(())
    }
}

fn default_radius_km() -> f64 {
    DEFAULT_SEARCH_RADIUS_KM
}
