//! Property type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of dwelling a listing offers.
///
/// Maps to the Postgres enum `property_type`; the wire and database
/// spellings are the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "property_type")]
pub enum PropertyType {
    /// Single rooms in a shared dwelling.
    Rooms,
    /// Tiny house.
    Tinyhouse,
    /// Apartment or flat.
    Apartment,
    /// Detached villa.
    Villa,
    /// Townhouse.
    Townhouse,
    /// Cottage.
    Cottage,
}

impl PropertyType {
    /// Every variant, in declaration order.
    pub const ALL: [PropertyType; 6] = [
        Self::Rooms,
        Self::Tinyhouse,
        Self::Apartment,
        Self::Villa,
        Self::Townhouse,
        Self::Cottage,
    ];

    /// Return the type as its wire/database string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rooms => "Rooms",
            Self::Tinyhouse => "Tinyhouse",
            Self::Apartment => "Apartment",
            Self::Villa => "Villa",
            Self::Townhouse => "Townhouse",
            Self::Cottage => "Cottage",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = rentwise_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                rentwise_core::AppError::invalid_field(
                    "propertyType",
                    format!(
                        "Invalid property type: '{s}'. Expected one of: Rooms, Tinyhouse, \
                         Apartment, Villa, Townhouse, Cottage"
                    ),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("Villa".parse::<PropertyType>().unwrap(), PropertyType::Villa);
        assert_eq!(
            "apartment".parse::<PropertyType>().unwrap(),
            PropertyType::Apartment
        );

        let err = "NotARealType".parse::<PropertyType>().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.field.as_deref(), Some("propertyType"));
    }

    #[test]
    fn test_round_trips_through_display() {
        for t in PropertyType::ALL {
            assert_eq!(t.to_string().parse::<PropertyType>().unwrap(), t);
        }
    }
}
