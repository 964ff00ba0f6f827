//! Saved places and their coordinates.

use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A location the user asked to be silenced at.
///
/// Ids are assigned by the external places provider and stay stable across
/// updates; regions are keyed by them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Stable unique identifier from the places provider.
    pub id: String,

    /// Display name, used in notifications and logs.
    pub name: String,

    /// Some provider lookups return a place without a position.
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl Place {
    /// Create a place without coordinates.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates: None,
        }
    }

    /// Create a place at a known position.
    pub fn with_coordinates(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates: Some(Coordinates {
                latitude,
                longitude,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_deserialize_without_coordinates() {
        let json = r#"{"id": "abc", "name": "Office"}"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.id, "abc");
        assert_eq!(place.coordinates, None);
    }

    #[test]
    fn test_place_with_coordinates() {
        let place = Place::with_coordinates("abc", "Office", 41.39, 2.17);
        let coords = place.coordinates.unwrap();
        assert_eq!(coords.latitude, 41.39);
        assert_eq!(coords.longitude, 2.17);
    }
}
