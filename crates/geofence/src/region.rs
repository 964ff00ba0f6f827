//! Monitored regions derived from saved places.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::place::{Coordinates, Place};

/// Radius of every monitored region, in meters.
pub const REGION_RADIUS_M: f32 = 50.0;

/// Registered regions expire after this long and must be re-registered.
pub const REGION_EXPIRY: Duration = Duration::from_secs(24 * 60 * 60);

/// Center used for places the provider returned without coordinates
/// (the Sydney Opera House).
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    latitude: -33.856159,
    longitude: 151.215256,
};

/// Which transitions a region reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionMask {
    pub enter: bool,
    pub exit: bool,
}

impl Default for TransitionMask {
    fn default() -> Self {
        Self {
            enter: true,
            exit: true,
        }
    }
}

/// Parameters applied to every region built from a place.
#[derive(Debug, Clone)]
pub struct RegionConfig {
    pub radius_m: f32,
    pub expiry: Duration,
    /// Fallback center for places without coordinates. Such places are
    /// mapped here rather than dropped, so the region set stays the exact
    /// image of the place set.
    pub default_center: Coordinates,
    pub mask: TransitionMask,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            radius_m: REGION_RADIUS_M,
            expiry: REGION_EXPIRY,
            default_center: DEFAULT_CENTER,
            mask: TransitionMask::default(),
        }
    }
}

/// A monitored circular area, derived 1:1 from a saved place.
///
/// Regions are regenerated wholesale whenever the place list changes; they
/// are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Same id as the place this region was built from.
    pub id: String,
    pub center: Coordinates,
    pub radius_m: f32,
    pub expiry: Duration,
    pub mask: TransitionMask,
}

impl Region {
    /// Build the region for a place under the given config.
    pub fn from_place(place: &Place, config: &RegionConfig) -> Self {
        let center = match place.coordinates {
            Some(center) => center,
            None => {
                tracing::info!(place = %place.name, "place has no coordinates, using default center");
                config.default_center
            }
        };

        Self {
            id: place.id.clone(),
            center,
            radius_m: config.radius_m,
            expiry: config.expiry,
            mask: config.mask,
        }
    }
}
