//! Saved places and the monitored region registry.
//!
//! The registry owns the set of circular regions derived from the user's
//! saved places. It never talks to the platform itself: [`GeofenceRegistry::reconcile`]
//! computes the add/remove delta for an external registrar to apply, and
//! [`GeofenceRegistry::commit`] adopts the delta once that registrar
//! reported success. The region set is therefore always exactly the image
//! of the last successfully registered place list.

mod place;
mod region;
mod registry;

pub use place::{Coordinates, Place};
pub use region::{
    Region, RegionConfig, TransitionMask, DEFAULT_CENTER, REGION_EXPIRY, REGION_RADIUS_M,
};
pub use registry::{GeofenceRegistry, RegistryDelta};
