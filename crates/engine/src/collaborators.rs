//! Collaborator traits for platform side effects.
//!
//! These traits absorb everything environment-specific (permission state,
//! provider availability) behind a plain success/failure contract, so the
//! engine stays pure and testable.

use hush_geofence::Region;
use hush_ringer::RingerMode;
use thiserror::Error;

/// Errors from the external region registrar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The platform denied location access.
    #[error("location permission denied")]
    PermissionDenied,

    /// The geofencing provider is not reachable right now.
    #[error("geofencing provider unavailable")]
    ProviderUnavailable,

    /// The provider rejected the request.
    #[error("registration rejected: {0}")]
    Rejected(String),
}

/// Errors from the ringer-mode actuator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActuationError {
    /// Changing the ringer requires notification-policy access the user
    /// has not granted.
    #[error("notification policy access not granted")]
    PolicyAccessDenied,

    /// The audio service could not be reached.
    #[error("audio service unavailable")]
    ServiceUnavailable,
}

/// Registers and unregisters monitored regions with the platform.
///
/// Either call may fail; the engine reacts by not committing the pending
/// delta, so a retry re-sends the same add/remove set.
pub trait RegionRegistrar: Send + Sync {
    fn register_regions(&self, regions: &[Region]) -> Result<(), RegistrationError>;

    fn unregister_regions(&self, region_ids: &[String]) -> Result<(), RegistrationError>;
}

/// Applies a ringer mode on the device.
pub trait RingerActuator: Send + Sync {
    fn set_ringer_mode(&self, mode: RingerMode) -> Result<(), ActuationError>;
}

/// Registrar that accepts everything, for tests or platforms without
/// geofencing.
pub struct NullRegistrar;

impl RegionRegistrar for NullRegistrar {
    fn register_regions(&self, _regions: &[Region]) -> Result<(), RegistrationError> {
        Ok(())
    }

    fn unregister_regions(&self, _region_ids: &[String]) -> Result<(), RegistrationError> {
        Ok(())
    }
}

/// Actuator that accepts every mode without touching anything.
pub struct NullActuator;

impl RingerActuator for NullActuator {
    fn set_ringer_mode(&self, _mode: RingerMode) -> Result<(), ActuationError> {
        Ok(())
    }
}
