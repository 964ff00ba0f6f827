//! Engine configuration.

use hush_geofence::RegionConfig;

/// What to do with the tracked mode when the actuator fails.
///
/// The outcome reports the failure either way; this only decides whether
/// the state machine remembers the intended mode or forgets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActuationFailurePolicy {
    /// Keep the intended mode. The device converges on the next real
    /// transition.
    #[default]
    KeepIntended,

    /// Roll the tracked mode back so the next identical directive retries
    /// the side effect.
    RollBack,
}

/// Configuration for [`HushEngine`](crate::HushEngine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Radius, expiry and fallback center applied to every region.
    pub region: RegionConfig,

    pub actuation_failure_policy: ActuationFailurePolicy,

    /// Whether monitoring starts enabled.
    pub enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            region: RegionConfig::default(),
            actuation_failure_policy: ActuationFailurePolicy::default(),
            enabled: true,
        }
    }
}
