//! Shared event contracts for hush components.
//!
//! This crate defines the formal payloads (DTOs) for events that cross the
//! engine boundary on the event bus. Using shared types keeps the engine
//! and notifier frontends from drifting apart on field names.
//!
//! Also provides the [`EventBus`] trait for decoupled event emission.

mod bus;

pub use bus::{EventBus, EventBusRef, InMemoryEventBus, NullEventBus, RecordedEvent};

use hush_ringer::{Anomaly, RingerMode};
use serde::{Deserialize, Serialize};

/// Emitted once per real ringer transition.
///
/// Producers: engine
/// Consumers: notification frontends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingerChangedEvent {
    /// Mode the device was switched to.
    pub mode: RingerMode,
    /// Region whose transition caused the change.
    pub region_id: String,
    /// Timestamp in milliseconds since epoch.
    #[serde(default)]
    pub timestamp_ms: i64,
}

impl RingerChangedEvent {
    /// Notification headline for the transition direction.
    pub fn title(&self) -> &'static str {
        match self.mode {
            RingerMode::Silent => "Silent mode activated",
            RingerMode::Normal => "Back to normal",
            RingerMode::Unknown => "Ringer state unknown",
        }
    }
}

/// Emitted when a transition event was ignored instead of applied.
///
/// Producers: engine
/// Consumers: diagnostics frontends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionIgnoredEvent {
    pub region_id: String,
    /// What was wrong with the event.
    pub anomaly: Anomaly,
    #[serde(default)]
    pub timestamp_ms: i64,
}

/// Emitted after a region delta was committed.
///
/// Producers: engine
/// Consumers: frontends showing the monitored set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionsChangedEvent {
    pub added: usize,
    pub removed: usize,
    /// Committed region count after the change.
    pub total: usize,
    #[serde(default)]
    pub timestamp_ms: i64,
}

/// Event names as constants to prevent typos.
pub mod event_names {
    /// Ringer mode changed event.
    pub const RINGER_CHANGED: &str = "ringer:changed";
    /// Transition ignored event.
    pub const TRANSITION_IGNORED: &str = "geofence:transition_ignored";
    /// Region set changed event.
    pub const REGIONS_CHANGED: &str = "geofence:regions_changed";
}

/// Current wall-clock timestamp in milliseconds, for stamping events.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
