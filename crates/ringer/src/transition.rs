//! Transition events and the directive evaluator.
//!
//! Pure domain logic - no I/O, no platform dependencies.

use serde::{Deserialize, Serialize};

/// Kind of region transition reported by the geofencing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    Enter,
    Exit,
    /// Anything the provider reported that is not a plain enter or exit.
    Unknown,
}

/// One raw transition event from the geofencing provider.
///
/// Ephemeral: produced by the platform callback, consumed exactly once by
/// [`evaluate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// Id of the region that fired, equal to the originating place id.
    pub region_id: String,

    pub kind: TransitionKind,

    /// Provider error code, if the event reported a failure.
    #[serde(default)]
    pub error_code: Option<i32>,
}

impl TransitionEvent {
    pub fn enter(region_id: impl Into<String>) -> Self {
        Self {
            region_id: region_id.into(),
            kind: TransitionKind::Enter,
            error_code: None,
        }
    }

    pub fn exit(region_id: impl Into<String>) -> Self {
        Self {
            region_id: region_id.into(),
            kind: TransitionKind::Exit,
            error_code: None,
        }
    }
}

/// What the state machine should do with the ringer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingerAction {
    Silence,
    Restore,
    Ignore,
}

/// Why an event was classified as [`RingerAction::Ignore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anomaly {
    /// The event carried a provider error code.
    ProviderError(i32),
    /// The transition kind was neither enter nor exit.
    UnknownTransition,
}

/// Normalized decision for one transition event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingerDirective {
    pub action: RingerAction,

    /// Region the event originated from, passed through unchanged for
    /// correlation with notifications and logs.
    pub region_id: String,

    /// Present when the event was ignored, so callers can record what was
    /// wrong with it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anomaly: Option<Anomaly>,
}

/// Map a raw transition event to a ringer directive.
///
/// Enter silences, exit restores. An unknown kind or an event-carried
/// error code classifies as ignore with an attached anomaly; malformed
/// input is never an error here, it is classified.
///
/// Pure: the same event always yields the same directive, so replays are
/// safe.
pub fn evaluate(event: &TransitionEvent) -> RingerDirective {
    if let Some(code) = event.error_code {
        return RingerDirective {
            action: RingerAction::Ignore,
            region_id: event.region_id.clone(),
            anomaly: Some(Anomaly::ProviderError(code)),
        };
    }

    let (action, anomaly) = match event.kind {
        TransitionKind::Enter => (RingerAction::Silence, None),
        TransitionKind::Exit => (RingerAction::Restore, None),
        TransitionKind::Unknown => (RingerAction::Ignore, Some(Anomaly::UnknownTransition)),
    };

    RingerDirective {
        action,
        region_id: event.region_id.clone(),
        anomaly,
    }
}
