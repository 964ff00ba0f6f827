//! The engine: wires the registry, evaluator and state machine to the
//! platform collaborators.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use hush_events::{
    event_names, now_ms, EventBusRef, RegionsChangedEvent, RingerChangedEvent,
    TransitionIgnoredEvent,
};
use hush_geofence::{GeofenceRegistry, Place, RegistryDelta};
use hush_ringer::{evaluate, RingerDirective, RingerMode, RingerStateMachine, TransitionEvent};

use crate::collaborators::{ActuationError, RegionRegistrar, RegistrationError, RingerActuator};
use crate::config::{ActuationFailurePolicy, EngineConfig};

/// Outcome of processing one transition event.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionOutcome {
    /// The evaluated directive, including any anomaly.
    pub directive: RingerDirective,

    /// Whether the directive asked for a real mode change.
    pub changed: bool,

    /// Mode the directive asked for. When `actuation_error` is set and the
    /// rollback policy is active, the tracked state was reverted and this
    /// mode did not stick.
    pub effective_mode: RingerMode,

    /// Actuator failure, surfaced instead of hidden. The engine never
    /// retries on its own.
    pub actuation_error: Option<ActuationError>,
}

/// Coordinates geofence monitoring and ringer control.
///
/// All mutable state sits behind locks, so platform callbacks may call in
/// from any thread. Transition processing is serialized on the state
/// machine's mutex, which is held across apply and actuation; for a
/// queue-fed single worker, push events through a
/// [`TransitionInbox`](crate::TransitionInbox) instead of calling
/// [`on_transition`](Self::on_transition) directly.
pub struct HushEngine {
    registry: GeofenceRegistry,
    state: Mutex<RingerStateMachine>,
    places: Mutex<Vec<Place>>,
    enabled: AtomicBool,
    policy: ActuationFailurePolicy,
    registrar: Arc<dyn RegionRegistrar>,
    actuator: Arc<dyn RingerActuator>,
    bus: EventBusRef,
}

impl HushEngine {
    pub fn new(
        registrar: Arc<dyn RegionRegistrar>,
        actuator: Arc<dyn RingerActuator>,
        bus: EventBusRef,
    ) -> Self {
        Self::with_config(EngineConfig::default(), registrar, actuator, bus)
    }

    pub fn with_config(
        config: EngineConfig,
        registrar: Arc<dyn RegionRegistrar>,
        actuator: Arc<dyn RingerActuator>,
        bus: EventBusRef,
    ) -> Self {
        Self {
            registry: GeofenceRegistry::with_config(config.region),
            state: Mutex::new(RingerStateMachine::new()),
            places: Mutex::new(Vec::new()),
            enabled: AtomicBool::new(config.enabled),
            policy: config.actuation_failure_policy,
            registrar,
            actuator,
            bus,
        }
    }

    /// Replace the tracked place list and synchronize the region set.
    ///
    /// While monitoring is disabled the list is stored and registration is
    /// deferred until [`set_enabled`](Self::set_enabled) turns monitoring
    /// back on. On a registration failure nothing is committed; calling
    /// again with the same list retries the identical delta.
    pub fn on_places_changed(&self, places: Vec<Place>) -> Result<RegistryDelta, RegistrationError> {
        *self.places.lock().expect("place list mutex poisoned") = places.clone();

        if !self.is_enabled() {
            tracing::debug!(count = places.len(), "monitoring disabled, deferring registration");
            return Ok(RegistryDelta::default());
        }

        self.sync_regions(&places)
    }

    /// Process one transition event end to end: evaluate, apply, actuate,
    /// notify.
    pub fn on_transition(&self, event: TransitionEvent) -> TransitionOutcome {
        let directive = evaluate(&event);

        if let Some(anomaly) = directive.anomaly {
            tracing::warn!(region = %directive.region_id, ?anomaly, "transition ignored");
            self.emit(
                event_names::TRANSITION_IGNORED,
                &TransitionIgnoredEvent {
                    region_id: directive.region_id.clone(),
                    anomaly,
                    timestamp_ms: now_ms(),
                },
            );
        }

        // Held across apply and actuation: concurrent events must not
        // interleave between deciding a change and performing it.
        let mut state = self.state.lock().expect("ringer state mutex poisoned");
        let previous_mode = state.current_mode();
        let previous_region = state.last_applied_region().map(str::to_string);

        let result = state.apply(&directive);
        if !result.changed {
            return TransitionOutcome {
                directive,
                changed: false,
                effective_mode: result.effective_mode,
                actuation_error: None,
            };
        }

        match self.actuator.set_ringer_mode(result.effective_mode) {
            Ok(()) => {
                tracing::info!(
                    mode = %result.effective_mode,
                    region = %directive.region_id,
                    "ringer mode changed"
                );
                self.notify_changed(result.effective_mode, &directive.region_id);
                TransitionOutcome {
                    directive,
                    changed: true,
                    effective_mode: result.effective_mode,
                    actuation_error: None,
                }
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    mode = %result.effective_mode,
                    region = %directive.region_id,
                    "ringer actuation failed"
                );
                match self.policy {
                    ActuationFailurePolicy::KeepIntended => {
                        // The tracked mode stuck even though the device
                        // did not follow; notify as usual.
                        self.notify_changed(result.effective_mode, &directive.region_id);
                    }
                    ActuationFailurePolicy::RollBack => {
                        state.rollback(previous_mode, previous_region);
                    }
                }
                TransitionOutcome {
                    directive,
                    changed: true,
                    effective_mode: result.effective_mode,
                    actuation_error: Some(err),
                }
            }
        }
    }

    /// Turn geofence monitoring on or off.
    ///
    /// Disabling unregisters every region but keeps the place list, so
    /// re-enabling restores the monitored set from it. The flag only flips
    /// once the registrar accepted the change.
    pub fn set_enabled(&self, enabled: bool) -> Result<RegistryDelta, RegistrationError> {
        if self.enabled.load(Ordering::SeqCst) == enabled {
            return Ok(RegistryDelta::default());
        }

        let result = if enabled {
            let places = self.places.lock().expect("place list mutex poisoned").clone();
            self.sync_regions(&places)
        } else {
            self.sync_regions(&[])
        };

        if result.is_ok() {
            self.enabled.store(enabled, Ordering::SeqCst);
            tracing::info!(enabled, "monitoring toggled");
        }
        result
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Mode currently tracked by the state machine.
    pub fn current_mode(&self) -> RingerMode {
        self.state
            .lock()
            .expect("ringer state mutex poisoned")
            .current_mode()
    }

    /// Ids of the committed regions, sorted.
    pub fn region_ids(&self) -> Vec<String> {
        self.registry.region_ids()
    }

    fn sync_regions(&self, places: &[Place]) -> Result<RegistryDelta, RegistrationError> {
        let delta = self.registry.reconcile(places);
        if delta.is_empty() {
            return Ok(delta);
        }

        if !delta.to_add.is_empty() {
            self.registrar.register_regions(&delta.to_add)?;
        }
        if !delta.to_remove.is_empty() {
            self.registrar.unregister_regions(&delta.to_remove)?;
        }
        self.registry.commit(&delta);

        tracing::info!(
            added = delta.to_add.len(),
            removed = delta.to_remove.len(),
            total = self.registry.len(),
            "region set synchronized"
        );
        self.emit(
            event_names::REGIONS_CHANGED,
            &RegionsChangedEvent {
                added: delta.to_add.len(),
                removed: delta.to_remove.len(),
                total: self.registry.len(),
                timestamp_ms: now_ms(),
            },
        );
        Ok(delta)
    }

    fn notify_changed(&self, mode: RingerMode, region_id: &str) {
        self.emit(
            event_names::RINGER_CHANGED,
            &RingerChangedEvent {
                mode,
                region_id: region_id.to_string(),
                timestamp_ms: now_ms(),
            },
        );
    }

    fn emit<E: serde::Serialize>(&self, topic: &str, event: &E) {
        match serde_json::to_value(event) {
            Ok(payload) => self.bus.emit(topic, payload),
            Err(err) => tracing::error!(topic, error = %err, "failed to serialize event payload"),
        }
    }
}
