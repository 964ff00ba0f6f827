//! Event bus abstraction for decoupled notification delivery.
//!
//! The engine announces ringer and region changes without knowing who
//! listens. Host shells implement [`EventBus`] on top of their own
//! notification system; tests use [`InMemoryEventBus`] to assert on what
//! was emitted.

use std::sync::{Arc, Mutex};

/// Trait for emitting events to subscribers.
pub trait EventBus: Send + Sync {
    /// Emit an event on a topic with a JSON payload.
    ///
    /// # Arguments
    /// * `topic` - Event name (e.g., "ringer:changed")
    /// * `payload` - JSON payload to emit
    fn emit(&self, topic: &str, payload: serde_json::Value);
}

/// Shared event bus handle.
pub type EventBusRef = Arc<dyn EventBus>;

/// A captured event from [`InMemoryEventBus`].
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub topic: String,
    pub payload: serde_json::Value,
}

/// In-memory event bus that records every emission for later inspection.
#[derive(Default)]
pub struct InMemoryEventBus {
    recorded: Mutex<Vec<RecordedEvent>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured events, in emission order.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.recorded
            .lock()
            .expect("event log mutex poisoned")
            .clone()
    }

    /// Captured events for one topic.
    pub fn events_for(&self, topic: &str) -> Vec<RecordedEvent> {
        self.recorded
            .lock()
            .expect("event log mutex poisoned")
            .iter()
            .filter(|event| event.topic == topic)
            .cloned()
            .collect()
    }

    /// Number of captured events.
    pub fn len(&self) -> usize {
        self.recorded.lock().expect("event log mutex poisoned").len()
    }

    /// Check if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.recorded
            .lock()
            .expect("event log mutex poisoned")
            .is_empty()
    }
}

impl EventBus for InMemoryEventBus {
    fn emit(&self, topic: &str, payload: serde_json::Value) {
        self.recorded
            .lock()
            .expect("event log mutex poisoned")
            .push(RecordedEvent {
                topic: topic.to_string(),
                payload,
            });
    }
}

/// Event bus that discards everything.
///
/// For headless runs where nobody listens.
pub struct NullEventBus;

impl EventBus for NullEventBus {
    fn emit(&self, _topic: &str, _payload: serde_json::Value) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_in_memory_bus_records_in_order() {
        let bus = InMemoryEventBus::new();

        bus.emit("ringer:changed", json!({"mode": "silent"}));
        bus.emit("geofence:regions_changed", json!({"added": 2}));
        bus.emit("ringer:changed", json!({"mode": "normal"}));

        assert_eq!(bus.len(), 3);
        let changes = bus.events_for("ringer:changed");
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].payload["mode"], "silent");
        assert_eq!(changes[1].payload["mode"], "normal");
    }

    #[test]
    fn test_in_memory_bus_starts_empty() {
        let bus = InMemoryEventBus::new();
        assert!(bus.is_empty());
        assert!(bus.events_for("ringer:changed").is_empty());
    }

    #[test]
    fn test_null_bus_discards() {
        let bus = NullEventBus;
        bus.emit("ringer:changed", json!({"mode": "silent"}));
    }
}
