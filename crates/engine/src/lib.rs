//! Geofence-driven ringer control engine.
//!
//! Wires the pure domain crates to the platform boundary:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Domain Layer                           │
//! │  hush-geofence - place/region model, registry reconcile     │
//! │  hush-ringer   - transition evaluator, mode state machine   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Application Layer                         │
//! │  service.rs - reconcile → register → commit,                │
//! │               evaluate → apply → actuate → notify           │
//! │  inbox.rs   - bounded queue + single worker thread          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Platform Boundary                         │
//! │  collaborators.rs - RegionRegistrar, RingerActuator traits  │
//! │  hush-events      - EventBus notification contract          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hush_engine::{HushEngine, NullActuator, NullRegistrar};
//! use hush_events::NullEventBus;
//! use hush_geofence::Place;
//! use hush_ringer::TransitionEvent;
//!
//! let engine = HushEngine::new(
//!     Arc::new(NullRegistrar),
//!     Arc::new(NullActuator),
//!     Arc::new(NullEventBus),
//! );
//! let _ = engine.on_places_changed(vec![Place::with_coordinates("home", "Home", 41.39, 2.17)]);
//! let outcome = engine.on_transition(TransitionEvent::enter("home"));
//! assert!(outcome.changed);
//! ```

mod collaborators;
mod config;
mod inbox;
mod service;

pub use collaborators::{
    ActuationError, NullActuator, NullRegistrar, RegionRegistrar, RegistrationError, RingerActuator,
};
pub use config::{ActuationFailurePolicy, EngineConfig};
pub use inbox::{InboxWorker, TransitionInbox, TransitionSender, DEFAULT_INBOX_CAPACITY};
pub use service::{HushEngine, TransitionOutcome};
