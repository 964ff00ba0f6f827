//! Ringer decision logic: transition evaluation and the mode state machine.
//!
//! Pure domain crate - no channels, no platform calls. [`evaluate`] maps a
//! raw transition event to a directive; [`RingerStateMachine`] applies
//! directives idempotently so the external side effect fires exactly once
//! per real transition.

mod mode;
mod state_machine;
mod transition;

pub use mode::RingerMode;
pub use state_machine::{ApplyResult, RingerStateMachine};
pub use transition::{
    evaluate, Anomaly, RingerAction, RingerDirective, TransitionEvent, TransitionKind,
};
