//! Ringer state machine with idempotency guard.

use crate::mode::RingerMode;
use crate::transition::{RingerAction, RingerDirective};

/// Result of applying one directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyResult {
    /// True when the tracked mode actually changed and the caller should
    /// invoke the ringer actuator and notify, exactly once.
    pub changed: bool,
    /// Mode tracked after the apply.
    pub effective_mode: RingerMode,
}

/// Tracks the last-applied ringer mode for the life of the process.
///
/// Starts at [`RingerMode::Unknown`] and only changes through a validated
/// directive. Repeated identical directives are suppressed; conflicting
/// directives from different regions resolve as last valid one wins, since
/// the device has at most one ringer mode.
#[derive(Debug, Default)]
pub struct RingerStateMachine {
    current_mode: RingerMode,
    last_applied_region: Option<String>,
}

impl RingerStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_mode(&self) -> RingerMode {
        self.current_mode
    }

    /// Region that caused the last real mode change, if any.
    pub fn last_applied_region(&self) -> Option<&str> {
        self.last_applied_region.as_deref()
    }

    /// Apply a directive, suppressing redundant transitions.
    pub fn apply(&mut self, directive: &RingerDirective) -> ApplyResult {
        let target = match directive.action {
            RingerAction::Silence => RingerMode::Silent,
            RingerAction::Restore => RingerMode::Normal,
            RingerAction::Ignore => {
                return ApplyResult {
                    changed: false,
                    effective_mode: self.current_mode,
                };
            }
        };

        if target == self.current_mode {
            tracing::debug!(
                region = %directive.region_id,
                mode = %target,
                "duplicate directive suppressed"
            );
            return ApplyResult {
                changed: false,
                effective_mode: self.current_mode,
            };
        }

        self.current_mode = target;
        self.last_applied_region = Some(directive.region_id.clone());
        ApplyResult {
            changed: true,
            effective_mode: target,
        }
    }

    /// Revert to a previously observed state after a failed actuation.
    pub fn rollback(&mut self, mode: RingerMode, region: Option<String>) {
        self.current_mode = mode;
        self.last_applied_region = region;
    }
}
