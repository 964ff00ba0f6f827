//! Ringer mode definitions.

use serde::{Deserialize, Serialize};

/// Device ringer mode as tracked by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RingerMode {
    /// Ringer muted while inside a monitored region.
    Silent,

    /// Ringer audible.
    Normal,

    /// The device mode has not been observed yet.
    #[default]
    Unknown,
}

impl RingerMode {
    /// Returns a human-readable label for the mode.
    pub fn label(&self) -> &'static str {
        match self {
            RingerMode::Silent => "Silent",
            RingerMode::Normal => "Normal",
            RingerMode::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for RingerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
