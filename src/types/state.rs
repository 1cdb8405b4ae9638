//! Access gate state definitions

use serde::{Deserialize, Serialize};
use crate::types::ConstantSet;

/// Gate state. Unlocked always carries its constants.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GateState {
    /// Initial state, constants sealed
    #[default]
    Locked,
    /// Payload opened for the rest of the session
    Unlocked(ConstantSet),
}

impl GateState {
    pub fn constants(&self) -> Option<ConstantSet> {
        match self {
            GateState::Locked => None,
            GateState::Unlocked(set) => Some(*set),
        }
    }

    /// State without the constants, safe to report
    pub fn status(&self) -> GateStatus {
        match self {
            GateState::Locked => GateStatus::Locked,
            GateState::Unlocked(_) => GateStatus::Unlocked,
        }
    }
}

/// Public view of the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateStatus {
    Locked,
    Unlocked,
}

impl GateStatus {
    /// Get emoji for state
    pub fn emoji(&self) -> &'static str {
        match self {
            GateStatus::Locked => "🔒",
            GateStatus::Unlocked => "🔓",
        }
    }
}

impl std::fmt::Display for GateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GateStatus::Locked => "LOCKED",
            GateStatus::Unlocked => "UNLOCKED",
        };
        write!(f, "{}", name)
    }
}
