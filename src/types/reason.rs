//! Reason codes for access gate decisions

use serde::{Deserialize, Serialize};

/// Why an unlock attempt (or a constants read) went the way it did.
/// Logged only; the public `unlock` surfaces nothing beyond a bool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum GateReason {
    // =========================================================================
    // R10x: Success
    // =========================================================================
    /// Payload opened, constants stored
    R100_GATE_UNLOCKED,
    /// Gate was already open, attempt ignored
    R101_GATE_ALREADY_UNLOCKED,

    // =========================================================================
    // R10x: Failure
    // =========================================================================
    /// No decrypt primitive configured
    R102_DECRYPT_UNAVAILABLE,
    /// Decrypt primitive rejected the credential or payload
    R103_DECRYPT_FAILED,
    /// Decrypt succeeded but produced nothing
    R104_PLAINTEXT_EMPTY,
    /// Plaintext is not a valid constant set
    R105_CONSTANTS_MALFORMED,
    /// Constants requested while locked
    R106_GATE_LOCKED,
}

impl GateReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R100_GATE_UNLOCKED => "R100_GATE_UNLOCKED",
            Self::R101_GATE_ALREADY_UNLOCKED => "R101_GATE_ALREADY_UNLOCKED",
            Self::R102_DECRYPT_UNAVAILABLE => "R102_DECRYPT_UNAVAILABLE",
            Self::R103_DECRYPT_FAILED => "R103_DECRYPT_FAILED",
            Self::R104_PLAINTEXT_EMPTY => "R104_PLAINTEXT_EMPTY",
            Self::R105_CONSTANTS_MALFORMED => "R105_CONSTANTS_MALFORMED",
            Self::R106_GATE_LOCKED => "R106_GATE_LOCKED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R100_GATE_UNLOCKED => "Access granted",
            Self::R101_GATE_ALREADY_UNLOCKED => "Already unlocked",
            Self::R102_DECRYPT_UNAVAILABLE => "Decrypt primitive missing",
            Self::R103_DECRYPT_FAILED => "Invalid key",
            Self::R104_PLAINTEXT_EMPTY => "Empty plaintext",
            Self::R105_CONSTANTS_MALFORMED => "Constants malformed",
            Self::R106_GATE_LOCKED => "Gate locked",
        }
    }

    /// Did the gate end up open?
    pub fn is_success(&self) -> bool {
        matches!(self, Self::R100_GATE_UNLOCKED | Self::R101_GATE_ALREADY_UNLOCKED)
    }
}

impl std::fmt::Display for GateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
