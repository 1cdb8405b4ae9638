//! Access gate: two-state lock around the calibration set
//!
//! State transitions:
//! - LOCKED → UNLOCKED: payload opens under the credential and parses
//! - UNLOCKED → (nothing): first success wins, later attempts are no-ops
//!
//! There is no way back to LOCKED within a session.

use std::sync::{PoisonError, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use crate::core::cipher::{Decryptor, SealedPayload, DEFAULT_PAYLOAD};
use crate::types::{ConstantSet, GateReason, GateState, GateStatus};

/// Passphrase gate over a sealed constant set
pub struct AccessGate {
    /// Sealed payload text
    payload: String,
    /// Decrypt primitive; `None` behaves like a wrong credential
    decryptor: Option<Box<dyn Decryptor>>,
    /// Current state
    state: RwLock<GateState>,
    /// Number of unlock attempts
    attempts: AtomicU64,
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("status", &self.status())
            .field("attempts", &self.attempts())
            .field("has_decryptor", &self.decryptor.is_some())
            .finish()
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(DEFAULT_PAYLOAD)
    }
}

impl AccessGate {
    /// Gate over `payload` using the built-in sealed payload format
    pub fn new(payload: impl Into<String>) -> Self {
        Self::with_decryptor(payload, SealedPayload::new())
    }

    /// Gate with a custom decrypt primitive
    pub fn with_decryptor(payload: impl Into<String>, decryptor: impl Decryptor + 'static) -> Self {
        Self {
            payload: payload.into(),
            decryptor: Some(Box::new(decryptor)),
            state: RwLock::new(GateState::Locked),
            attempts: AtomicU64::new(0),
        }
    }

    /// Gate with no decrypt primitive; every unlock fails
    pub fn without_decryptor(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            decryptor: None,
            state: RwLock::new(GateState::Locked),
            attempts: AtomicU64::new(0),
        }
    }

    /// Try to unlock. True iff the gate is open afterwards.
    ///
    /// Failure detail is logged, never returned.
    pub fn unlock(&self, credential: &str) -> bool {
        let reason = self.try_unlock(credential);
        if reason.is_success() {
            tracing::info!(code = reason.code(), "{}", reason.description());
        } else {
            tracing::warn!(code = reason.code(), "Auth failed: {}", reason.description());
        }
        reason.is_success()
    }

    /// Unlock attempt resolved to its reason code
    pub fn try_unlock(&self, credential: &str) -> GateReason {
        self.attempts.fetch_add(1, Ordering::Relaxed);

        // Held across decrypt so two racing unlocks cannot both write
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if let GateState::Unlocked(_) = *state {
            return GateReason::R101_GATE_ALREADY_UNLOCKED;
        }

        match self.open(credential) {
            Ok(constants) => {
                *state = GateState::Unlocked(constants);
                GateReason::R100_GATE_UNLOCKED
            }
            Err(reason) => reason,
        }
    }

    /// Decrypt and parse without touching state
    fn open(&self, credential: &str) -> Result<ConstantSet, GateReason> {
        let decryptor = self
            .decryptor
            .as_ref()
            .ok_or(GateReason::R102_DECRYPT_UNAVAILABLE)?;

        let plaintext = decryptor.decrypt(&self.payload, credential).map_err(|e| {
            tracing::debug!(error = %e, "decrypt failed");
            GateReason::R103_DECRYPT_FAILED
        })?;
        if plaintext.trim().is_empty() {
            return Err(GateReason::R104_PLAINTEXT_EMPTY);
        }

        ConstantSet::from_json(&plaintext).ok_or(GateReason::R105_CONSTANTS_MALFORMED)
    }

    /// Constants if unlocked
    pub fn constants(&self) -> Option<ConstantSet> {
        self.read_state().constants()
    }

    /// Constants, or R106 while locked
    pub fn require_constants(&self) -> Result<ConstantSet, GateReason> {
        self.constants().ok_or(GateReason::R106_GATE_LOCKED)
    }

    pub fn is_unlocked(&self) -> bool {
        self.status() == GateStatus::Unlocked
    }

    /// Current state without the constants
    pub fn status(&self) -> GateStatus {
        self.read_state().status()
    }

    /// Get attempt count
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    fn read_state(&self) -> GateState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// TESTS
// =============================================================================
