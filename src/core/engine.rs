//! Scoring engine: gate check → sanitize → compute → classify
//!
//! The public surface the CLI and HTTP API drive. `unlock` returns a
//! bool, `compute` returns `None` while the gate is locked. Neither fails.

use crate::core::cipher::DEFAULT_PAYLOAD;
use crate::core::{AccessGate, DiagnosticClassifier, InputSanitizer, MetricsCalculator};
use crate::types::{GateStatus, RawInputs, ScoreReport};

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Sealed calibration payload
    pub payload: String,
    /// Banding tables
    pub classifier: DiagnosticClassifier,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            payload: DEFAULT_PAYLOAD.to_string(),
            classifier: DiagnosticClassifier::new(),
        }
    }
}

impl EngineConfig {
    /// Replace the payload
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }
}

/// Composite scorer
#[derive(Debug)]
pub struct ScoringEngine {
    gate: AccessGate,
    sanitizer: InputSanitizer,
    calculator: MetricsCalculator,
    classifier: DiagnosticClassifier,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ScoringEngine {
    /// Create new engine, locked
    pub fn new(config: EngineConfig) -> Self {
        Self::with_gate(AccessGate::new(config.payload), config.classifier)
    }

    /// Engine around an existing gate; unsorted tables fall back to the defaults
    pub fn with_gate(gate: AccessGate, classifier: DiagnosticClassifier) -> Self {
        let classifier = if classifier.is_valid() {
            classifier
        } else {
            tracing::warn!("banding tables not strictly ascending, using defaults");
            DiagnosticClassifier::new()
        };
        Self {
            gate,
            sanitizer: InputSanitizer::new(),
            calculator: MetricsCalculator::new(),
            classifier,
        }
    }

    /// Attempt to unlock the calibration set
    pub fn unlock(&self, credential: &str) -> bool {
        self.gate.unlock(credential)
    }

    /// Score raw inputs; `None` while locked
    pub fn compute(&self, raw: &RawInputs) -> Option<ScoreReport> {
        let constants = match self.gate.require_constants() {
            Ok(c) => c,
            Err(reason) => {
                tracing::debug!(code = reason.code(), "compute refused");
                return None;
            }
        };

        let inputs = self.sanitizer.sanitize_inputs(raw);
        let metrics = self.calculator.compute(&inputs, &constants);
        let relative = self.calculator.relative_strength(&inputs);
        let diagnostics = self.classifier.diagnose(&inputs, &metrics);

        tracing::debug!(
            valid = metrics.valid,
            snatch = %diagnostics.snatch.label,
            clean_jerk = %diagnostics.clean_jerk.label,
            back_squat = %diagnostics.back_squat.label,
            "computed"
        );

        Some(ScoreReport::new(inputs, metrics, relative, diagnostics))
    }

    pub fn status(&self) -> GateStatus {
        self.gate.status()
    }

    pub fn is_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    /// Get unlock attempt count
    pub fn attempts(&self) -> u64 {
        self.gate.attempts()
    }
}

// =============================================================================
// TESTS
// =============================================================================
