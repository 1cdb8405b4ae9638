//! Metrics calculator: sanitized lifts + constants → ratios and projection
//!
//! Pure and total over sanitized inputs. Every division is guarded by a
//! `> 0` check so nothing here produces inf or NaN.

use crate::types::{ConstantSet, MetricsResult, RelativeStrength, SanitizedInputs};

/// Calculator for efficiency ratios and projected range
#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Create new calculator
    pub fn new() -> Self {
        Self
    }

    /// Compute metrics
    pub fn compute(&self, inputs: &SanitizedInputs, constants: &ConstantSet) -> MetricsResult {
        let SanitizedInputs { snatch, clean_jerk, back_squat, .. } = *inputs;

        MetricsResult {
            valid: back_squat > 0.0 && clean_jerk > 0.0 && snatch > 0.0,
            efficiency_snatch: percent_of(snatch, back_squat),
            efficiency_clean_jerk: percent_of(clean_jerk, back_squat),
            projected_min: clean_jerk * constants.min_factor,
            projected_max: clean_jerk * constants.max_factor,
        }
    }

    /// Lifts per unit of bodyweight; zeros without a bodyweight
    pub fn relative_strength(&self, inputs: &SanitizedInputs) -> RelativeStrength {
        let bw = inputs.bodyweight;
        if bw <= 0.0 {
            return RelativeStrength::default();
        }
        RelativeStrength {
            snatch: inputs.snatch / bw,
            clean_jerk: inputs.clean_jerk / bw,
            back_squat: inputs.back_squat / bw,
        }
    }
}

/// `part` as a percentage of `whole`, 0 when whole is 0
fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}

// =============================================================================
// TESTS
// =============================================================================
