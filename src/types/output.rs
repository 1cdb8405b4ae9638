//! Composite scoring output

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{Diagnostics, MetricsResult, RelativeStrength, SanitizedInputs};

/// Everything one `compute` call produces while unlocked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Inputs after sanitizing
    pub inputs: SanitizedInputs,
    /// Ratios and projected range
    pub metrics: MetricsResult,
    /// Lifts over bodyweight
    pub relative_strength: RelativeStrength,
    /// Band per lift
    pub diagnostics: Diagnostics,
}

impl ScoreReport {
    /// Create new report
    pub fn new(
        inputs: SanitizedInputs,
        metrics: MetricsResult,
        relative_strength: RelativeStrength,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            inputs,
            metrics,
            relative_strength,
            diagnostics,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let d = &self.diagnostics;
        let m = &self.metrics;
        format!(
            "snatch={:.2}% {} | c&j={:.2}% {} | squat={:.1} {} [{:.1} .. {:.1}]",
            m.efficiency_snatch,
            d.snatch.to_terminal_string(),
            m.efficiency_clean_jerk,
            d.clean_jerk.to_terminal_string(),
            self.inputs.back_squat,
            d.back_squat.to_terminal_string(),
            m.projected_min,
            m.projected_max,
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let d = &self.diagnostics;
        let m = &self.metrics;
        format!(
            "valid={} | eff_snatch={:.2} ({}) | eff_cj={:.2} ({}) | squat={:.1} ({}) | proj_min={:.2} | proj_max={:.2}",
            m.valid,
            m.efficiency_snatch,
            d.snatch.label,
            m.efficiency_clean_jerk,
            d.clean_jerk.label,
            self.inputs.back_squat,
            d.back_squat.label,
            m.projected_min,
            m.projected_max,
        )
    }

    /// Relative strength line, or None without a bodyweight
    pub fn relative_strength_line(&self) -> Option<String> {
        if self.inputs.bodyweight <= 0.0 {
            return None;
        }
        let r = &self.relative_strength;
        Some(format!(
            "relative: snatch={:.2} | c&j={:.2} | squat={:.2} (bw={:.1})",
            r.snatch, r.clean_jerk, r.back_squat, self.inputs.bodyweight
        ))
    }
}
