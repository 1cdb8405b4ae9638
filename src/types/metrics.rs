//! Computed metrics

use serde::{Deserialize, Serialize};

/// Efficiency ratios and projected back-squat range
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResult {
    /// All three lifts strictly positive
    pub valid: bool,
    /// Snatch as a percentage of back squat
    pub efficiency_snatch: f64,
    /// Clean-and-jerk as a percentage of back squat
    pub efficiency_clean_jerk: f64,
    /// clean_jerk * min_factor
    pub projected_min: f64,
    /// clean_jerk * max_factor
    pub projected_max: f64,
}

/// Each lift divided by bodyweight; zeros when bodyweight is unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeStrength {
    pub snatch: f64,
    pub clean_jerk: f64,
    pub back_squat: f64,
}
