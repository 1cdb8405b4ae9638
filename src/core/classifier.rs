//! Diagnostic classifier: numeric ratio → banded label
//!
//! Both banding modes reduce to one step: count how many sorted bounds
//! sit at or below the value, then look the count up in the label table.
//! Bands are closed below and open above, so a value equal to a bound
//! starts the next band up.

use crate::{CLEAN_JERK_THRESHOLDS, RANGE_POSITION_CUTS, SNATCH_THRESHOLDS};
use crate::types::{DiagnosticLabel, Diagnostics, MetricsResult, SanitizedInputs};

/// Index of the band holding `value` among ascending `bounds` (0..=bounds.len())
pub fn band_index(value: f64, bounds: &[f64]) -> usize {
    bounds.partition_point(|&bound| bound <= value)
}

/// Threshold banding over four ascending thresholds
pub fn classify_by_thresholds(ratio: f64, thresholds: &[f64; 4]) -> DiagnosticLabel {
    if !ratio.is_finite() || ratio <= 0.0 {
        return DiagnosticLabel::unavailable();
    }
    DiagnosticLabel::for_band(band_index(ratio, thresholds))
}

/// Range-position banding with the default cut points
pub fn classify_by_range(value: f64, low_bound: f64, high_bound: f64) -> DiagnosticLabel {
    classify_by_range_with(value, low_bound, high_bound, &RANGE_POSITION_CUTS)
}

/// Range-position banding: below `low_bound` is Weak, then position
/// `(value - low) / (high - low)` against `cuts`
pub fn classify_by_range_with(
    value: f64,
    low_bound: f64,
    high_bound: f64,
    cuts: &[f64; 3],
) -> DiagnosticLabel {
    if !value.is_finite() || !low_bound.is_finite() {
        return DiagnosticLabel::unavailable();
    }
    if value <= 0.0 || low_bound <= 0.0 {
        return DiagnosticLabel::unavailable();
    }
    if value < low_bound {
        return DiagnosticLabel::for_band(0);
    }

    // Reversed or unbounded ranges still band by position; an empty
    // span at the low bound (0/0) fails every cut and lands in Limit
    let position = (value - low_bound) / (high_bound - low_bound);
    if position.is_nan() {
        return DiagnosticLabel::for_band(cuts.len() + 1);
    }
    DiagnosticLabel::for_band(1 + band_index(position, cuts))
}

/// Classifier holding the calibration tables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosticClassifier {
    /// Snatch efficiency bounds (fractions)
    pub snatch_thresholds: [f64; 4],
    /// Clean-and-jerk efficiency bounds (fractions)
    pub clean_jerk_thresholds: [f64; 4],
    /// Position cuts inside the projected range
    pub range_cuts: [f64; 3],
}

impl Default for DiagnosticClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticClassifier {
    /// Classifier with the shipped calibration
    pub fn new() -> Self {
        Self {
            snatch_thresholds: SNATCH_THRESHOLDS,
            clean_jerk_thresholds: CLEAN_JERK_THRESHOLDS,
            range_cuts: RANGE_POSITION_CUTS,
        }
    }

    /// Every table strictly ascending, finite and positive
    pub fn is_valid(&self) -> bool {
        ascending(&self.snatch_thresholds)
            && ascending(&self.clean_jerk_thresholds)
            && ascending(&self.range_cuts)
    }

    /// Label all three lifts
    pub fn diagnose(&self, inputs: &SanitizedInputs, metrics: &MetricsResult) -> Diagnostics {
        Diagnostics {
            snatch: classify_by_thresholds(metrics.efficiency_snatch / 100.0, &self.snatch_thresholds),
            clean_jerk: classify_by_thresholds(
                metrics.efficiency_clean_jerk / 100.0,
                &self.clean_jerk_thresholds,
            ),
            back_squat: classify_by_range_with(
                inputs.back_squat,
                metrics.projected_min,
                metrics.projected_max,
                &self.range_cuts,
            ),
        }
    }
}

fn ascending(bounds: &[f64]) -> bool {
    bounds.iter().all(|b| b.is_finite() && *b > 0.0)
        && bounds.windows(2).all(|w| w[0] < w[1])
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorTag, DiagnosticLevel};

    fn level(label: DiagnosticLabel) -> DiagnosticLevel {
        label.label
    }

    #[test]
    fn test_band_index_edges() {
        let bounds = [1.0, 2.0, 3.0];
        assert_eq!(band_index(0.5, &bounds), 0);
        assert_eq!(band_index(1.0, &bounds), 1);
        assert_eq!(band_index(2.999, &bounds), 2);
        assert_eq!(band_index(3.0, &bounds), 3);
        assert_eq!(band_index(100.0, &bounds), 3);
    }

    #[test]
    fn test_clean_jerk_bands() {
        let t = &CLEAN_JERK_THRESHOLDS;
        assert_eq!(level(classify_by_thresholds(0.70, t)), DiagnosticLevel::Weak);
        assert_eq!(level(classify_by_thresholds(0.76, t)), DiagnosticLevel::Rising);
        assert_eq!(level(classify_by_thresholds(0.80, t)), DiagnosticLevel::Ideal);
        assert_eq!(level(classify_by_thresholds(0.83, t)), DiagnosticLevel::Strong);
        assert_eq!(level(classify_by_thresholds(0.875, t)), DiagnosticLevel::Limit);
    }

    #[test]
    fn test_threshold_exact_bound_moves_up() {
        let t = &CLEAN_JERK_THRESHOLDS;
        assert_eq!(level(classify_by_thresholds(0.75, t)), DiagnosticLevel::Rising);
        assert_eq!(level(classify_by_thresholds(0.85, t)), DiagnosticLevel::Limit);
    }

    #[test]
    fn test_snatch_bands() {
        let t = &SNATCH_THRESHOLDS;
        assert_eq!(level(classify_by_thresholds(0.45, t)), DiagnosticLevel::Weak);
        assert_eq!(level(classify_by_thresholds(0.52, t)), DiagnosticLevel::Rising);
        assert_eq!(level(classify_by_thresholds(0.55, t)), DiagnosticLevel::Ideal);
        assert_eq!(level(classify_by_thresholds(0.58, t)), DiagnosticLevel::Strong);
        assert_eq!(level(classify_by_thresholds(0.6875, t)), DiagnosticLevel::Limit);
    }

    #[test]
    fn test_threshold_unavailable() {
        let t = &SNATCH_THRESHOLDS;
        assert_eq!(classify_by_thresholds(0.0, t), DiagnosticLabel::unavailable());
        assert_eq!(classify_by_thresholds(-0.3, t), DiagnosticLabel::unavailable());
        assert_eq!(classify_by_thresholds(f64::NAN, t), DiagnosticLabel::unavailable());
        assert_eq!(classify_by_thresholds(f64::INFINITY, t), DiagnosticLabel::unavailable());
    }

    #[test]
    fn test_range_below_low_is_weak_green() {
        let label = classify_by_range(160.0, 176.5064, 194.6);
        assert_eq!(label.label, DiagnosticLevel::Weak);
        assert_eq!(label.color_tag, ColorTag::Green);
    }

    #[test]
    fn test_range_positions() {
        // span 100 makes position = (value - 100) / 100
        assert_eq!(level(classify_by_range(100.0, 100.0, 200.0)), DiagnosticLevel::Rising);
        assert_eq!(level(classify_by_range(129.0, 100.0, 200.0)), DiagnosticLevel::Rising);
        assert_eq!(level(classify_by_range(145.0, 100.0, 200.0)), DiagnosticLevel::Ideal);
        assert_eq!(level(classify_by_range(175.0, 100.0, 200.0)), DiagnosticLevel::Strong);
        assert_eq!(level(classify_by_range(195.0, 100.0, 200.0)), DiagnosticLevel::Limit);
        assert_eq!(level(classify_by_range(250.0, 100.0, 200.0)), DiagnosticLevel::Limit);
    }

    #[test]
    fn test_range_cut_points_move_up() {
        // position 0.5 / 0.75 are exact in binary
        assert_eq!(level(classify_by_range_with(3.0, 2.0, 4.0, &[0.25, 0.5, 0.75])), DiagnosticLevel::Strong);
        assert_eq!(level(classify_by_range_with(3.5, 2.0, 4.0, &[0.25, 0.5, 0.75])), DiagnosticLevel::Limit);
    }

    #[test]
    fn test_range_unavailable() {
        assert_eq!(classify_by_range(0.0, 100.0, 200.0), DiagnosticLabel::unavailable());
        assert_eq!(classify_by_range(150.0, 0.0, 0.0), DiagnosticLabel::unavailable());
        assert_eq!(classify_by_range(f64::NAN, 100.0, 200.0), DiagnosticLabel::unavailable());
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(level(classify_by_range(100.0, 100.0, 100.0)), DiagnosticLevel::Limit);
        assert_eq!(level(classify_by_range(99.0, 100.0, 100.0)), DiagnosticLevel::Weak);
        assert_eq!(level(classify_by_range(101.0, 100.0, 100.0)), DiagnosticLevel::Limit);
    }

    #[test]
    fn test_reversed_range_bands_negative_position() {
        // position = (250 - 200) / (100 - 200) = -0.5
        assert_eq!(level(classify_by_range(250.0, 200.0, 100.0)), DiagnosticLevel::Rising);
        assert_eq!(level(classify_by_range(200.0, 200.0, 100.0)), DiagnosticLevel::Rising);
        assert_eq!(level(classify_by_range(150.0, 200.0, 100.0)), DiagnosticLevel::Weak);
    }

    #[test]
    fn test_unbounded_high_is_rising() {
        assert_eq!(level(classify_by_range(150.0, 100.0, f64::INFINITY)), DiagnosticLevel::Rising);
        assert_eq!(level(classify_by_range(150.0, 100.0, f64::NAN)), DiagnosticLevel::Limit);
    }

    #[test]
    fn test_diagnose_reference_athlete() {
        let inputs = SanitizedInputs { snatch: 110.0, clean_jerk: 140.0, back_squat: 160.0, bodyweight: 0.0 };
        let metrics = MetricsResult {
            valid: true,
            efficiency_snatch: 68.75,
            efficiency_clean_jerk: 87.5,
            projected_min: 176.5064,
            projected_max: 194.6,
        };
        let d = DiagnosticClassifier::new().diagnose(&inputs, &metrics);
        assert_eq!(d.snatch.label, DiagnosticLevel::Limit);
        assert_eq!(d.clean_jerk.label, DiagnosticLevel::Limit);
        assert_eq!(d.back_squat.label, DiagnosticLevel::Weak);
    }

    #[test]
    fn test_default_tables_valid() {
        assert!(DiagnosticClassifier::new().is_valid());
        let mut broken = DiagnosticClassifier::new();
        broken.snatch_thresholds = [0.6, 0.5, 0.7, 0.8];
        assert!(!broken.is_valid());
    }
}
