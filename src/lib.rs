//! LPO: weightlifting efficiency scoring engine
//!
//! Snatch, clean-and-jerk and back-squat maxima go in; efficiency ratios,
//! a projected back-squat range and a banded diagnostic for each come out.
//! The calibration factors behind the projection sit in a sealed payload
//! and are only released by `AccessGate::unlock`.

pub mod core;
pub mod types;

// =============================================================================
// THRESHOLD BANDING - efficiency ratio (lift / back squat, as a fraction)
// =============================================================================

/// Clean-and-jerk ratio bounds: Low | Rising | Ideal | Strong | Limit
pub const CLEAN_JERK_THRESHOLDS: [f64; 4] = [0.75, 0.78, 0.81, 0.85];

/// Snatch ratio bounds: Low | Rising | Ideal | Strong | Limit
pub const SNATCH_THRESHOLDS: [f64; 4] = [0.50, 0.54, 0.56, 0.60];

// =============================================================================
// RANGE BANDING - position of the back squat inside the projected range
// =============================================================================

/// Position cut points inside [projected_min, projected_max]
/// Below 0.30 = Rising, below 0.60 = Ideal, below 0.90 = Strong, else Limit
pub const RANGE_POSITION_CUTS: [f64; 3] = [0.30, 0.60, 0.90];

// =============================================================================
// SEALED PAYLOAD
// =============================================================================

/// SHA-256 iterations applied after the initial salt+passphrase hash
pub const KDF_ROUNDS: u32 = 2048;

/// Prefix tagging the sealed payload format version
pub const PAYLOAD_PREFIX: &str = "LPO1.";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
