//! Input sanitizer: untrusted lift fields → finite, non-negative floats
//!
//! Contract: never fails. Anything unparsable, NaN, infinite or negative
//! becomes 0.0. Valid values pass through unchanged (no rounding, no clamp).
//! Parsing reads the longest leading decimal literal and ignores the rest,
//! so "42kg" is 42 and "42,5" is 42.

use lazy_static::lazy_static;
use regex::Regex;
use crate::types::{RawInputs, RawValue, SanitizedInputs};

lazy_static! {
    /// Leading decimal literal: sign, then Infinity or digits/fraction/exponent
    static ref RE_LEADING_FLOAT: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"
    ).unwrap();
}

/// Sanitizer for raw lift inputs
#[derive(Debug, Default, Clone, Copy)]
pub struct InputSanitizer;

impl InputSanitizer {
    /// Create new sanitizer
    pub fn new() -> Self {
        Self
    }

    /// Sanitize one field
    pub fn sanitize(&self, raw: &RawValue) -> f64 {
        match raw {
            RawValue::Number(v) => accept(*v),
            RawValue::Text(s) => sanitize_str(s),
            RawValue::Other(_) => 0.0,
        }
    }

    /// Sanitize every field of a raw input set
    pub fn sanitize_inputs(&self, raw: &RawInputs) -> SanitizedInputs {
        SanitizedInputs {
            snatch: self.sanitize(&raw.snatch),
            clean_jerk: self.sanitize(&raw.clean_jerk),
            back_squat: self.sanitize(&raw.back_squat),
            bodyweight: self.sanitize(&raw.bodyweight),
        }
    }
}

/// Sanitize a string field
pub fn sanitize_str(raw: &str) -> f64 {
    RE_LEADING_FLOAT
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(accept)
        .unwrap_or(0.0)
}

/// Zero for NaN/inf/negative; also folds -0.0 into 0.0
fn accept(v: f64) -> f64 {
    if !v.is_finite() || v <= 0.0 {
        0.0
    } else {
        v
    }
}

// =============================================================================
// TESTS
// =============================================================================
