//! Calibration factors released by the access gate

use serde::{Deserialize, Serialize};

/// Multipliers projecting the back-squat range from the clean-and-jerk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantSet {
    /// Lower projection factor
    #[serde(alias = "min", alias = "a")]
    pub min_factor: f64,
    /// Upper projection factor
    #[serde(alias = "max", alias = "b")]
    pub max_factor: f64,
}

impl ConstantSet {
    /// Build a set, rejecting anything that breaks `0 < min < max`
    pub fn new(min_factor: f64, max_factor: f64) -> Option<Self> {
        let set = Self { min_factor, max_factor };
        set.is_valid().then_some(set)
    }

    /// Both factors finite and positive, and max strictly above min
    pub fn is_valid(&self) -> bool {
        self.min_factor.is_finite()
            && self.max_factor.is_finite()
            && self.min_factor > 0.0
            && self.max_factor > self.min_factor
    }

    /// Parse decrypted plaintext; `None` for bad JSON or a broken invariant
    pub fn from_json(text: &str) -> Option<Self> {
        let set: Self = serde_json::from_str(text.trim()).ok()?;
        set.is_valid().then_some(set)
    }

    /// Serialize for sealing
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
