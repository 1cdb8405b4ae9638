//! Raw and sanitized lift inputs

use serde::{Deserialize, Serialize};

/// One untrusted field: whatever the caller typed, or a JSON number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    /// null, booleans, arrays, objects; sanitized to zero
    Other(serde_json::Value),
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Text(String::new())
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

/// Lift maxima as received; every field may be empty or nonsense
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInputs {
    pub snatch: RawValue,
    pub clean_jerk: RawValue,
    pub back_squat: RawValue,
    /// Only feeds relative strength
    pub bodyweight: RawValue,
}

impl RawInputs {
    /// The three lifts, no bodyweight
    pub fn new(
        snatch: impl Into<RawValue>,
        clean_jerk: impl Into<RawValue>,
        back_squat: impl Into<RawValue>,
    ) -> Self {
        Self {
            snatch: snatch.into(),
            clean_jerk: clean_jerk.into(),
            back_squat: back_squat.into(),
            bodyweight: RawValue::default(),
        }
    }

    pub fn with_bodyweight(mut self, bodyweight: impl Into<RawValue>) -> Self {
        self.bodyweight = bodyweight.into();
        self
    }
}

/// Inputs after sanitizing: each field finite and >= 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedInputs {
    pub snatch: f64,
    pub clean_jerk: f64,
    pub back_squat: f64,
    pub bodyweight: f64,
}
