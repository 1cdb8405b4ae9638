//! Core types for LPO

mod constants;
mod inputs;
mod metrics;
mod diagnostic;
mod reason;
mod state;
mod output;

pub use constants::ConstantSet;
pub use inputs::{RawValue, RawInputs, SanitizedInputs};
pub use metrics::{MetricsResult, RelativeStrength};
pub use diagnostic::{DiagnosticLabel, DiagnosticLevel, Diagnostics, Icon, ColorTag};
pub use reason::GateReason;
pub use state::{GateState, GateStatus};
pub use output::ScoreReport;
