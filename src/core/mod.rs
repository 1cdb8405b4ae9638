//! Core modules for LPO

pub mod sanitizer;
pub mod cipher;
pub mod gate;
pub mod calculator;
pub mod classifier;
pub mod engine;
pub mod api;

pub use sanitizer::{InputSanitizer, sanitize_str};
pub use cipher::{Decryptor, SealedPayload, CipherError, DEFAULT_PAYLOAD};
pub use gate::AccessGate;
pub use calculator::MetricsCalculator;
pub use classifier::{DiagnosticClassifier, band_index, classify_by_range, classify_by_range_with, classify_by_thresholds};
pub use engine::{ScoringEngine, EngineConfig};
pub use api::{create_router, run_server};
