// =============================================================================
// Signals Module
// =============================================================================
//
// Signal derivation pipeline for the sentiment engine:
// - Threshold classification over (recent_sentiment, trend)
// - Per-symbol aggregation (grouping, recency window, averaging)

pub mod classify;
pub mod engine;

pub use classify::ThresholdPolicy;
pub use engine::{compute_signals, compute_signals_with, RECENT_WINDOW};
