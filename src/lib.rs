// =============================================================================
// CoinPulse — news-sentiment trading signals
// =============================================================================
//
// Turns a batch of per-article sentiment records into one trading signal per
// coin: group by symbol, average the full history and the most recent window,
// and classify the (recent, trend) pair against a threshold table.
//
// The crate is pure compute. Storage and transport live with the caller; the
// engine only ever sees an in-memory slice of records.
// =============================================================================

pub mod analytics;
pub mod error;
pub mod group;
pub mod signals;
pub mod types;
pub mod window;

pub use error::{Result, ValidationError};
pub use signals::{compute_signals, compute_signals_with, ThresholdPolicy};
pub use types::{SentimentRecord, SignalKind, TradingSignal};
pub use window::RecordFilter;
