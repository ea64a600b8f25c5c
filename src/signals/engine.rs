// =============================================================================
// Signal Engine — per-symbol aggregation of sentiment records
// =============================================================================
//
// Stateless batch transform: group records by symbol, average the full group
// and the most recent window, then run the threshold table over the pair
// (recent_sentiment, trend).
//
// Step 1 — Validate every record (empty symbol / non-finite sentiment abort
//          the whole call).
// Step 2 — Group by symbol, preserving input order inside each group.
// Step 3 — Stable-sort each group by date descending; ties keep their input
//          order, so the recent-window pick is deterministic.
// Step 4 — avg_sentiment over the group, recent_sentiment over the first
//          min(5, len) sorted records, trend = recent - avg.
// Step 5 — Classify via ThresholdPolicy.
// =============================================================================

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::group::group_reduce;
use crate::signals::classify::ThresholdPolicy;
use crate::types::{SentimentRecord, TradingSignal};

/// Number of most-recent records contributing to `recent_sentiment`.
pub const RECENT_WINDOW: usize = 5;

/// Derive one [`TradingSignal`] per distinct symbol using the default
/// threshold policy.
///
/// Pure and deterministic: the same input sequence (including order) always
/// produces bit-identical output. An empty input yields an empty map.
///
/// # Errors
/// [`ValidationError`] if any record has an empty `symbol` or a non-finite
/// `sentiment`. The whole call fails; no partial output is produced.
pub fn compute_signals(records: &[SentimentRecord]) -> Result<HashMap<String, TradingSignal>> {
    compute_signals_with(records, &ThresholdPolicy::default())
}

/// [`compute_signals`] with a caller-supplied threshold table.
pub fn compute_signals_with(
    records: &[SentimentRecord],
    policy: &ThresholdPolicy,
) -> Result<HashMap<String, TradingSignal>> {
    validate(records)?;

    let signals = group_reduce(
        records.iter(),
        |record| record.symbol.clone(),
        |symbol, group| summarise_group(symbol.as_str(), group, policy),
    );

    debug!(
        records = records.len(),
        symbols = signals.len(),
        "signal computation complete"
    );
    Ok(signals)
}

/// Check every record before any aggregation work.
fn validate(records: &[SentimentRecord]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        if record.symbol.is_empty() {
            return Err(ValidationError::EmptySymbol { index });
        }
        if !record.sentiment.is_finite() {
            return Err(ValidationError::NonFiniteSentiment {
                index,
                value: record.sentiment,
            });
        }
    }
    Ok(())
}

/// Reduce one symbol's records (in input order) to its trading signal.
fn summarise_group(
    symbol: &str,
    mut group: Vec<&SentimentRecord>,
    policy: &ThresholdPolicy,
) -> TradingSignal {
    // Stable sort keeps the input order of equal dates.
    group.sort_by(|a, b| b.date.cmp(&a.date));

    let mentions = group.len();
    let avg_sentiment =
        group.iter().map(|r| r.sentiment).sum::<f64>() / mentions as f64;

    let window = RECENT_WINDOW.min(mentions);
    let recent_sentiment =
        group[..window].iter().map(|r| r.sentiment).sum::<f64>() / window as f64;

    let trend = recent_sentiment - avg_sentiment;
    let (signal, strength) = policy.classify(recent_sentiment, trend);

    debug!(
        symbol = %symbol,
        %signal,
        strength = format!("{strength:.3}"),
        mentions,
        "symbol summarised"
    );

    TradingSignal {
        symbol: symbol.to_string(),
        coin_name: group[0].coin_name.clone(),
        signal,
        strength,
        avg_sentiment,
        recent_sentiment,
        trend,
        mentions,
    }
}
