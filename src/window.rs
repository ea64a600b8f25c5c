// =============================================================================
// Record window filter — time-window and allow-list pre-filtering
// =============================================================================
//
// Pure in-memory counterpart of the query parameters the ingest layer accepts:
// a days-back window, an hours-back window (hours takes priority over days),
// and an optional comma-separated symbol allow-list. Symbols are
// case-sensitive, so the allow-list is matched verbatim.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::SentimentRecord;

/// Look-back window applied when neither `days` nor `hours` is set.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Selection criteria for a batch of sentiment records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Keep records at most this many days old.
    #[serde(default)]
    pub days: Option<u32>,

    /// Keep records at most this many hours old. Takes priority over `days`.
    #[serde(default)]
    pub hours: Option<u32>,

    /// When set, keep only records whose symbol appears here (exact match).
    #[serde(default)]
    pub symbols: Option<Vec<String>>,
}

impl RecordFilter {
    /// Parse a comma-separated allow-list ("BTC, ETH,") into clean entries.
    ///
    /// Entries are trimmed and empties dropped; case is preserved.
    pub fn parse_symbols(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// The effective look-back duration. Hours beat days; neither set falls
    /// back to [`DEFAULT_WINDOW_DAYS`].
    pub fn window(&self) -> Duration {
        if let Some(hours) = self.hours {
            Duration::hours(i64::from(hours))
        } else {
            Duration::days(i64::from(self.days.unwrap_or(DEFAULT_WINDOW_DAYS)))
        }
    }

    /// Return the records inside the window (and allow-list, if any),
    /// measured backwards from `now`. Input order is preserved.
    pub fn apply(&self, records: &[SentimentRecord], now: DateTime<Utc>) -> Vec<SentimentRecord> {
        let cutoff = now - self.window();

        let kept: Vec<SentimentRecord> = records
            .iter()
            .filter(|r| r.date >= cutoff)
            .filter(|r| match &self.symbols {
                Some(allowed) => allowed.iter().any(|s| s == &r.symbol),
                None => true,
            })
            .cloned()
            .collect();

        debug!(
            total = records.len(),
            kept = kept.len(),
            cutoff = %cutoff,
            "record filter applied"
        );
        kept
    }
}
