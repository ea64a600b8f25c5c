// =============================================================================
// Shared types used across the CoinPulse sentiment engine
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sentiment observation: a single news article mentioning a single coin.
///
/// Records are immutable inputs. `sentiment` is conventionally in [-1.0, 1.0]
/// (positive = bullish) but is not clamped on ingest; `relevance` is carried
/// through untouched and does not participate in classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRecord {
    /// Instrument identifier, case-sensitive (e.g. "BTC").
    pub symbol: String,
    /// Display name of the instrument (e.g. "Bitcoin").
    pub coin_name: String,
    /// Polarity score for this article's take on the coin.
    pub sentiment: f64,
    /// Publication timestamp (serialised as RFC 3339).
    pub date: DateTime<Utc>,
    /// Model explanation of the score. Opaque to the engine.
    pub explanation: String,
    /// Headline of the source article. Opaque to the engine.
    pub article_title: String,
    /// Publisher name. Opaque to the engine.
    pub source: String,
    /// Relevance weight, reserved for future weighting schemes.
    #[serde(default)]
    pub relevance: f64,
}

/// Discrete trading signal derived from aggregated sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalKind {
    #[serde(rename = "STRONG_BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "STRONG_SELL")]
    StrongSell,
}

impl Default for SignalKind {
    fn default() -> Self {
        Self::Neutral
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrongBuy => write!(f, "STRONG_BUY"),
            Self::Buy => write!(f, "BUY"),
            Self::Neutral => write!(f, "NEUTRAL"),
            Self::Sell => write!(f, "SELL"),
            Self::StrongSell => write!(f, "STRONG_SELL"),
        }
    }
}

/// Summarised signal for one symbol: the output of the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingSignal {
    pub symbol: String,
    pub coin_name: String,
    pub signal: SignalKind,
    /// Confidence in the signal. Non-negative; capped at 1.0 for buy-side
    /// signals, floored at 1.0 for STRONG_SELL (see `signals::classify`).
    pub strength: f64,
    /// Mean sentiment over every record for the symbol.
    pub avg_sentiment: f64,
    /// Mean sentiment over the most recent (at most 5) records.
    pub recent_sentiment: f64,
    /// `recent_sentiment - avg_sentiment`; positive means improving.
    pub trend: f64,
    /// Number of records contributing to this signal. Always >= 1.
    pub mentions: usize,
}
