// =============================================================================
// Signal classification — threshold table over (recent_sentiment, trend)
// =============================================================================
//
// The classification policy is a standalone value so the thresholds can be
// tuned and tested without touching grouping or averaging.
//
// Branches are checked in priority order; the first match wins and NEUTRAL is
// the catch-all, so exactly one signal is produced for any finite input pair.

use serde::{Deserialize, Serialize};

use crate::types::SignalKind;

/// Threshold table driving the signal decision.
///
/// `Default` carries the production thresholds. All comparisons are strict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    /// Recent sentiment above this (with a rising trend) is a STRONG_BUY.
    pub strong_buy_recent: f64,
    /// Minimum trend required alongside `strong_buy_recent`.
    pub strong_buy_trend: f64,
    /// Recent sentiment above this is a BUY.
    pub buy_recent: f64,
    /// Recent sentiment below this (with a falling trend) is a STRONG_SELL.
    pub strong_sell_recent: f64,
    /// Maximum trend allowed alongside `strong_sell_recent`.
    pub strong_sell_trend: f64,
    /// Recent sentiment below this is a SELL.
    pub sell_recent: f64,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            strong_buy_recent: 0.3,
            strong_buy_trend: 0.1,
            buy_recent: 0.1,
            strong_sell_recent: -0.3,
            strong_sell_trend: -0.1,
            sell_recent: -0.1,
        }
    }
}

impl ThresholdPolicy {
    /// Classify one symbol's `(recent_sentiment, trend)` pair into a signal
    /// kind and a confidence strength.
    ///
    /// Strength rules:
    /// - STRONG_BUY:  `min(1.0, recent + trend)` — capped at 1.0.
    /// - BUY:         `recent`.
    /// - STRONG_SELL: `abs(min(-1.0, recent + trend))` — the sum is floored
    ///   at -1.0 before taking the magnitude, so the strength is >= 1.0
    ///   whenever this branch fires. Not a cap; do not change without
    ///   breaking downstream consumers that rely on the historical values.
    /// - SELL:        `abs(recent)`.
    /// - NEUTRAL:     0.0.
    pub fn classify(&self, recent_sentiment: f64, trend: f64) -> (SignalKind, f64) {
        if recent_sentiment > self.strong_buy_recent && trend > self.strong_buy_trend {
            (SignalKind::StrongBuy, (recent_sentiment + trend).min(1.0))
        } else if recent_sentiment > self.buy_recent {
            (SignalKind::Buy, recent_sentiment)
        } else if recent_sentiment < self.strong_sell_recent && trend < self.strong_sell_trend {
            (SignalKind::StrongSell, (recent_sentiment + trend).min(-1.0).abs())
        } else if recent_sentiment < self.sell_recent {
            (SignalKind::Sell, recent_sentiment.abs())
        } else {
            (SignalKind::Neutral, 0.0)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn classify(recent: f64, trend: f64) -> (SignalKind, f64) {
        ThresholdPolicy::default().classify(recent, trend)
    }

    // ---- branch selection --------------------------------------------------

    #[test]
    fn strong_buy_requires_both_thresholds() {
        let (kind, strength) = classify(0.5, 0.2);
        assert_eq!(kind, SignalKind::StrongBuy);
        assert!((strength - 0.7).abs() < 1e-12);
    }

    #[test]
    fn high_recent_with_flat_trend_is_plain_buy() {
        // recent > 0.3 but trend <= 0.1 falls through to BUY.
        let (kind, strength) = classify(0.5, 0.0);
        assert_eq!(kind, SignalKind::Buy);
        assert!((strength - 0.5).abs() < 1e-12);
    }

    #[test]
    fn strong_sell_requires_both_thresholds() {
        let (kind, _) = classify(-0.5, -0.2);
        assert_eq!(kind, SignalKind::StrongSell);
    }

    #[test]
    fn low_recent_with_flat_trend_is_plain_sell() {
        let (kind, strength) = classify(-0.5, 0.0);
        assert_eq!(kind, SignalKind::Sell);
        assert!((strength - 0.5).abs() < 1e-12);
    }

    #[test]
    fn neutral_band_yields_zero_strength() {
        for &recent in &[-0.1, -0.05, 0.0, 0.05, 0.1] {
            let (kind, strength) = classify(recent, 0.0);
            assert_eq!(kind, SignalKind::Neutral, "recent={recent}");
            assert_eq!(strength, 0.0);
        }
    }

    #[test]
    fn thresholds_are_strict() {
        // Exactly at each boundary the branch must not fire.
        assert_eq!(classify(0.3, 0.5).0, SignalKind::Buy); // recent == 0.3
        assert_eq!(classify(0.5, 0.1).0, SignalKind::Buy); // trend == 0.1
        assert_eq!(classify(-0.3, -0.5).0, SignalKind::Sell); // recent == -0.3
        assert_eq!(classify(-0.5, -0.1).0, SignalKind::Sell); // trend == -0.1
        assert_eq!(classify(0.1, 0.0).0, SignalKind::Neutral);
        assert_eq!(classify(-0.1, 0.0).0, SignalKind::Neutral);
    }

    // ---- strength formulas -------------------------------------------------

    #[test]
    fn strong_buy_strength_caps_at_one() {
        let (kind, strength) = classify(0.9, 0.5);
        assert_eq!(kind, SignalKind::StrongBuy);
        assert_eq!(strength, 1.0);
    }

    #[test]
    fn strong_sell_strength_floors_at_one() {
        // The sell-side formula floors the sum at -1.0 before abs(), so the
        // strength is at least 1.0 whenever the branch fires — and exceeds
        // 1.0 when the raw sum is below -1.0. Pinned deliberately.
        let (kind, strength) = classify(-0.4, -0.2);
        assert_eq!(kind, SignalKind::StrongSell);
        assert_eq!(strength, 1.0); // -0.6 floored to -1.0

        let (kind, strength) = classify(-0.9, -0.5);
        assert_eq!(kind, SignalKind::StrongSell);
        assert!((strength - 1.4).abs() < 1e-12); // -1.4 already below the floor
    }

    #[test]
    fn sell_strength_is_recent_magnitude() {
        let (kind, strength) = classify(-0.25, 0.0);
        assert_eq!(kind, SignalKind::Sell);
        assert!((strength - 0.25).abs() < 1e-12);
    }

    // ---- totality ----------------------------------------------------------

    #[test]
    fn classification_is_total_over_a_grid() {
        let policy = ThresholdPolicy::default();
        let mut recent = -1.0;
        while recent <= 1.0 {
            let mut trend = -1.0;
            while trend <= 1.0 {
                // Must not panic and must return a non-negative strength.
                let (_, strength) = policy.classify(recent, trend);
                assert!(strength >= 0.0, "recent={recent} trend={trend}");
                trend += 0.05;
            }
            recent += 0.05;
        }
    }

    #[test]
    fn custom_policy_shifts_boundaries() {
        let policy = ThresholdPolicy {
            buy_recent: 0.5,
            ..ThresholdPolicy::default()
        };
        assert_eq!(policy.classify(0.3, 0.0).0, SignalKind::Neutral);
        assert_eq!(policy.classify(0.6, 0.0).0, SignalKind::Buy);
    }
}
