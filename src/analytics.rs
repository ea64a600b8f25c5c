// =============================================================================
// Batch analytics — dataset-level aggregates over sentiment records
// =============================================================================
//
// Pure aggregations consumed by dashboards downstream of the engine:
// batch summary counts, per-symbol dispersion (scatter), hourly sentiment
// trend buckets, per-symbol box statistics, coin-by-day heatmap cells, and
// mention-count ranking.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::group::group_by;
use crate::types::SentimentRecord;

/// First and last record timestamps in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Headline counts for a batch of records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_records: usize,
    pub unique_coins: usize,
    /// `None` for an empty batch.
    pub date_range: Option<DateRange>,
}

/// Per-symbol mention/dispersion point for scatter plots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub symbol: String,
    pub coin_name: String,
    pub mentions: usize,
    pub avg_sentiment: f64,
    /// Population standard deviation of the symbol's sentiment values.
    pub sentiment_std: f64,
}

/// Mean sentiment for one hour-aligned bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub timestamp: DateTime<Utc>,
    pub sentiment: f64,
}

/// Five-number box statistics for one symbol's sentiment values.
///
/// Quartiles are picked by index on the ascending-sorted values:
/// `q1 = sorted[floor(n * 0.25)]`, `median = sorted[floor(n * 0.5)]`,
/// `q3 = sorted[floor(n * 0.75)]`. No interpolation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionStats {
    pub symbol: String,
    pub coin_name: String,
    pub avg_sentiment: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Mean sentiment for one symbol on one UTC calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub symbol: String,
    pub date: NaiveDate,
    pub sentiment: f64,
}

/// Summarise a batch: record count, distinct symbols, and date span.
pub fn summarise(records: &[SentimentRecord]) -> BatchSummary {
    let unique_coins = records
        .iter()
        .map(|r| r.symbol.as_str())
        .collect::<HashSet<_>>()
        .len();

    let date_range = match (
        records.iter().map(|r| r.date).min(),
        records.iter().map(|r| r.date).max(),
    ) {
        (Some(start), Some(end)) => Some(DateRange { start, end }),
        _ => None,
    };

    BatchSummary {
        total_records: records.len(),
        unique_coins,
        date_range,
    }
}

/// One scatter point per distinct symbol, sorted by symbol for stable output.
pub fn scatter_points(records: &[SentimentRecord]) -> Vec<ScatterPoint> {
    let mut points: Vec<ScatterPoint> = group_by(records.iter(), |r| r.symbol.as_str())
        .into_iter()
        .map(|(symbol, group)| {
            let mentions = group.len();
            let mean = group.iter().map(|r| r.sentiment).sum::<f64>() / mentions as f64;
            let variance = group
                .iter()
                .map(|r| (r.sentiment - mean).powi(2))
                .sum::<f64>()
                / mentions as f64;

            ScatterPoint {
                symbol: symbol.to_string(),
                coin_name: group[0].coin_name.clone(),
                mentions,
                avg_sentiment: mean,
                sentiment_std: variance.sqrt(),
            }
        })
        .collect();

    points.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    points
}

/// Bucket records to the hour and average sentiment per bucket, ascending.
pub fn hourly_trend(records: &[SentimentRecord]) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for record in records {
        let ts = record.date.timestamp();
        let bucket = ts - ts.rem_euclid(3600);
        buckets.entry(bucket).or_default().push(record.sentiment);
    }

    buckets
        .into_iter()
        .filter_map(|(bucket, sentiments)| {
            let timestamp = DateTime::<Utc>::from_timestamp(bucket, 0)?;
            let mean = sentiments.iter().sum::<f64>() / sentiments.len() as f64;
            Some(TrendPoint {
                timestamp,
                sentiment: mean,
            })
        })
        .collect()
}

/// Box statistics for the `top_n` symbols with the highest mean sentiment,
/// best first. Mean ties break by symbol for a deterministic ranking.
pub fn distribution_stats(records: &[SentimentRecord], top_n: usize) -> Vec<DistributionStats> {
    let mut stats: Vec<DistributionStats> = group_by(records.iter(), |r| r.symbol.as_str())
        .into_iter()
        .map(|(symbol, group)| {
            let mut sentiments: Vec<f64> = group.iter().map(|r| r.sentiment).collect();
            sentiments.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            let n = sentiments.len();
            let avg_sentiment = sentiments.iter().sum::<f64>() / n as f64;

            DistributionStats {
                symbol: symbol.to_string(),
                coin_name: group[0].coin_name.clone(),
                avg_sentiment,
                min: sentiments[0],
                q1: sentiments[n / 4],
                median: sentiments[n / 2],
                q3: sentiments[n * 3 / 4],
                max: sentiments[n - 1],
            }
        })
        .collect();

    stats.sort_by(|a, b| {
        b.avg_sentiment
            .partial_cmp(&a.avg_sentiment)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
    stats.truncate(top_n);
    stats
}

/// Coin-by-day heatmap: mean sentiment per (UTC day, symbol) cell for the
/// `top_n` most-mentioned symbols. Cells come out day-ascending, then
/// symbol-ascending; (day, symbol) pairs with no records produce no cell.
pub fn daily_heatmap(records: &[SentimentRecord], top_n: usize) -> Vec<HeatmapCell> {
    let top: HashSet<String> = top_symbols(records, top_n).into_iter().collect();

    let mut cells: BTreeMap<(NaiveDate, &str), Vec<f64>> = BTreeMap::new();
    for record in records {
        if !top.contains(&record.symbol) {
            continue;
        }
        cells
            .entry((record.date.date_naive(), record.symbol.as_str()))
            .or_default()
            .push(record.sentiment);
    }

    cells
        .into_iter()
        .map(|((date, symbol), sentiments)| HeatmapCell {
            symbol: symbol.to_string(),
            date,
            sentiment: sentiments.iter().sum::<f64>() / sentiments.len() as f64,
        })
        .collect()
}

/// The `n` most-mentioned symbols, most mentions first. Ties break by symbol
/// so that the ranking is deterministic.
pub fn top_symbols(records: &[SentimentRecord], n: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = group_by(records.iter(), |r| r.symbol.clone())
        .into_iter()
        .map(|(symbol, group)| (symbol, group.len()))
        .collect();

    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts.into_iter().take(n).map(|(symbol, _)| symbol).collect()
}
