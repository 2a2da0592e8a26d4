//! # Sentiment Statistics
//! Reduces a batch of scored reviews into overall label counts, the mean
//! composite score, and a per-day (UTC) timeline sorted by date.
//!
//! Only days that have at least one review appear in the timeline.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::review::{ScoredReview, SentimentLabel};

/// Batch-wide counts and average.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub average_score: f64,
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    pub total_reviews: usize,
}

/// One calendar day with at least one review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    /// `YYYY-MM-DD` (UTC).
    pub date: String,
    pub average_score: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentStatistics {
    pub overall: OverallStats,
    pub timeline: Vec<TimelinePoint>,
}

/// UTC calendar date of a UNIX timestamp; out-of-range values fall back to the epoch day.
pub fn utc_date(ts_unix: i64) -> String {
    DateTime::from_timestamp(ts_unix, 0)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}

/// Aggregate `reviews` into overall stats and a chronological timeline.
pub fn calculate_statistics(reviews: &[ScoredReview]) -> SentimentStatistics {
    let mut overall = OverallStats {
        total_reviews: reviews.len(),
        ..Default::default()
    };

    let mut sum: u64 = 0;
    // BTreeMap keeps `YYYY-MM-DD` keys in ascending order.
    let mut by_day: BTreeMap<String, (u64, usize)> = BTreeMap::new();

    for r in reviews {
        let s = u64::from(r.composite_score());
        sum += s;
        match r.label() {
            SentimentLabel::Positive => overall.positive_count += 1,
            SentimentLabel::Neutral => overall.neutral_count += 1,
            SentimentLabel::Negative => overall.negative_count += 1,
        }
        let day = by_day
            .entry(utc_date(r.review.timestamp_created))
            .or_insert((0, 0));
        day.0 += s;
        day.1 += 1;
    }

    overall.average_score = if reviews.is_empty() {
        0.0
    } else {
        sum as f64 / reviews.len() as f64
    };

    let timeline = by_day
        .into_iter()
        .map(|(date, (day_sum, count))| TimelinePoint {
            date,
            average_score: day_sum as f64 / count as f64,
            count,
        })
        .collect();

    SentimentStatistics { overall, timeline }
}
