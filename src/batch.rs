//! # Batch scoring
//! Maps reviews → `ScoredReview` (optionally on a rayon pool) and reduces
//! the result into `SentimentStatistics`.
//!
//! Output order always equals input order; parallel and sequential runs are identical.

use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};

use crate::analyze::{analyze_sentiment_with, AnalyzerOptions};
use crate::composite::composite_score;
use crate::config::EngineConfig;
use crate::devlog::dev_log_scored;
use crate::markup::normalize_review_text;
use crate::telemetry::{ensure_metrics_described, BATCH_MS, LABEL_TOTAL, REVIEWS_SCORED_TOTAL};
use crate::review::{Review, ScoredReview};
use crate::stats::{calculate_statistics, SentimentStatistics};

/// Scored reviews plus their aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    pub reviews: Vec<ScoredReview>,
    pub stats: SentimentStatistics,
}

/// Score a single review with default settings.
pub fn score_review(review: &Review) -> ScoredReview {
    score_review_with(review, &EngineConfig::default())
}

/// Score a single review. The returned review keeps the original body even
/// when markup stripping is enabled.
pub fn score_review_with(review: &Review, cfg: &EngineConfig) -> ScoredReview {
    let opts: AnalyzerOptions = cfg.analyzer_options();

    let scored = if cfg.strip_markup {
        let mut plain = review.clone();
        plain.text = normalize_review_text(&review.text);
        let sentiment = analyze_sentiment_with(&plain.text, &opts);
        let score = composite_score(&plain, &sentiment);
        ScoredReview::new(review.clone(), sentiment, score)
    } else {
        let sentiment = analyze_sentiment_with(&review.text, &opts);
        let score = composite_score(review, &sentiment);
        ScoredReview::new(review.clone(), sentiment, score)
    };

    dev_log_scored(&scored);
    scored
}

/// Score reviews in order on the calling thread (default settings).
pub fn score_reviews(reviews: &[Review]) -> Vec<ScoredReview> {
    let cfg = EngineConfig::default();
    reviews.iter().map(|r| score_review_with(r, &cfg)).collect()
}

/// Score reviews on a rayon pool of `workers` threads.
///
/// Output order equals input order. If the pool cannot be built the batch is
/// scored on the calling thread.
pub fn score_reviews_parallel(
    reviews: &[Review],
    cfg: &EngineConfig,
    workers: usize,
) -> Vec<ScoredReview> {
    let workers = workers.clamp(1, reviews.len().max(1));
    if workers == 1 {
        return reviews.iter().map(|r| score_review_with(r, cfg)).collect();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(|| {
            reviews
                .par_iter()
                .map(|r| score_review_with(r, cfg))
                .collect()
        }),
        Err(e) => {
            warn!(target: "sentiment", error = %e, workers, "rayon pool unavailable, scoring sequentially");
            reviews.iter().map(|r| score_review_with(r, cfg)).collect()
        }
    }
}

/// Score a whole batch per `cfg` and compute its statistics.
pub fn analyze_batch(reviews: &[Review], cfg: &EngineConfig) -> SentimentReport {
    ensure_metrics_described();
    let started = Instant::now();

    let workers = if reviews.len() >= cfg.parallel_min_batch {
        cfg.effective_workers()
    } else {
        1
    };
    let scored = score_reviews_parallel(reviews, cfg, workers);
    let stats = calculate_statistics(&scored);

    let ms = started.elapsed().as_secs_f64() * 1000.0;
    metrics::histogram!(BATCH_MS).record(ms);
    metrics::counter!(REVIEWS_SCORED_TOTAL).increment(scored.len() as u64);
    for r in &scored {
        metrics::counter!(LABEL_TOTAL, "label" => r.label().as_str()).increment(1);
    }

    info!(
        target: "sentiment",
        reviews = scored.len(),
        workers,
        positive = stats.overall.positive_count,
        neutral = stats.overall.neutral_count,
        negative = stats.overall.negative_count,
        average = stats.overall.average_score,
        elapsed_ms = ms,
        "batch scored"
    );

    SentimentReport {
        reviews: scored,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::SentimentLabel;

    fn sample() -> Vec<Review> {
        let texts = [
            ("10/10 masterpiece, would recommend!", true),
            ("unplayable garbage, total scam", false),
            ("it's okay I guess", true),
            ("", false),
            ("Great soundtrack but the ending was disappointing.", true),
            ("Not worth it. Crashes constantly 😡", false),
            ("GOTY!!! sooo good 😍", true),
        ];
        texts
            .iter()
            .enumerate()
            .map(|(i, (t, up))| {
                Review::new(i.to_string(), *t, *up, 1_700_000_000 + i as i64 * 40_000, i as u64 * 90, i as u64)
            })
            .collect()
    }

    #[test]
    fn parallel_matches_sequential() {
        let rs = sample();
        let seq = score_reviews(&rs);
        let cfg = EngineConfig::default();
        for w in [1, 2, 3, 16] {
            assert_eq!(score_reviews_parallel(&rs, &cfg, w), seq, "workers={w}");
        }
    }

    #[test]
    fn pool_scoring_keeps_input_order() {
        let rs: Vec<Review> = sample()
            .into_iter()
            .cycle()
            .take(700)
            .enumerate()
            .map(|(i, mut r)| {
                r.id = format!("r{i}");
                r
            })
            .collect();
        let cfg = EngineConfig {
            workers: 4,
            ..Default::default()
        };
        let out = score_reviews_parallel(&rs, &cfg, cfg.effective_workers());
        let ids: Vec<&str> = out.iter().map(|s| s.review.id.as_str()).collect();
        let expected: Vec<&str> = rs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, expected);
        assert_eq!(out, score_reviews(&rs));
    }

    #[test]
    fn order_and_fields_preserved() {
        let rs = sample();
        let out = score_reviews(&rs);
        assert_eq!(out.len(), rs.len());
        for (a, b) in rs.iter().zip(&out) {
            assert_eq!(a, &b.review);
            assert!(b.composite_score() <= 100);
            assert_eq!(b.label(), SentimentLabel::from_score(b.composite_score()));
        }
    }

    #[test]
    fn markup_is_stripped_for_scoring_only() {
        let r = Review::new("1", "[b]awful[/b] [b]awful[/b]", false, 0, 0, 0);
        let cfg = EngineConfig {
            strip_markup: true,
            ..Default::default()
        };
        let s = score_review_with(&r, &cfg);
        assert_eq!(s.review.text, "[b]awful[/b] [b]awful[/b]");
        assert_eq!(s.sentiment.tokens, vec!["awful", "awful"]);

        let plain = score_review(&r);
        assert!(plain.sentiment.tokens.contains(&"b".to_string()));
    }

    #[test]
    fn batch_report_combines_reviews_and_stats() {
        let rs = sample();
        let cfg = EngineConfig {
            parallel_min_batch: 2,
            workers: 3,
            ..Default::default()
        };
        let rep = analyze_batch(&rs, &cfg);
        assert_eq!(rep.reviews, score_reviews(&rs));
        assert_eq!(rep.stats.overall.total_reviews, rs.len());
        let counted: usize = rep.stats.timeline.iter().map(|p| p.count).sum();
        assert_eq!(counted, rs.len());
    }

    #[test]
    fn empty_batch() {
        let rep = analyze_batch(&[], &EngineConfig::default());
        assert!(rep.reviews.is_empty());
        assert_eq!(rep.stats, SentimentStatistics::default());
    }
}
