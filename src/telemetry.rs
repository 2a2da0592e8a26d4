//! Metric names and one-time descriptors.
//!
//! The library only talks to the `metrics` facade; installing a recorder
//! (Prometheus or otherwise) is up to the embedding application.

use metrics::{describe_counter, describe_histogram};
use once_cell::sync::OnceCell;

pub const REVIEWS_SCORED_TOTAL: &str = "sentiment_reviews_scored_total";
pub const LABEL_TOTAL: &str = "sentiment_label_total";
pub const BATCH_MS: &str = "sentiment_batch_ms";
pub const TEXTS_TRUNCATED_TOTAL: &str = "sentiment_texts_truncated_total";

/// One-time metrics registration (so series carry descriptions once a recorder exists).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(REVIEWS_SCORED_TOTAL, "Reviews passed through the composite scorer.");
        describe_counter!(LABEL_TOTAL, "Scored reviews per sentiment label.");
        describe_histogram!(BATCH_MS, "Wall time of one batch scoring pass in milliseconds.");
        describe_counter!(
            TEXTS_TRUNCATED_TOTAL,
            "Review texts cut at the analysis length ceiling."
        );
    });
}
