// src/devlog.rs
//! Dev-only per-review diagnostics.
//!
//! Active when SENTIMENT_DEV_LOG=1 and the process runs as dev (debug build, or
//! SENTIMENT_ENV in {local, development, dev}). Review bodies never reach the
//! log: a review is identified by a short fingerprint of its id and text.

use sha2::{Digest, Sha256};
use tracing::info;

use crate::review::{Review, ScoredReview};

pub const ENV_DEV_LOG: &str = "SENTIMENT_DEV_LOG";
pub const ENV_RUNTIME_ENV: &str = "SENTIMENT_ENV";

/// Digest bytes kept in a fingerprint (12 hex chars).
const FINGERPRINT_BYTES: usize = 6;
/// Contributing words listed per polarity.
const LOGGED_WORDS: usize = 5;

fn dev_logging_enabled() -> bool {
    let requested = std::env::var_os(ENV_DEV_LOG).is_some_and(|v| v == "1");
    requested
        && (cfg!(debug_assertions)
            || std::env::var(ENV_RUNTIME_ENV).is_ok_and(|name| is_dev_env_name(&name)))
}

fn is_dev_env_name(name: &str) -> bool {
    ["local", "development", "dev"]
        .iter()
        .any(|dev| name.eq_ignore_ascii_case(dev))
}

/// Short hex handle for a review; the id is mixed in so identical bodies from
/// different reviews stay distinguishable.
fn review_fingerprint(review: &Review) -> String {
    let digest = Sha256::new()
        .chain_update(review.id.as_bytes())
        .chain_update([0u8])
        .chain_update(review.text.as_bytes())
        .finalize();
    digest[..FINGERPRINT_BYTES]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

fn leading(words: &[String]) -> &[String] {
    &words[..words.len().min(LOGGED_WORDS)]
}

/// Log one scored review if dev logging is on.
pub(crate) fn dev_log_scored(r: &ScoredReview) {
    if !dev_logging_enabled() {
        return;
    }
    info!(
        target: "sentiment",
        review = %review_fingerprint(&r.review),
        raw = r.sentiment.score,
        composite = r.composite_score(),
        label = %r.label(),
        voted_up = r.review.voted_up,
        positive = ?leading(&r.sentiment.positive),
        negative = ?leading(&r.sentiment.negative),
        "review scored"
    );
}
