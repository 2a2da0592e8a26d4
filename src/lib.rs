// src/lib.rs
//! Rule-based sentiment scoring for Steam user reviews.
//!
//! Pipeline: `tokenize` → `analyze` (lexicon, phrases, ratings, emoji, tone)
//! → `composite` (blend with vote/length/playtime/helpfulness) → `stats`.
//! Everything on the scoring path is a pure, synchronous function.

pub mod analyze;
pub mod batch;
pub mod composite;
pub mod config;
pub mod lexicon;
pub mod markup;
pub mod telemetry;
pub mod review;
pub mod stats;
pub mod tokenize;

mod devlog;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{
    analyze_sentiment, analyze_sentiment_bytes, analyze_sentiment_with, AnalyzerOptions,
    SentimentSignal, SignalComponents,
};
pub use crate::batch::{
    analyze_batch, score_review, score_review_with, score_reviews, score_reviews_parallel,
    SentimentReport,
};
pub use crate::composite::{composite_score, CompositeBreakdown};
pub use crate::config::EngineConfig;
pub use crate::review::{Author, Review, ScoredReview, SentimentLabel};
pub use crate::stats::{calculate_statistics, OverallStats, SentimentStatistics, TimelinePoint};
