//! review.rs: input review records (Steam `appreviews` shape) and scored output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::analyze::SentimentSignal;

/// Composite score at or above which a review is positive.
pub const POSITIVE_MIN: u8 = 55;
/// Composite score at or below which a review is negative.
pub const NEGATIVE_MAX: u8 = 45;

/// Author block of a Steam review; only playtime matters for scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Minutes played when the review was written.
    #[serde(default)]
    pub playtime_at_review: u64,
    /// Remaining author fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One user review as delivered by the review-fetching layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "recommendationid", default)]
    pub id: String,
    #[serde(rename = "review", default)]
    pub text: String,
    /// true = "recommended", false = "not recommended".
    pub voted_up: bool,
    /// Seconds since the UNIX epoch.
    #[serde(default)]
    pub timestamp_created: i64,
    #[serde(default)]
    pub author: Author,
    /// Community "helpful" votes.
    #[serde(default)]
    pub votes_up: u64,
    /// Other Steam fields (language, votes_funny, ...), preserved on output.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Review {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        voted_up: bool,
        timestamp_created: i64,
        playtime_minutes: u64,
        helpful_votes: u64,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            voted_up,
            timestamp_created,
            author: Author {
                playtime_at_review: playtime_minutes,
                extra: Map::new(),
            },
            votes_up: helpful_votes,
            extra: Map::new(),
        }
    }

    /// Build from undecoded body bytes; invalid UTF-8 becomes an empty body.
    pub fn with_raw_text(mut self, bytes: &[u8]) -> Self {
        self.text = std::str::from_utf8(bytes).map(str::to_string).unwrap_or_default();
        self
    }

    pub fn playtime_minutes(&self) -> u64 {
        self.author.playtime_at_review
    }

    pub fn helpful_votes(&self) -> u64 {
        self.votes_up
    }
}

/// Discrete sentiment class derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// ≥ 55 positive, ≤ 45 negative, neutral in between.
    pub fn from_score(score: u8) -> Self {
        if score >= POSITIVE_MIN {
            Self::Positive
        } else if score <= NEGATIVE_MAX {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Neutral => "😐",
            Self::Negative => "😞",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A review together with its text sentiment and composite score.
///
/// The label is derived from the score at construction and cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: SentimentSignal,
    #[serde(rename = "compositeScore")]
    composite_score: u8,
    #[serde(rename = "sentimentLabel")]
    sentiment_label: SentimentLabel,
}

impl ScoredReview {
    pub fn new(review: Review, sentiment: SentimentSignal, composite_score: u8) -> Self {
        let composite_score = composite_score.min(100);
        Self {
            review,
            sentiment,
            composite_score,
            sentiment_label: SentimentLabel::from_score(composite_score),
        }
    }

    /// Integer in [0, 100].
    pub fn composite_score(&self) -> u8 {
        self.composite_score
    }

    pub fn label(&self) -> SentimentLabel {
        self.sentiment_label
    }
}
