//! # Composite Review Score
//! Pure mapping `(text sentiment, vote, length, playtime, helpfulness, tone)` → 0..=100.
//! No I/O, suitable for unit tests and offline evaluation.
//!
//! Policy: start from a vote-dependent base (52 recommended / 48 not) and move
//! away from 50 by the sum of five weighted contributions. Text that contradicts
//! the vote pulls back toward neutral instead.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::analyze::SentimentSignal;
use crate::review::{Review, SentimentLabel};

const BASE_RECOMMENDED: f64 = 52.0;
const BASE_NOT_RECOMMENDED: f64 = 48.0;

const W_TEXT_ALIGNED: f64 = 22.0;
const W_TEXT_CONTRADICTING: f64 = 10.0;
const W_EFFORT: f64 = 10.0;
const W_PLAYTIME: f64 = 7.0;
const W_HELPFUL: f64 = 5.0;
const W_TONE: f64 = 4.0;

/// |raw score| at which the text term saturates.
const TEXT_SATURATION: f64 = 15.0;
const EFFORT_SATURATION_CHARS: f64 = 3000.0;
const PLAYTIME_SATURATION_HOURS: f64 = 2000.0;
const HELPFUL_SATURATION_VOTES: f64 = 500.0;

const TONE_MARKER: f64 = 0.25;

static RE_CAPS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]{3,}").expect("caps run regex"));

/// The five weighted contributions behind one composite score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CompositeBreakdown {
    pub text: f64,
    pub effort: f64,
    pub playtime: f64,
    pub helpfulness: f64,
    pub tone: f64,
}

impl CompositeBreakdown {
    pub fn total(&self) -> f64 {
        self.text + self.effort + self.playtime + self.helpfulness + self.tone
    }
}

/// `min(ln(1 + x) / ln(1 + cap), 1)`, zero for non-positive `x`.
pub fn log_saturation(x: f64, cap: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    ((1.0 + x).ln() / (1.0 + cap).ln()).min(1.0)
}

/// Text sign agrees with the vote; a zero score counts as agreeing with "recommended".
pub fn is_aligned(raw_score: f64, voted_up: bool) -> bool {
    (raw_score >= 0.0) == voted_up
}

/// Presence-based tone markers in [0, 1].
pub fn tone_markers(text: &str) -> f64 {
    let mut m = 0.0;
    if text.contains('!') {
        m += TONE_MARKER;
    }
    if RE_CAPS_RUN.is_match(text) {
        m += TONE_MARKER;
    }
    if text.chars().filter(|c| matches!(c, '.' | '!' | '?')).count() >= 2 {
        m += TONE_MARKER;
    }
    if text.chars().any(is_emoji) {
        m += TONE_MARKER;
    }
    f64::min(m, 1.0)
}

/// Pictographic ranges counted as "emoji present".
fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F300..=0x1FAFF | 0x2600..=0x27BF | 0x2B00..=0x2BFF | 0x1F1E6..=0x1F1FF
    )
}

/// Weighted contributions for a review with the given text sentiment.
pub fn breakdown(review: &Review, sentiment: &SentimentSignal) -> CompositeBreakdown {
    let magnitude = (sentiment.score.abs() / TEXT_SATURATION).min(1.0);
    let text = if is_aligned(sentiment.score, review.voted_up) {
        W_TEXT_ALIGNED * magnitude
    } else {
        -W_TEXT_CONTRADICTING * magnitude
    };

    let chars = review.text.chars().count() as f64;
    let hours = review.playtime_minutes() as f64 / 60.0;
    let votes = review.helpful_votes() as f64;

    CompositeBreakdown {
        text,
        effort: W_EFFORT * log_saturation(chars, EFFORT_SATURATION_CHARS),
        playtime: W_PLAYTIME * log_saturation(hours, PLAYTIME_SATURATION_HOURS),
        helpfulness: W_HELPFUL * log_saturation(votes, HELPFUL_SATURATION_VOTES),
        tone: W_TONE * tone_markers(&review.text),
    }
}

/// Integer composite score in [0, 100].
pub fn composite_score(review: &Review, sentiment: &SentimentSignal) -> u8 {
    let total = breakdown(review, sentiment).total();
    let raw = if review.voted_up {
        BASE_RECOMMENDED + total
    } else {
        BASE_NOT_RECOMMENDED - total
    };
    raw.clamp(0.0, 100.0).round() as u8
}

/// Score and label together.
pub fn composite_with_label(review: &Review, sentiment: &SentimentSignal) -> (u8, SentimentLabel) {
    let s = composite_score(review, sentiment);
    (s, SentimentLabel::from_score(s))
}
