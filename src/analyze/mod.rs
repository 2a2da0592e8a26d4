// src/analyze/mod.rs
//! Text sentiment pipeline: tokenizer → lexicon → phrases → ratings/emoji/tone,
//! blended into one raw score and a length-normalized comparative score.

pub mod lexical;
pub mod phrases;
pub mod signals;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::telemetry::{ensure_metrics_described, TEXTS_TRUNCATED_TOTAL};
use crate::tokenize::tokenize;

// Re-export convenient entry points.
pub use crate::analyze::lexical::{score_tokens, LexicalScore};
pub use crate::analyze::phrases::{match_phrases, phrase_score};
pub use crate::analyze::signals::{emoji_score, rating_score, tone_score};

/// Mixing weights of the five text signals.
pub const W_LEXICAL: f64 = 1.0;
pub const W_PHRASE: f64 = 1.5;
pub const W_EMOJI: f64 = 0.5;
pub const W_RATING: f64 = 2.0;
pub const W_TONE: f64 = 0.5;

/// Default text-length ceiling (chars) for one analysis pass.
pub const DEFAULT_MAX_SCAN_CHARS: usize = 20_000;

/// Unweighted per-source scores behind a `SentimentSignal`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalComponents {
    pub lexical: f64,
    pub phrase: f64,
    pub emoji: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub tone: f64,
    /// Ids of the idiom patterns that matched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phrases: Vec<String>,
}

/// Sentiment of one review text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentSignal {
    /// Weighted sum of all signals, rounded to one decimal.
    pub score: f64,
    /// `score / max(tokens, 1)`, rounded to three decimals.
    pub comparative: f64,
    pub tokens: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    #[serde(default)]
    pub components: SignalComponents,
}

/// Knobs for one analysis pass. The scoring constants are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Text beyond this many chars is ignored.
    pub max_scan_chars: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            max_scan_chars: DEFAULT_MAX_SCAN_CHARS,
        }
    }
}

/// Analyze `text` with default options.
pub fn analyze_sentiment(text: &str) -> SentimentSignal {
    analyze_sentiment_with(text, &AnalyzerOptions::default())
}

/// Analyze raw bytes; text that is not valid UTF-8 scores as empty.
pub fn analyze_sentiment_bytes(bytes: &[u8]) -> SentimentSignal {
    match std::str::from_utf8(bytes) {
        Ok(text) => analyze_sentiment(text),
        Err(e) => {
            debug!(target: "sentiment", error = %e, len = bytes.len(), "undecodable review text, scoring as empty");
            SentimentSignal::default()
        }
    }
}

/// Analyze `text`: run every scanner and blend the results.
pub fn analyze_sentiment_with(text: &str, opts: &AnalyzerOptions) -> SentimentSignal {
    if text.trim().is_empty() {
        return SentimentSignal::default();
    }

    let text = truncate_chars(text, opts.max_scan_chars);
    let tokens = tokenize(text);

    let lex = score_tokens(&tokens);
    let (phrase, matched) = match_phrases(text);
    let emoji = emoji_score(text);
    let rating = rating_score(text);
    let tone = tone_score(text, &tokens);

    let raw = lex.score * W_LEXICAL
        + phrase * W_PHRASE
        + emoji * W_EMOJI
        + rating.unwrap_or(0.0) * W_RATING
        + tone * W_TONE;
    let score = round_to(raw, 1);
    let comparative = round_to(score / tokens.len().max(1) as f64, 3);

    SentimentSignal {
        score,
        comparative,
        tokens,
        positive: lex.positive,
        negative: lex.negative,
        components: SignalComponents {
            lexical: lex.score,
            phrase,
            emoji,
            rating,
            tone,
            phrases: matched.into_iter().map(str::to_string).collect(),
        },
    }
}

/// Cut `text` to at most `max` chars (0 disables the ceiling).
fn truncate_chars(text: &str, max: usize) -> &str {
    if max == 0 {
        return text;
    }
    match text.char_indices().nth(max) {
        Some((idx, _)) => {
            ensure_metrics_described();
            metrics::counter!(TEXTS_TRUNCATED_TOTAL).increment(1);
            debug!(target: "sentiment", chars_kept = max, bytes = text.len(), "review text truncated for analysis");
            &text[..idx]
        }
        None => text,
    }
}

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(x: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    (x * f).round() / f
}
