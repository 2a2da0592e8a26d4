//! Independent text scanners: numeric ratings, emoji polarity and typographic tone.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::{is_contrastive, word_weight};

static RE_RATING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*/\s*(\d+(?:\.\d+)?)").expect("rating regex"));
static RE_CAPS_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("caps regex"));
static RE_SARCASM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|\s)/s(?:\W|$)|\bsarcasm\b").expect("sarcasm regex"));

const POSITIVE_EMOJI: &[char] = &[
    '😀', '😃', '😄', '😁', '😆', '😂', '🤣', '😊', '🙂', '😍', '🥰', '😘', '🤩', '😎', '👍', '👌',
    '👏', '🙌', '❤', '💖', '💕', '💯', '🔥', '🎉', '✨', '🏆', '⭐', '🌟',
];
const NEGATIVE_EMOJI: &[char] = &[
    '😡', '😠', '🤬', '😞', '😢', '😭', '😩', '😫', '😒', '🙁', '☹', '😤', '🤮', '🤢', '💩', '👎',
    '💔', '🥱', '😴', '🗑',
];
const EMOJI_WEIGHT: f64 = 1.5;

/// Ratios this far above their denominator are quantities ("24/7"), not scores.
const MAX_RATING_OVERSHOOT: f64 = 2.0;

/// Average of every valid `n/d` rating, mapped to [-5, 5].
///
/// Denominators outside (0, 100] are ignored; `None` when nothing valid is found.
/// Slash chains such as dates (`12/25/2024`) and numerators more than twice the
/// denominator (`24/7`) are not ratings.
pub fn rating_score(text: &str) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for caps in RE_RATING.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if text[..whole.start()].ends_with('/') || text[whole.end()..].starts_with('/') {
            continue;
        }
        let (Ok(num), Ok(den)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>()) else {
            continue;
        };
        if den <= 0.0 || den > 100.0 || num > den * MAX_RATING_OVERSHOOT {
            continue;
        }
        // "12/10" style hyperbole saturates at the scale edge
        sum += ((num / den) * 10.0 - 5.0).clamp(-5.0, 5.0);
        n += 1;
    }
    (n > 0).then(|| sum / n as f64)
}

/// Positive minus negative emoji occurrences, 1.5 points each.
pub fn emoji_score(text: &str) -> f64 {
    let (mut pos, mut neg) = (0u32, 0u32);
    for ch in text.chars() {
        if POSITIVE_EMOJI.contains(&ch) {
            pos += 1;
        } else if NEGATIVE_EMOJI.contains(&ch) {
            neg += 1;
        }
    }
    EMOJI_WEIGHT * f64::from(pos) - EMOJI_WEIGHT * f64::from(neg)
}

/// Typographic tone cues over the raw text; `tokens` are used for conjunction counts.
pub fn tone_score(text: &str, tokens: &[String]) -> f64 {
    let mut score = 0.0;

    // (a) shouting: caps words that are themselves sentiment words count by sign
    let mut caps_words = 0usize;
    let mut caps_hits = 0usize;
    for m in RE_CAPS_WORD.find_iter(text) {
        caps_words += 1;
        match word_weight(&m.as_str().to_ascii_lowercase()) {
            Some(w) if w > 0 => {
                score += 1.0;
                caps_hits += 1;
            }
            Some(w) if w < 0 => {
                score -= 1.0;
                caps_hits += 1;
            }
            _ => {}
        }
    }
    if caps_hits == 0 && caps_words >= 2 {
        score += 0.5;
    }

    // (b) exclamation density
    let bangs = text.chars().filter(|&c| c == '!').count();
    if bangs >= 3 {
        score += 0.5;
    } else if bangs >= 1 {
        score += 0.2;
    }

    // (c) letter stretching ("sooo", "nooooo")
    if has_stretched_letter(text) {
        score += 0.3;
    }

    // (d) explicit sarcasm
    if RE_SARCASM.is_match(text) {
        score -= 2.0;
    }

    // (e) contrastive conjunctions
    let contrastive = tokens.iter().filter(|t| is_contrastive(t)).count();
    score -= 0.3 * contrastive as f64;

    score
}

/// Any alphabetic character repeated at least three times in a row (case-insensitive).
fn has_stretched_letter(text: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 0usize;
    for ch in text.chars() {
        if !ch.is_alphabetic() {
            prev = None;
            run = 0;
            continue;
        }
        let lc = ch.to_lowercase().next().unwrap_or(ch);
        if prev == Some(lc) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            prev = Some(lc);
            run = 1;
        }
    }
    false
}
