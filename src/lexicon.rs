//! Static word tables: the sentiment lexicon plus the negation, intensifier and
//! diminisher sets used by the lexical scorer.
//!
//! All tables are built once on first use and never mutated afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    let table = serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid sentiment lexicon");
    debug_assert!(table.values().all(|w| (-5..=5).contains(w)));
    table
});

/// Modifiers that scale the next sentiment word up (> 1.0) or down (< 1.0).
static INTENSITY: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for (k, v) in [
        // intensifiers
        ("very", 1.5),
        ("really", 1.5),
        ("so", 1.3),
        ("too", 1.3),
        ("super", 1.5),
        ("highly", 1.5),
        ("truly", 1.5),
        ("totally", 1.5),
        ("total", 1.5),
        ("absolutely", 2.0),
        ("extremely", 2.0),
        ("incredibly", 2.0),
        ("insanely", 2.0),
        ("utterly", 2.0),
        ("completely", 1.8),
        ("most", 1.5),
        ("especially", 1.3),
        ("particularly", 1.3),
        // diminishers
        ("slightly", 0.5),
        ("somewhat", 0.6),
        ("kinda", 0.6),
        ("kind-of", 0.6),
        ("sorta", 0.6),
        ("fairly", 0.7),
        ("mildly", 0.5),
        ("little", 0.6),
        ("bit", 0.6),
        ("almost", 0.7),
        ("mostly", 0.8),
        ("partly", 0.5),
        ("marginally", 0.5),
    ] {
        m.insert(k, v);
    }
    m
});

/// Auxiliary verbs whose `n't` / `nt` contraction counts as a negation.
const NEGATABLE_AUXILIARIES: &[&str] = &[
    "do", "does", "did", "is", "was", "are", "were", "would", "could", "should", "can", "has",
    "have", "had",
];

/// Lexicon weight for a lowercase token, if it is a sentiment word.
#[inline]
pub fn word_weight(token: &str) -> Option<i32> {
    LEXICON.get(token).copied()
}

/// Intensity multiplier for a modifier token (`None` if the token is not a modifier).
#[inline]
pub fn intensity_multiplier(token: &str) -> Option<f64> {
    INTENSITY.get(token).copied()
}

/// Negation words plus auxiliary contractions ("don't", "isnt", "can't", ...).
pub fn is_negator(token: &str) -> bool {
    if matches!(
        token,
        "not" | "never" | "no" | "nor" | "hardly" | "barely" | "rarely"
    ) {
        return true;
    }

    let stem = token
        .strip_suffix("n't")
        .or_else(|| token.strip_suffix("nt"));
    match stem {
        // "can't" / "cant" drop one `n` together with the suffix
        Some("ca") => true,
        Some(s) if !s.is_empty() => NEGATABLE_AUXILIARIES.contains(&s),
        _ => false,
    }
}

/// Contrastive conjunctions penalised by the tone extractor.
pub fn is_contrastive(token: &str) -> bool {
    matches!(token, "but" | "however" | "although" | "though" | "except")
}
