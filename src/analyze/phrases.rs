//! Multi-word idiom patterns matched against the raw review text.
//!
//! Each pattern is case-insensitive and contributes its weight once if it
//! matches anywhere; all matching patterns add up (no early exit).

use once_cell::sync::Lazy;
use regex::Regex;

/// A compiled idiom with its fixed weight in [-5, 5].
#[derive(Debug)]
pub struct PhrasePattern {
    pub id: &'static str,
    pub re: Regex,
    pub weight: f64,
}

const PATTERNS: &[(&str, &str, f64)] = &[
    // praise
    ("game_of_the_year", r"\bgame of the (?:year|decade)\b", 5.0),
    ("goty", r"\bgoty\b", 4.0),
    ("best_game", r"\bbest game(?:s)?\b", 4.0),
    ("must_play", r"\bmust[- ](?:play|buy|have)\b", 4.0),
    ("hidden_gem", r"\bhidden gem\b", 4.0),
    ("cant_stop_playing", r"\bcan'?t stop playing\b", 4.0),
    ("would_recommend", r"\b(?:would|highly|definitely|strongly|100%) recommend\b", 3.0),
    ("worth_every_penny", r"\bworth every (?:penny|cent)\b", 3.0),
    ("well_worth", r"\b(?:well|totally|definitely|absolutely) worth (?:it|the (?:money|price|wait))\b", 3.0),
    ("hours_of_fun", r"\b(?:hours|days) of fun\b", 3.0),
    ("thumbs_up", r"\bthumbs? up\b", 2.0),
    ("so_bad_its_good", r"\bso bad (?:it'?s|that it'?s) good\b", 2.0),
    ("perfect_score", r"^\s*10\s*/\s*10\s*[.!]?\s*$", 3.0),
    // complaints
    ("waste_of_time", r"\bwaste of (?:time|money|\$\d+)\b", -4.0),
    ("not_worth", r"\bnot worth (?:it|the (?:money|price|time))\b", -4.0),
    ("dont_recommend", r"\b(?:would not|wouldn'?t|do not|don'?t|can'?t|cannot) recommend\b", -4.0),
    ("do_not_buy", r"\b(?:do not|don'?t) buy\b", -4.0),
    ("stay_away", r"\bstay away\b", -4.0),
    ("cash_grab", r"\bcash[- ]grab\b", -4.0),
    ("pay_to_win", r"\bpay[- ]?(?:to|2)[- ]?win\b", -3.0),
    ("worst_game", r"\bworst game(?:s)?\b", -5.0),
    ("early_access_abandoned", r"\babandoned by (?:the )?dev(?:s|elopers?)?\b", -4.0),
    ("still_broken", r"\bstill (?:broken|unplayable|buggy)\b", -3.0),
    ("crashes_constantly", r"\bcrash(?:es|ing)? (?:constantly|all the time|every)\b", -3.0),
    ("thumbs_down", r"\bthumbs? down\b", -2.0),
    ("refund_requested", r"\b(?:got|requested|asked for) (?:a )?refund\b", -3.0),
    ("zero_out_of_ten", r"^\s*0\s*/\s*10\s*[.!]?\s*$", -3.0),
];

/// Process-wide compiled battery, in declaration order.
pub static PHRASE_PATTERNS: Lazy<Vec<PhrasePattern>> = Lazy::new(|| {
    PATTERNS
        .iter()
        .map(|&(id, pat, weight)| PhrasePattern {
            id,
            re: Regex::new(&format!("(?i){pat}")).expect("phrase pattern regex"),
            weight,
        })
        .collect()
});

/// Sum of the weights of every pattern that matches `text`, plus the matched ids.
pub fn match_phrases(text: &str) -> (f64, Vec<&'static str>) {
    let mut score = 0.0;
    let mut matched = Vec::new();
    for p in PHRASE_PATTERNS.iter() {
        if p.re.is_match(text) {
            score += p.weight;
            matched.push(p.id);
        }
    }
    (score, matched)
}

/// Phrase score only.
pub fn phrase_score(text: &str) -> f64 {
    match_phrases(text).0
}
