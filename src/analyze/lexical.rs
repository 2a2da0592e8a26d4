//! Word-level lexicon scoring with negation scope and intensity modifiers.

use crate::lexicon::{intensity_multiplier, is_negator, word_weight};

/// How many preceding tokens may negate a sentiment word.
pub const NEGATION_WINDOW: usize = 3;
/// How many preceding tokens may scale a sentiment word.
pub const INTENSITY_WINDOW: usize = 2;
/// Negated words flip sign and keep this share of their magnitude.
pub const NEGATION_DAMPING: f64 = 0.75;

/// Result of the lexical pass over one token sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexicalScore {
    pub score: f64,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Score `tokens` against the lexicon.
///
/// Every occurrence of a positive/negative word is reported, in text order.
pub fn score_tokens(tokens: &[String]) -> LexicalScore {
    let mut out = LexicalScore::default();

    for (i, tok) in tokens.iter().enumerate() {
        let Some(weight) = word_weight(tok) else {
            continue;
        };

        let negated = (1..=NEGATION_WINDOW).any(|k| i >= k && is_negator(&tokens[i - k]));

        // nearest modifier wins
        let multiplier = (1..=INTENSITY_WINDOW)
            .filter(|&k| i >= k)
            .find_map(|k| intensity_multiplier(&tokens[i - k]))
            .unwrap_or(1.0);

        let mut adj = f64::from(weight) * multiplier;
        if negated {
            adj = -adj * NEGATION_DAMPING;
        }

        if adj > 0.0 {
            out.positive.push(tok.clone());
        } else if adj < 0.0 {
            out.negative.push(tok.clone());
        }
        out.score += adj;
    }

    out
}
