// tests/scoring_properties.rs
//! Behavioural properties of the scoring pipeline, checked through the public API.

use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};
use steam_review_sentiment::composite::breakdown;
use steam_review_sentiment::{
    analyze_sentiment, composite_score, score_review, score_reviews, score_reviews_parallel,
    EngineConfig, Review, SentimentLabel,
};

const VOCAB: &[&str] = &[
    "good", "great", "awful", "not", "never", "very", "slightly", "extremely", "fun", "boring",
    "but", "however", "masterpiece", "garbage", "don't", "can't", "worth", "it", "the", "game",
    "GREAT", "BAD", "LOL", "sooo", "7/10", "10/10", "2/10", "!", "?", ".", "😍", "😡", "👍",
    "/s", "waste", "of", "time", "would", "recommend", "refund", "meh", "okay",
];

fn random_review(rng: &mut StdRng, i: usize) -> Review {
    let len = rng.random_range(0..40);
    let words: Vec<&str> = (0..len)
        .map(|_| *VOCAB.choose(rng).expect("non-empty vocab"))
        .collect();
    Review::new(
        i.to_string(),
        words.join(" "),
        rng.random_bool(0.5),
        rng.random_range(1_600_000_000..1_700_000_000),
        rng.random_range(0..500_000),
        rng.random_range(0..5_000),
    )
}

fn review(text: &str, up: bool, playtime_min: u64, votes: u64) -> Review {
    Review::new("t", text, up, 1_700_000_000, playtime_min, votes)
}

#[test]
fn random_reviews_stay_in_range_and_label_matches_score() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for i in 0..2_000 {
        let r = random_review(&mut rng, i);
        let s = score_review(&r);
        assert!(s.composite_score() <= 100, "{:?}", r.text);
        assert_eq!(s.label(), SentimentLabel::from_score(s.composite_score()));
        // Same input, same output
        assert_eq!(s, score_review(&r), "{:?}", r.text);
    }
}

#[test]
fn parallelism_degree_does_not_change_output() {
    let mut rng = StdRng::seed_from_u64(42);
    let batch: Vec<Review> = (0..300).map(|i| random_review(&mut rng, i)).collect();
    let seq = score_reviews(&batch);
    let cfg = EngineConfig::default();
    for workers in [2, 4, 7] {
        assert_eq!(score_reviews_parallel(&batch, &cfg, workers), seq);
    }
}

#[test]
fn negation_inverts_and_damps() {
    let good = analyze_sentiment("good").components.lexical;
    let not_good = analyze_sentiment("not good").components.lexical;
    assert!(good > 0.0 && not_good < 0.0);
    assert!(not_good.abs() < good.abs());
    assert!((not_good + good * 0.75).abs() < 1e-9);
}

#[test]
fn empty_text_is_zeroed() {
    let s = analyze_sentiment("");
    assert_eq!(s.score, 0.0);
    assert_eq!(s.comparative, 0.0);
    assert!(s.tokens.is_empty() && s.positive.is_empty() && s.negative.is_empty());

    assert_eq!(composite_score(&review("", true, 0, 0), &s), 52);
    assert_eq!(composite_score(&review("", false, 0, 0), &s), 48);
}

#[test]
fn metadata_pushes_away_from_base_until_saturation() {
    for (text, up) in [("", true), ("", false), ("great fun", true), ("awful", false)] {
        let sig = analyze_sentiment(text);

        let mut last = f64::MIN;
        for minutes in [0, 60, 600, 6_000, 60_000] {
            let t = breakdown(&review(text, up, minutes, 0), &sig).total();
            assert!(t > last, "playtime {minutes} on {text:?}");
            last = t;
        }

        let mut last = f64::MIN;
        for votes in [0, 1, 10, 100, 499] {
            let t = breakdown(&review(text, up, 0, votes), &sig).total();
            assert!(t > last, "votes {votes} on {text:?}");
            last = t;
        }

        // Saturated: more playtime adds nothing.
        let cap = breakdown(&review(text, up, 2_000 * 60, 0), &sig).total();
        let past = breakdown(&review(text, up, 10_000 * 60, 0), &sig).total();
        assert!((cap - past).abs() < 1e-9);
    }
}

#[test]
fn longer_text_moves_further_from_base() {
    // Padding with neutral words keeps the text sentiment fixed.
    let mut last = 0u8;
    for pad in [0, 20, 200, 800] {
        let text = format!("great{}", " the".repeat(pad));
        let s = score_review(&review(&text, true, 0, 0)).composite_score();
        assert!(s >= last, "pad {pad}: {s} < {last}");
        last = s;
    }
    assert!(last > score_review(&review("great", true, 0, 0)).composite_score());
}

#[test]
fn common_praise_moves_the_text_term() {
    let s = score_review(&review("the best purchase I ever made", true, 0, 0));
    assert_eq!(s.sentiment.positive, vec!["best"]);
    // base 52 + effort alone would round to 56
    assert!(s.composite_score() > 56, "{}", s.composite_score());
    assert_eq!(s.label(), SentimentLabel::Positive);
}

#[test]
fn same_text_different_metadata_differs() {
    let a = score_review(&review("Pretty good game overall", true, 0, 0));
    let b = score_review(&review("Pretty good game overall", true, 90_000, 300));
    assert!(b.composite_score() > a.composite_score());
}

#[test]
fn masterpiece_scenario() {
    let s = score_review(&review("10/10 masterpiece, would recommend!", true, 0, 0));
    assert!(s.sentiment.score > 15.0);
    assert_eq!(s.sentiment.components.rating, Some(5.0));
    assert!(s.composite_score() >= 52 + 22);
    assert_eq!(s.composite_score(), 79);
    assert_eq!(s.label(), SentimentLabel::Positive);
}

#[test]
fn unplayable_scam_scenario() {
    let s = score_review(&review("unplayable garbage, total scam", false, 0, 0));
    assert!(s.sentiment.score < -10.0);
    assert_eq!(s.composite_score(), 25);
    assert_eq!(s.label(), SentimentLabel::Negative);
}

#[test]
fn lukewarm_scenario_sits_near_the_neutral_band() {
    let up = score_review(&review("it's okay I guess", true, 0, 0));
    let down = score_review(&review("it's okay I guess", false, 0, 0));
    assert!(up.sentiment.score > 0.0 && up.sentiment.score < 3.0);
    assert_eq!(up.composite_score(), 57);
    assert_eq!(down.composite_score(), 45);
}

#[test]
fn contradicting_text_pulls_toward_neutral() {
    let aligned = score_review(&review("awful awful awful", false, 0, 0));
    let contradicting = score_review(&review("awful awful awful", true, 0, 0));
    assert!(aligned.composite_score() < 48);
    assert!(contradicting.composite_score() < 52);
    assert_eq!(contradicting.label(), SentimentLabel::Neutral);
}
