//! Batch scorer: reads Steam reviews as JSON, prints a `SentimentReport`.
//!
//! Usage: `steam-review-sentiment [PATH]` (stdin when PATH is omitted or `-`).
//! Accepts either a bare array of review objects or a Steam `appreviews`
//! response with a `reviews` array.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::{self, Read, Write};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use steam_review_sentiment::{analyze_batch, EngineConfig, Review};

#[derive(Deserialize)]
#[serde(untagged)]
enum ReviewInput {
    Bare(Vec<Review>),
    Response { reviews: Vec<Review> },
}

impl ReviewInput {
    fn into_reviews(self) -> Vec<Review> {
        match self {
            ReviewInput::Bare(v) => v,
            ReviewInput::Response { reviews } => reviews,
        }
    }
}

/// Compact logs on stderr; stdout carries the report only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sentiment=info,steam_review_sentiment=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .try_init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading reviews from stdin")?;
            Ok(buf)
        }
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading reviews from {p}")),
    }
}

fn parse_reviews(raw: &str) -> Result<Vec<Review>> {
    let input: ReviewInput = serde_json::from_str(raw)
        .context("input must be a JSON array of reviews or an object with a `reviews` array")?;
    Ok(input.into_reviews())
}

fn main() -> Result<()> {
    // .env is optional; SENTIMENT_CONFIG_PATH / SENTIMENT_WORKERS may come from it.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = EngineConfig::load().context("loading engine config")?;
    let path = std::env::args().nth(1);

    let raw = read_input(path.as_deref())?;
    let reviews = parse_reviews(&raw)?;
    if reviews.is_empty() {
        warn!(target: "sentiment", "no reviews in input");
    }
    info!(
        target: "sentiment",
        reviews = reviews.len(),
        workers = cfg.effective_workers(),
        strip_markup = cfg.strip_markup,
        "scoring"
    );

    let report = analyze_batch(&reviews, &cfg);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &report).context("writing report")?;
    writeln!(out).context("writing report")?;
    Ok(())
}
