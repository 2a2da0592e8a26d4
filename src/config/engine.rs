// src/config/engine.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use crate::analyze::{AnalyzerOptions, DEFAULT_MAX_SCAN_CHARS};

pub const DEFAULT_ENGINE_CONFIG_PATH: &str = "config/sentiment.toml";
pub const ENV_ENGINE_CONFIG_PATH: &str = "SENTIMENT_CONFIG_PATH";
pub const ENV_WORKERS: &str = "SENTIMENT_WORKERS";

fn default_max_scan_chars() -> usize {
    DEFAULT_MAX_SCAN_CHARS
}
fn default_parallel_min_batch() -> usize {
    256
}

/// Runtime knobs of the scoring engine. Scoring constants are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Review text beyond this many chars is not analyzed.
    #[serde(default = "default_max_scan_chars")]
    pub max_scan_chars: usize,
    /// Batches at least this large are scored on worker threads.
    #[serde(default = "default_parallel_min_batch")]
    pub parallel_min_batch: usize,
    /// Worker threads for large batches; 0 = available parallelism.
    #[serde(default)]
    pub workers: usize,
    /// Strip BBCode/HTML markup from review bodies before scoring.
    #[serde(default)]
    pub strip_markup: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_scan_chars: default_max_scan_chars(),
            parallel_min_batch: default_parallel_min_batch(),
            workers: 0,
            strip_markup: false,
        }
    }
}

impl EngineConfig {
    /// Parse from a TOML string. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut cfg: EngineConfig = toml::from_str(s)?;
        cfg.sanitize();
        Ok(cfg)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading engine config from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing engine config at {}", path.display()))
    }

    /// Load using env var + fallbacks:
    /// 1) $SENTIMENT_CONFIG_PATH (must exist)
    /// 2) config/sentiment.toml
    /// 3) built-in defaults
    ///
    /// `$SENTIMENT_WORKERS` overrides `workers` when it parses.
    pub fn load() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_ENGINE_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!(
                    "{ENV_ENGINE_CONFIG_PATH} points to non-existent path {}",
                    pb.display()
                ));
            }
            Self::load_from(&pb)?
        } else {
            let default_p = PathBuf::from(DEFAULT_ENGINE_CONFIG_PATH);
            if default_p.exists() {
                Self::load_from(&default_p)?
            } else {
                Self::default()
            }
        };

        if let Some(w) = parse_usize_env(std::env::var(ENV_WORKERS).ok()) {
            cfg.workers = w;
        }
        Ok(cfg)
    }

    /// Options for the text analyzer derived from this config.
    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            max_scan_chars: self.max_scan_chars,
        }
    }

    /// Effective worker count (resolves 0 to the machine's parallelism).
    pub fn effective_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }

    fn sanitize(&mut self) {
        if self.max_scan_chars == 0 {
            self.max_scan_chars = default_max_scan_chars();
        }
        if self.parallel_min_batch == 0 {
            self.parallel_min_batch = 1;
        }
    }
}

fn parse_usize_env(raw: Option<String>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
}
