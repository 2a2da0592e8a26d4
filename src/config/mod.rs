//! Engine configuration (TOML file + env overrides).

pub mod engine;

pub use engine::{EngineConfig, DEFAULT_ENGINE_CONFIG_PATH, ENV_ENGINE_CONFIG_PATH, ENV_WORKERS};
