use anyhow::{ensure, Context, Result};

use crate::generation::selector::SelectionPolicy;
use crate::models::guide::DEFAULT_QUESTION_COUNT;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub default_question_count: usize,
    pub max_question_count: usize,
    pub selection_policy: SelectionPolicy,
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_question_count: DEFAULT_QUESTION_COUNT,
            max_question_count: 25,
            selection_policy: SelectionPolicy::default(),
            rng_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: parse_env("PORT")?.unwrap_or(defaults.port),
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            default_question_count: parse_env("GUIDE_DEFAULT_QUESTION_COUNT")?
                .unwrap_or(defaults.default_question_count),
            max_question_count: parse_env("GUIDE_MAX_QUESTION_COUNT")?
                .unwrap_or(defaults.max_question_count),
            selection_policy: parse_env("GUIDE_SELECTION_POLICY")?
                .unwrap_or(defaults.selection_policy),
            rng_seed: parse_env("GUIDE_RNG_SEED")?,
        };

        ensure!(
            config.default_question_count >= 1,
            "GUIDE_DEFAULT_QUESTION_COUNT must be at least 1"
        );
        ensure!(
            config.max_question_count >= config.default_question_count,
            "GUIDE_MAX_QUESTION_COUNT ({}) must not be below GUIDE_DEFAULT_QUESTION_COUNT ({})",
            config.max_question_count,
            config.default_question_count
        );

        Ok(config)
    }
}

/// Reads and parses an optional variable. Unset is `None`; unparsable is an error.
fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(None),
    }
}
