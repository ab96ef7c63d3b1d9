// Process-scoped configuration for the abbreviation extractor.
// Built once at startup and passed explicitly to the resolver.

use std::time::Duration;
use thiserror::Error;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "ABBREX_MODEL";
pub const TIMEOUT_VAR: &str = "ABBREX_TIMEOUT_SECS";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("No API key found: set OPENAI_API_KEY in the environment")]
    MissingApiKey,

    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Bearer credential for the completion service
    pub api_key: String,

    /// API root, without the trailing `/chat/completions`
    pub base_url: String,

    /// Model identifier (default gpt-3.5-turbo)
    pub model: String,

    /// Sampling temperature; 0.0 for greedy decoding
    pub temperature: f32,

    /// Output token budget: per candidate, clamped to [min, max]
    pub per_abbreviation_tokens: u32,
    pub min_output_tokens: u32,
    pub max_output_tokens: u32,

    /// Request timeout; None waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.0,
            per_abbreviation_tokens: 40,
            min_output_tokens: 200,
            max_output_tokens: 4096,
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        let mut config = Config {
            api_key,
            ..Config::default()
        };

        if let Some(base_url) = get(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Some(model) = get(MODEL_VAR) {
            config.model = model;
        }
        if let Some(raw) = get(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Output budget large enough to cover every candidate's expansion.
    pub fn max_tokens_for(&self, candidates: usize) -> u32 {
        let wanted = (candidates as u64).saturating_mul(self.per_abbreviation_tokens as u64);
        wanted.clamp(self.min_output_tokens as u64, self.max_output_tokens as u64) as u32
    }
}
