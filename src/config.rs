use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL_STANDARD: &str = "gemini-2.5-flash";
pub const DEFAULT_MODEL_THINKING: &str = "gemini-2.5-pro";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Provider
    pub gemini: GeminiConfig,
}

/// Knobs for the two model configurations and the provider endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub base_url: String,
    pub standard_model: String,
    pub thinking_model: String,

    // Standard mode
    pub max_output_tokens: u32,
    pub temperature: f32,

    // Thinking mode
    pub thinking_budget: u32,

    /// Whole-request timeout for provider calls; `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            standard_model: DEFAULT_MODEL_STANDARD.to_string(),
            thinking_model: DEFAULT_MODEL_THINKING.to_string(),
            max_output_tokens: 1000,
            temperature: 0.7,
            thinking_budget: 16384,
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = GeminiConfig::default();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 3000)?,

            gemini: GeminiConfig {
                base_url: env::var("GEMINI_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.base_url),
                standard_model: env::var("GEMINI_MODEL_STANDARD")
                    .unwrap_or(defaults.standard_model),
                thinking_model: env::var("GEMINI_MODEL_THINKING")
                    .unwrap_or(defaults.thinking_model),
                max_output_tokens: parse_var("GEMINI_MAX_OUTPUT_TOKENS", defaults.max_output_tokens)?,
                temperature: parse_var("GEMINI_TEMPERATURE", defaults.temperature)?,
                thinking_budget: parse_var("GEMINI_THINKING_BUDGET", defaults.thinking_budget)?,
                timeout_secs: match env::var("GEMINI_TIMEOUT_SECS") {
                    Ok(raw) => Some(
                        raw.parse()
                            .with_context(|| format!("GEMINI_TIMEOUT_SECS is not a number: {raw}"))?,
                    ),
                    Err(_) => None,
                },
            },
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_standard_profile() {
        let gemini = GeminiConfig::default();
        assert_eq!(gemini.max_output_tokens, 1000);
        assert_eq!(gemini.temperature, 0.7);
        assert_eq!(gemini.thinking_budget, 16384);
        assert!(gemini.timeout_secs.is_none());
    }

    #[test]
    fn test_parse_var_falls_back_when_unset() {
        let value: u16 = parse_var("STOREFRONT_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
