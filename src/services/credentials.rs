//! Provider credential lookup
//!
//! The key is looked up on every call so that setting or removing it in the
//! environment takes effect without a restart.

use std::env;

pub const PRIMARY_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const FALLBACK_KEY_VAR: &str = "GEMINI_API_KEY";

pub trait CredentialSource: Send + Sync {
    /// Returns the API key, or `None` when the service is not configured.
    fn api_key(&self) -> Option<String>;

    fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }
}

/// Reads the key from the process environment, primary name first.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    names: Vec<String>,
}

impl EnvCredentials {
    pub fn new() -> Self {
        Self::with_names([PRIMARY_KEY_VAR, FALLBACK_KEY_VAR])
    }

    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        self.names
            .iter()
            .filter_map(|name| env::var(name).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }
}

/// Fixed key, used when the key comes from somewhere other than the environment.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<String>);

impl StaticCredentials {
    pub fn new(key: Option<String>) -> Self {
        Self(key.filter(|k| !k.trim().is_empty()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_blank_key_is_missing() {
        assert!(!StaticCredentials::new(Some("   ".into())).is_configured());
        assert!(StaticCredentials::new(Some("abc".into())).is_configured());
        assert!(!StaticCredentials::missing().is_configured());
    }

    #[test]
    fn test_env_unknown_names_yield_none() {
        let creds = EnvCredentials::with_names(["STOREFRONT_TEST_NO_SUCH_KEY_A", "STOREFRONT_TEST_NO_SUCH_KEY_B"]);
        assert_eq!(creds.api_key(), None);
    }
}
