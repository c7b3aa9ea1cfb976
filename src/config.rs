//! Runtime configuration for the remote LLM analyzer
//!
//! Values come from the environment and can be overridden on the command line.

use std::time::Duration;

pub const ENV_API_KEY: &str = "GROQ_API_KEY";
pub const ENV_LLM_URL: &str = "SENTISCORE_LLM_URL";
pub const ENV_LLM_MODEL: &str = "SENTISCORE_LLM_MODEL";
pub const ENV_LLM_TIMEOUT_SECS: &str = "SENTISCORE_LLM_TIMEOUT_SECS";

pub const DEFAULT_LLM_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Settings for an OpenAI-compatible chat completions endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteConfig {
    /// Chat completions URL
    pub endpoint: String,
    pub model: String,
    /// Bearer token; without one the remote path always falls back
    pub api_key: Option<String>,
    /// Bound on the whole request, connect through body
    pub timeout: Duration,
    pub temperature: f64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_LLM_URL.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            temperature: 0.1,
        }
    }
}

impl RemoteConfig {
    /// Build from environment variables, defaulting anything unset
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_LLM_URL) {
            config.endpoint = url;
        }
        if let Some(model) = non_empty(ENV_LLM_MODEL) {
            config.model = model;
        }
        config.api_key = non_empty(ENV_API_KEY);
        if let Some(secs) = non_empty(ENV_LLM_TIMEOUT_SECS).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs);
        }

        config
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RemoteConfig::from_lookup(|_| None);
        assert_eq!(config, RemoteConfig::default());
        assert!(!config.has_api_key());
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_env_overrides() {
        let config = RemoteConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "secret"),
            (ENV_LLM_URL, "http://localhost:8080/v1/chat/completions"),
            (ENV_LLM_MODEL, "local-model"),
            (ENV_LLM_TIMEOUT_SECS, "3"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.endpoint, "http://localhost:8080/v1/chat/completions");
        assert_eq!(config.model, "local-model");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_and_invalid_values_ignored() {
        let config = RemoteConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "  "),
            (ENV_LLM_TIMEOUT_SECS, "soon"),
        ]));
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_builders() {
        let config = RemoteConfig::default()
            .with_endpoint("http://127.0.0.1:1")
            .with_model("m")
            .with_api_key("k")
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.endpoint, "http://127.0.0.1:1");
        assert_eq!(config.model, "m");
        assert!(config.has_api_key());
        assert_eq!(config.timeout, Duration::from_millis(250));
    }
}
