use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{RelayError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub data_feed: DataFeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// The single configured chat upstream. Immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub flavor: ProviderFlavor,
    /// Empty means "use the flavor's default host", resolved at load time.
    pub base_url: String,
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            flavor: ProviderFlavor::Anthropic,
            base_url: String::new(),
            model: "claude-sonnet-4-5-20250929".to_string(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderFlavor {
    OpenAI,
    Anthropic,
}

impl ProviderFlavor {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAI => "https://api.openai.com",
            Self::Anthropic => "https://api.anthropic.com",
        }
    }

    pub fn api_key_var(&self) -> &'static str {
        match self {
            Self::OpenAI => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
        }
    }
}

impl fmt::Display for ProviderFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenAI => write!(f, "openai"),
            Self::Anthropic => write!(f, "anthropic"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFeedConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for DataFeedConfig {
    fn default() -> Self {
        Self {
            url: "https://pacificcoasttitle.onrender.com/data.json".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Settings {
    /// Loads `custom-config.toml`/`config.toml` when present, then applies
    /// environment overrides (`PORT`, and the active flavor's API key var).
    pub fn load() -> Result<Self> {
        let mut settings = match Self::find_config_file() {
            Some(path) => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)
                    .map_err(|e| RelayError::Config(format!("{}: {}", path, e)))?
            }
            None => Settings::default(),
        };

        settings.apply_env_overrides();
        settings.resolve_defaults();
        settings.validate()?;
        Ok(settings)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(port) = env_var("PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(key) = env_var(self.upstream.flavor.api_key_var()) {
            self.upstream.api_key = key;
        }
    }

    fn resolve_defaults(&mut self) {
        if self.upstream.base_url.is_empty() {
            self.upstream.base_url = self.upstream.flavor.default_base_url().to_string();
        }
    }

    fn validate(&self) -> Result<()> {
        if self.upstream.api_key.is_empty() {
            return Err(RelayError::Config(format!(
                "missing API key: set `{}`",
                self.upstream.flavor.api_key_var()
            )));
        }
        Ok(())
    }

    fn find_config_file() -> Option<String> {
        ["custom-config.toml", "config.toml"]
            .iter()
            .find(|name| Path::new(name).exists())
            .map(|name| name.to_string())
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.upstream.flavor, ProviderFlavor::Anthropic);
        assert_eq!(settings.upstream.model, "claude-sonnet-4-5-20250929");
        assert_eq!(settings.data_feed.timeout_secs, 10);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            port = 8080

            [upstream]
            flavor = "openai"
            model = "gpt-4o-mini"
            api_key = "sk-test"

            [data_feed]
            url = "https://example.com/data.json"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.upstream.flavor, ProviderFlavor::OpenAI);
        assert_eq!(settings.upstream.model, "gpt-4o-mini");
        assert_eq!(settings.data_feed.url, "https://example.com/data.json");
        assert_eq!(settings.data_feed.timeout_secs, 10);
    }

    #[test]
    fn test_base_url_resolves_per_flavor() {
        let mut settings: Settings =
            toml::from_str("[upstream]\nflavor = \"openai\"\napi_key = \"sk-test\"").unwrap();
        settings.resolve_defaults();
        assert_eq!(settings.upstream.base_url, "https://api.openai.com");

        let mut settings = Settings::default();
        settings.resolve_defaults();
        assert_eq!(settings.upstream.base_url, "https://api.anthropic.com");
    }

    #[test]
    fn test_missing_api_key_is_a_config_error() {
        let settings = Settings::default();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }
}
