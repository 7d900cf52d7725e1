//! AI provider configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which provider voices the garments
    #[serde(default)]
    pub provider: ProviderKind,

    /// Model name; falls back to the provider's default when unset
    pub model: Option<String>,

    /// OpenAI API key
    pub openai_api_key: Option<SecretString>,

    /// Anthropic API key
    pub anthropic_api_key: Option<SecretString>,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// Anthropic API base URL
    #[serde(default = "default_anthropic_base_url")]
    pub anthropic_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum tokens per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Provider calls allowed per dialogue turn
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    OpenAI,
    Anthropic,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "gpt-4o",
            ProviderKind::Anthropic => "claude-sonnet-4-20250514",
        }
    }
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Model to request, defaulting per provider
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Check if Anthropic is configured
    pub fn has_anthropic(&self) -> bool {
        self.anthropic_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.provider {
            ProviderKind::OpenAI if !self.has_openai() => {
                return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
            }
            ProviderKind::Anthropic if !self.has_anthropic() => {
                return Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"));
            }
            _ => {}
        }

        if !is_http_url(&self.openai_base_url) {
            return Err(ValidationError::InvalidBaseUrl("openai"));
        }
        if !is_http_url(&self.anthropic_base_url) {
            return Err(ValidationError::InvalidBaseUrl("anthropic"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if !(1..=20).contains(&self.max_steps) {
            return Err(ValidationError::InvalidMaxSteps);
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model: None,
            openai_api_key: None,
            anthropic_api_key: None,
            openai_base_url: default_openai_base_url(),
            anthropic_base_url: default_anthropic_base_url(),
            timeout_secs: default_timeout(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            max_steps: default_max_steps(),
        }
    }
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_anthropic_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_steps() -> u32 {
    6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn openai_config() -> AiConfig {
        AiConfig {
            openai_api_key: Some(SecretString::new("sk-xxx".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.provider, ProviderKind::OpenAI);
        assert_eq!(config.model(), "gpt-4o");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_steps, 6);
    }

    #[test]
    fn test_model_defaults_per_provider() {
        let config = AiConfig {
            provider: ProviderKind::Anthropic,
            ..Default::default()
        };
        assert_eq!(config.model(), "claude-sonnet-4-20250514");

        let config = AiConfig {
            model: Some("gpt-4o-mini".to_string()),
            ..Default::default()
        };
        assert_eq!(config.model(), "gpt-4o-mini");
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 30,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_has_provider_checks() {
        let config = AiConfig {
            anthropic_api_key: Some(SecretString::new(String::new())),
            ..openai_config()
        };
        assert!(config.has_openai());
        assert!(!config.has_anthropic());
    }

    #[test]
    fn test_validation_selected_provider_needs_key() {
        assert_eq!(
            AiConfig::default().validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        );

        let config = AiConfig {
            provider: ProviderKind::Anthropic,
            ..openai_config()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"))
        );
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(openai_config().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_tuning() {
        let config = AiConfig {
            temperature: 3.0,
            ..openai_config()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTemperature));

        let config = AiConfig {
            max_steps: 0,
            ..openai_config()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxSteps));

        let config = AiConfig {
            max_tokens: 0,
            ..openai_config()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxTokens));

        let config = AiConfig {
            openai_base_url: "api.openai.com".to_string(),
            ..openai_config()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl("openai")));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let rendered = format!("{:?}", openai_config());
        assert!(!rendered.contains("sk-xxx"));
    }
}
