//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for various LLM providers.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Scripted mock for testing
//! - `OpenAIProvider` - OpenAI chat completions (and compatible endpoints)
//! - `AnthropicProvider` - Anthropic Messages API

mod anthropic_provider;
mod mock_provider;
mod openai_provider;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider};
pub use mock_provider::{MockAIProvider, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};

use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::config::{AiConfig, ProviderKind};
use crate::ports::{AIError, AIProvider};

/// Builds the provider selected by `config.provider`.
///
/// # Errors
///
/// Returns `AIError::AuthenticationFailed` when the selected provider has no
/// API key, or `AIError::InvalidRequest` if the HTTP client cannot be built.
pub fn build_provider(config: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    match config.provider {
        ProviderKind::OpenAI => {
            let key = config
                .openai_api_key
                .as_ref()
                .ok_or(AIError::AuthenticationFailed)?;
            let provider = OpenAIProvider::new(
                OpenAIConfig::new(key.expose_secret().clone())
                    .with_model(config.model())
                    .with_base_url(&config.openai_base_url)
                    .with_timeout(config.timeout()),
            )?;
            Ok(Arc::new(provider))
        }
        ProviderKind::Anthropic => {
            let key = config
                .anthropic_api_key
                .as_ref()
                .ok_or(AIError::AuthenticationFailed)?;
            let provider = AnthropicProvider::new(
                AnthropicConfig::new(key.expose_secret().clone())
                    .with_model(config.model())
                    .with_base_url(&config.anthropic_base_url)
                    .with_timeout(config.timeout()),
            )?;
            Ok(Arc::new(provider))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn builds_configured_provider() {
        let config = AiConfig {
            provider: ProviderKind::Anthropic,
            model: Some("claude-3-haiku-20240307".to_string()),
            anthropic_api_key: Some(SecretString::new("sk-ant".to_string())),
            ..Default::default()
        };

        let provider = build_provider(&config).unwrap();
        let info = provider.provider_info();

        assert_eq!(info.name, "anthropic");
        assert_eq!(info.model, "claude-3-haiku-20240307");
    }

    #[test]
    fn missing_key_is_an_authentication_error() {
        let result = build_provider(&AiConfig::default());
        assert!(matches!(result, Err(AIError::AuthenticationFailed)));
    }
}
