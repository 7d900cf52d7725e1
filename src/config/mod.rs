//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RED_STRING` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use red_string::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod server;

pub use ai::{AiConfig, ProviderKind};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Unprefixed variables honoured for deployments configured for the earlier
/// service. Each is a default, so the `RED_STRING__` form wins when both are set.
const FALLBACK_ENV_VARS: [(&str, &str); 5] = [
    ("DEFAULT_LLM_PROVIDER", "ai.provider"),
    ("DEFAULT_MODEL", "ai.model"),
    ("OPENAI_API_KEY", "ai.openai_api_key"),
    ("ANTHROPIC_API_KEY", "ai.anthropic_api_key"),
    ("SPOON_SERVICE_PORT", "server.port"),
];

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (OpenAI/Anthropic)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RED_STRING` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RED_STRING__SERVER__PORT=5000` -> `server.port = 5000`
    /// - `RED_STRING__AI__PROVIDER=anthropic` -> `ai.provider = anthropic`
    ///
    /// `DEFAULT_LLM_PROVIDER`, `DEFAULT_MODEL`, `OPENAI_API_KEY`,
    /// `ANTHROPIC_API_KEY` and `SPOON_SERVICE_PORT` are read as fallbacks.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        for (var, key) in FALLBACK_ENV_VARS {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_default(key, value)?;
            }
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("RED_STRING")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }
}
