//! Configuration for Being Buddy.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigError;

/// Main configuration for the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            server: ServerConfig::from_env()?,
            llm: LlmConfig::from_env()?,
        })
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let host = optional_env("BUDDY_HOST")?.unwrap_or_else(|| "0.0.0.0".to_string());

        let port = optional_env("BUDDY_PORT")?
            .map(|s| s.parse())
            .transpose()
            .map_err(|e| ConfigError::InvalidValue {
                key: "BUDDY_PORT".to_string(),
                message: format!("must be a port number: {e}"),
            })?
            .unwrap_or(8000);

        Ok(Self { host, port })
    }
}

/// Generative-model augmentation configuration.
///
/// The API key is optional: without it the service runs on the deterministic
/// pipeline alone, which is a fully supported mode.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<SecretString>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl LlmConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = optional_env("GEMINI_API_KEY")?.map(SecretString::from);

        let model =
            optional_env("GEMINI_MODEL")?.unwrap_or_else(|| "gemini-2.0-flash".to_string());

        let base_url = optional_env("GEMINI_BASE_URL")?
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string());

        let timeout_secs = optional_env("LLM_TIMEOUT_SECS")?
            .map(|s| s.parse())
            .transpose()
            .map_err(|e| ConfigError::InvalidValue {
                key: "LLM_TIMEOUT_SECS".to_string(),
                message: format!("must be a positive integer: {e}"),
            })?
            .unwrap_or(30u64);

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Whether augmentation is configured at all.
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Get the API key (exposes the secret).
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret())
    }
}

/// Read an environment variable, treating empty values as absent.
fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "not valid unicode".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; keep each key unique to this module
    // so parallel test binaries don't race.

    #[test]
    fn server_defaults() {
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn llm_disabled_without_api_key() {
        let config = LlmConfig {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://example.invalid".to_string(),
            timeout: Duration::from_secs(30),
        };
        assert!(!config.is_enabled());
        assert!(config.api_key().is_none());
    }

    #[test]
    fn llm_enabled_with_api_key() {
        let config = LlmConfig {
            api_key: Some(SecretString::from("test-key")),
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://example.invalid".to_string(),
            timeout: Duration::from_secs(30),
        };
        assert!(config.is_enabled());
        assert_eq!(config.api_key(), Some("test-key"));
    }

    #[test]
    fn secret_is_not_debug_printed() {
        let config = LlmConfig {
            api_key: Some(SecretString::from("super-secret")),
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://example.invalid".to_string(),
            timeout: Duration::from_secs(30),
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
    }
}
