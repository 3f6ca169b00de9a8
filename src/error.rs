//! Error types for Being Buddy.

use std::time::Duration;

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}. {hint}")]
    MissingRequired { key: String, hint: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// HTTP channel errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel {name} failed to start: {reason}")]
    StartupFailed { name: String, reason: String },
}

/// Generative-model augmentation errors.
///
/// These never reach a client: every caller falls back to the deterministic
/// pipeline when augmentation fails.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Provider {provider} rate limited, retry after {retry_after:?}")]
    RateLimited {
        provider: String,
        retry_after: Option<Duration>,
    },

    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence errors.
///
/// The in-memory store never produces these; the variant exists so a durable
/// backend can fail recoverably and abort event assembly without a partial
/// write.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store backend error: {reason}")]
    Backend { reason: String },
}

/// Agent-layer errors surfaced to the channel.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("No conversation text provided")]
    EmptyInput,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
