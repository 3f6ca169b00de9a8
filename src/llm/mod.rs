//! Generative-model augmentation.
//!
//! The deterministic pipeline never depends on anything here. An augmenter is
//! a best-effort collaborator: callers ask it for a richer conversational
//! reply and fall back to deterministic text on any failure.

mod gemini;

pub use gemini::GeminiAugmenter;

use async_trait::async_trait;

use crate::error::LlmError;

/// Trait for best-effort text generation.
#[async_trait]
pub trait TextAugmenter: Send + Sync {
    /// Model identifier, for logs and diagnostics.
    fn model_name(&self) -> &str;

    /// Generate a reply for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
