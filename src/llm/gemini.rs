//! Gemini `generateContent` augmenter.
//!
//! Connects to the Google Generative Language REST API. Only plain text in,
//! plain text out: no tool use, no streaming, no multi-turn state.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::llm::TextAugmenter;

/// Provider name constant to avoid magic strings.
const PROVIDER_NAME: &str = "gemini";

/// Gemini REST API augmenter.
pub struct GeminiAugmenter {
    client: Client,
    config: LlmConfig,
}

impl GeminiAugmenter {
    /// Create a new Gemini augmenter.
    ///
    /// Fails if the config carries no API key or the HTTP client cannot be
    /// built.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        if !config.is_enabled() {
            return Err(LlmError::AuthFailed {
                provider: PROVIDER_NAME.to_string(),
            });
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: format!("Failed to build reqwest client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    /// Construct the `generateContent` URL for the configured model.
    fn api_url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{}/v1beta/models/{}:generateContent", base, self.config.model)
    }
}

#[async_trait]
impl TextAugmenter for GeminiAugmenter {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = self.api_url();
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %self.config.model, "Sending generateContent request");

        let api_key = self.config.api_key().ok_or_else(|| LlmError::AuthFailed {
            provider: PROVIDER_NAME.to_string(),
        })?;

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Gemini request failed: {}", e);
                LlmError::RequestFailed {
                    provider: PROVIDER_NAME.to_string(),
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| LlmError::RequestFailed {
            provider: PROVIDER_NAME.to_string(),
            reason: format!("Failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(LlmError::AuthFailed {
                    provider: PROVIDER_NAME.to_string(),
                });
            }
            if status.as_u16() == 429 {
                return Err(LlmError::RateLimited {
                    provider: PROVIDER_NAME.to_string(),
                    retry_after: None,
                });
            }
            return Err(LlmError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: format!(
                    "HTTP {}: {}",
                    status,
                    &response_text[..response_text.len().min(200)]
                ),
            });
        }

        let response: GenerateContentResponse =
            serde_json::from_str(&response_text).map_err(|e| LlmError::InvalidResponse {
                provider: PROVIDER_NAME.to_string(),
                reason: format!(
                    "JSON parse error: {}. Raw: {}",
                    e,
                    &response_text[..response_text.len().min(200)]
                ),
            })?;

        extract_text(response)
    }
}

/// Pull the first candidate's text parts out of a response.
fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse {
            provider: PROVIDER_NAME.to_string(),
            reason: "No candidates in response".to_string(),
        })?;

    let text = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(LlmError::InvalidResponse {
            provider: PROVIDER_NAME.to_string(),
            reason: "Candidate carried no text".to_string(),
        });
    }

    Ok(text)
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn extracts_text_from_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hi "},{"text":"there"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Hi there");
    }

    #[test]
    fn empty_candidates_is_invalid_response() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(LlmError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn candidate_without_text_is_invalid_response() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(LlmError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn api_url_strips_trailing_slash() {
        let augmenter = GeminiAugmenter::new(LlmConfig {
            api_key: Some(secrecy::SecretString::from("k")),
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://example.invalid/".to_string(),
            timeout: std::time::Duration::from_secs(5),
        })
        .unwrap();
        assert_eq!(
            augmenter.api_url(),
            "https://example.invalid/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn new_requires_api_key() {
        let result = GeminiAugmenter::new(LlmConfig {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://example.invalid".to_string(),
            timeout: std::time::Duration::from_secs(5),
        });
        assert!(matches!(result, Err(LlmError::AuthFailed { .. })));
    }
}
