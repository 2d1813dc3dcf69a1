//! Gemini HTTP client

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CompletionProvider;

/// Header carrying the API key. The key must never appear in a URL.
const API_KEY_HEADER: &str = "x-goog-api-key";
use crate::config::Config;
use crate::error::{OrchestratorError, Result};

/// Client for the `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds a client from configuration. Fails without an API key.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.gemini_api_key.clone().ok_or_else(|| {
            OrchestratorError::InvalidRequest("GEMINI_API_KEY is not set".to_string())
        })?;
        Ok(Self::new(api_key, &config.gemini_model, &config.gemini_base_url))
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn generate(&self, parts: Vec<Part>) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content { parts }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                OrchestratorError::RemoteCall(format!("HTTP request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ApiErrorBody>(&error_text)
                .map(|body| body.error.message)
                .unwrap_or(error_text);
            return Err(OrchestratorError::RemoteCall(format!(
                "status {}: {}",
                status.as_u16(),
                message
            )));
        }

        let decoded: GenerateResponse = response
            .json()
            .await
            .map_err(|e| {
                OrchestratorError::RemoteCall(format!(
                    "Failed to parse response: {}",
                    e.without_url()
                ))
            })?;

        let text = decoded.text();
        debug!(model = %self.model, chars = text.len(), "Completion received");
        if text.is_empty() {
            return Err(OrchestratorError::RemoteCall(
                "Response contained no text".to_string(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.generate(vec![Part::text(prompt)]).await
    }

    async fn complete_with_image(
        &self,
        prompt: &str,
        image: &[u8],
        mime_type: &str,
    ) -> Result<String> {
        self.generate(vec![
            Part::text(prompt),
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.to_string(),
                    data: STANDARD.encode(image),
                },
            },
        ])
        .await
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

// == Wire types ==
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

impl Part {
    fn text(text: &str) -> Self {
        Part::Text {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// Text parts of the first candidate, concatenated.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| match p {
                        Part::Text { text } => Some(text.as_str()),
                        Part::InlineData { .. } => None,
                    })
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}
