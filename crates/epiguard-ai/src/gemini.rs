//! HTTP client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::DEFAULT_BASE_URL;
use crate::error::TransportError;
use crate::generator::{GenerateRequest, TextGenerator};

/// [`TextGenerator`] backed by the generative-language REST API.
pub struct GeminiGenerator {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
    temperature: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

impl GeminiGenerator {
    /// Create a client for the given API base URL, e.g.
    /// `https://generativelanguage.googleapis.com` (trailing slash optional).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Bound every request, connect to last byte.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, TransportError> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        self.timeout = Some(timeout);
        Ok(self)
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        match self.timeout {
            Some(limit) if err.is_timeout() => TransportError::Timeout(limit),
            _ => TransportError::Http(err),
        }
    }
}

impl Default for GeminiGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts joined. Empty if there is none.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, request: GenerateRequest<'_>) -> Result<String, TransportError> {
        let url = self.endpoint(request.model);
        let body = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [Part {
                    text: request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: request.options.response_mime_type,
                response_schema: request.schema,
                temperature: request.options.temperature,
            },
        };

        debug!(url = %url, "sending generateContent request");
        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", request.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TransportError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let data: GenerateContentResponse = resp.json().await.map_err(|e| self.classify(e))?;
        if let Some(usage) = &data.usage_metadata {
            info!(
                prompt = usage.prompt_token_count,
                completion = usage.candidates_token_count,
                total = usage.total_token_count,
                "token usage"
            );
        }
        Ok(data.into_text())
    }
}
