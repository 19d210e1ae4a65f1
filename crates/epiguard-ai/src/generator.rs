//! The generative-model capability: prompt and schema in, reply text out.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::{ApiKey, DEFAULT_TEMPERATURE};
use crate::error::TransportError;

/// Decoding preferences passed through to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub response_mime_type: &'static str,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            response_mime_type: "application/json",
        }
    }
}

/// One outbound generation call.
#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest<'a> {
    pub api_key: &'a ApiKey,
    pub model: &'a str,
    pub prompt: &'a str,
    pub schema: &'a Value,
    pub options: &'a GenerationOptions,
}

/// Opaque text-in/text-out model service.
///
/// Implementations return the raw reply text, which may be empty. Judging
/// the text is the caller's job.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerateRequest<'_>) -> Result<String, TransportError>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, request: GenerateRequest<'_>) -> Result<String, TransportError> {
        (**self).generate(request).await
    }
}
