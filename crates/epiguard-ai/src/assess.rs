//! Environmental reading in, validated risk report out.

use epiguard_core::{EnvironmentalInput, RiskReport, risk_report_schema};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::AssessorSettings;
use crate::error::{AssessmentError, TransportError};
use crate::generator::{GenerateRequest, GenerationOptions, TextGenerator};
use crate::prompt::build_prompt;

/// Longest reply excerpt written to the log when a reply fails to parse.
const REPLY_PREVIEW_CHARS: usize = 200;

/// Assesses outbreak risk by asking a generative model.
///
/// Holds no per-call state: concurrent [`assess`](Self::assess) calls do not
/// interact.
pub struct RiskAssessmentClient<G> {
    generator: G,
    settings: AssessorSettings,
    schema: Value,
    options: GenerationOptions,
}

impl<G: TextGenerator> RiskAssessmentClient<G> {
    pub fn new(generator: G, settings: AssessorSettings) -> Self {
        let options = GenerationOptions {
            temperature: settings.temperature,
            ..GenerationOptions::default()
        };
        Self {
            generator,
            settings,
            schema: risk_report_schema(),
            options,
        }
    }

    pub fn settings(&self) -> &AssessorSettings {
        &self.settings
    }

    /// Run one assessment.
    ///
    /// Fails fast with [`AssessmentError::Configuration`] when no API key is
    /// set; the generator is not called in that case.
    pub async fn assess(&self, input: &EnvironmentalInput) -> Result<RiskReport, AssessmentError> {
        let result = self.try_assess(input).await;
        match &result {
            Ok(report) => info!(
                location = %input.location,
                risk_level = %report.risk_level,
                "assessment complete"
            ),
            Err(e) => warn!(
                location = %input.location,
                kind = e.kind().as_str(),
                error = %e,
                "assessment failed"
            ),
        }
        result
    }

    async fn try_assess(&self, input: &EnvironmentalInput) -> Result<RiskReport, AssessmentError> {
        let api_key = self
            .settings
            .api_key
            .as_ref()
            .ok_or_else(|| AssessmentError::Configuration("API key is missing".to_string()))?;

        let prompt = build_prompt(input);
        info!(location = %input.location, model = %self.settings.model, "requesting assessment");

        let request = GenerateRequest {
            api_key,
            model: &self.settings.model,
            prompt: &prompt,
            schema: &self.schema,
            options: &self.options,
        };
        let text = tokio::time::timeout(self.settings.timeout, self.generator.generate(request))
            .await
            .map_err(|_| TransportError::Timeout(self.settings.timeout))??;

        if text.trim().is_empty() {
            return Err(AssessmentError::EmptyResponse);
        }

        RiskReport::from_model_text(&text).map_err(|e| {
            let preview: String = text.chars().take(REPLY_PREVIEW_CHARS).collect();
            warn!(reply = %preview, "unparseable model reply");
            AssessmentError::MalformedResponse(e.to_string())
        })
    }
}
