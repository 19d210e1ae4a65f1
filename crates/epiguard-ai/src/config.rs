//! Assessment settings, read from the process environment.

use std::fmt;
use std::time::Duration;

use crate::error::AssessmentError;

pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "EPIGUARD_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "EPIGUARD_TIMEOUT_SECS";
pub const ENV_BASE_URL: &str = "EPIGUARD_BASE_URL";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Low sampling temperature: this is analysis, not creative writing.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// API credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// `None` for blank input.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct AssessorSettings {
    /// Checked on every call, before any network work.
    pub api_key: Option<ApiKey>,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
    pub base_url: String,
}

impl Default for AssessorSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AssessorSettings {
    pub fn from_env() -> Result<Self, AssessmentError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AssessmentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut settings = Self::default();
        settings.api_key = get(ENV_API_KEY)
            .or_else(|| get(ENV_GEMINI_API_KEY))
            .and_then(ApiKey::new);
        if let Some(model) = get(ENV_MODEL) {
            settings.model = model;
        }
        if let Some(base_url) = get(ENV_BASE_URL) {
            settings.base_url = base_url;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.parse().map_err(|_| {
                AssessmentError::Configuration(format!(
                    "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            if secs == 0 {
                return Err(AssessmentError::Configuration(format!(
                    "{ENV_TIMEOUT_SECS} must be greater than zero"
                )));
            }
            settings.timeout = Duration::from_secs(secs);
        }
        Ok(settings)
    }

    pub fn with_api_key(mut self, key: Option<ApiKey>) -> Self {
        self.api_key = key;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
