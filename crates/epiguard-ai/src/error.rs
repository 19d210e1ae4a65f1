use std::time::Duration;

use thiserror::Error;

/// The only failure copy shown to users, whatever went wrong.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to generate assessment. Please check your connection and try again.";

/// Failure talking to the generative-model service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("no reply within {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}

/// Cause of an [`AssessmentError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Transport,
    EmptyResponse,
    MalformedResponse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Transport => "transport",
            Self::EmptyResponse => "empty_response",
            Self::MalformedResponse => "malformed_response",
        }
    }
}

impl AssessmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Transport(_) => ErrorKind::Transport,
            Self::EmptyResponse => ErrorKind::EmptyResponse,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// Only transport failures are worth a retry; nothing retries automatically.
    pub fn is_retryable(&self) -> bool {
        match self.kind() {
            ErrorKind::Transport => true,
            ErrorKind::Configuration | ErrorKind::EmptyResponse | ErrorKind::MalformedResponse => {
                false
            }
        }
    }

    /// User-facing copy. Identical for every kind.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}
