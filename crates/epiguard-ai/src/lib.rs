//! Outbreak risk assessment: prompt a generative model with environmental readings
//! and validate the structured report it returns.

pub mod assess;
pub mod config;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod state;

#[cfg(feature = "http")]
pub mod gemini;

pub use assess::RiskAssessmentClient;
pub use config::{ApiKey, AssessorSettings};
pub use error::{AssessmentError, ErrorKind, GENERIC_FAILURE_MESSAGE, TransportError};
pub use generator::{GenerateRequest, GenerationOptions, TextGenerator};
pub use state::AssessmentView;

#[cfg(feature = "http")]
pub use gemini::GeminiGenerator;
