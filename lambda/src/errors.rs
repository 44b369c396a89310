use thiserror::Error;

use crate::ai::classify::{ErrorClassification, classify_message};

/// Caller-facing messages. Provider detail never leaves the server logs.
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "API key is not configured. Please set GOOGLE_API_KEY in your environment variables.";
pub const NO_TEXT_MESSAGE: &str = "No text provided";
pub const INVALID_CREDENTIAL_MESSAGE: &str =
    "Invalid API key. Please check your GOOGLE_API_KEY configuration.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to summarize. Please try again later.";
pub const NO_MODEL_AVAILABLE_MESSAGE: &str =
    "Model configuration error. None of the configured models are available.";
pub const MODEL_CONFIGURATION_MESSAGE: &str =
    "Model configuration error. Please check the model name and availability.";

/// Error raised by a generation provider call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
    /// HTTP status reported by the provider, when the call got that far.
    pub status: Option<u16>,
}

impl ProviderError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    #[must_use]
    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        // The URL names the model, which would read as a model problem.
        let status = error.status().map(|s| s.as_u16());
        Self {
            message: format!("Provider request failed: {}", error.without_url()),
            status,
        }
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("GOOGLE_API_KEY is not set")]
    MissingCredential,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Provider rejected the credential: {0}")]
    Credential(ProviderError),

    #[error("No configured model is available (last error: {})", .last.as_ref().map_or("none", |e| e.message.as_str()))]
    ModelUnavailable { last: Option<ProviderError> },

    #[error("Provider failure: {0}")]
    Provider(ProviderError),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl GatewayError {
    /// Wraps anything that escaped the normal flow so it can still be mapped
    /// onto the public status scheme.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        GatewayError::Unexpected(message.into())
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Validation(_) => 400,
            GatewayError::Credential(_) => 401,
            GatewayError::Unexpected(message) => {
                if classify_message(message, None) == ErrorClassification::InvalidCredential {
                    401
                } else {
                    500
                }
            }
            GatewayError::MissingCredential
            | GatewayError::Configuration(_)
            | GatewayError::ModelUnavailable { .. }
            | GatewayError::Provider(_) => 500,
        }
    }

    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            GatewayError::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            GatewayError::Configuration(_) => GENERIC_FAILURE_MESSAGE,
            GatewayError::Validation(_) => NO_TEXT_MESSAGE,
            GatewayError::Credential(_) => INVALID_CREDENTIAL_MESSAGE,
            GatewayError::ModelUnavailable { .. } => NO_MODEL_AVAILABLE_MESSAGE,
            GatewayError::Provider(_) => GENERIC_FAILURE_MESSAGE,
            GatewayError::Unexpected(message) => match classify_message(message, None) {
                ErrorClassification::InvalidCredential => INVALID_CREDENTIAL_MESSAGE,
                ErrorClassification::ModelUnavailable => MODEL_CONFIGURATION_MESSAGE,
                ErrorClassification::MissingCredential
                | ErrorClassification::UnknownProviderFailure => GENERIC_FAILURE_MESSAGE,
            },
        }
    }
}
