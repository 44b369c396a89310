//! Provider error classification.
//!
//! Matching on provider wording is a heuristic. All of it lives here so the
//! hint lists can change without touching the fallback loop.

use crate::errors::ProviderError;

const CREDENTIAL_HINT: &str = "api key";

const MODEL_UNAVAILABLE_HINTS: &[&str] = &[
    "model",
    "models/",
    "not found",
    "not supported",
    "unknown model",
    "overloaded",
];

const NOT_FOUND_STATUS: u16 = 404;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClassification {
    MissingCredential,
    InvalidCredential,
    ModelUnavailable,
    UnknownProviderFailure,
}

impl ErrorClassification {
    /// Only an unavailable model is worth trying the next candidate for.
    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorClassification::ModelUnavailable)
    }
}

/// Classifies an error message plus an optional structured status.
///
/// Credential hints win over model hints, so a message such as
/// "API key not valid for model X" is a credential failure.
#[must_use]
pub fn classify_message(message: &str, status: Option<u16>) -> ErrorClassification {
    let lowered = message.to_lowercase();

    if lowered.contains(CREDENTIAL_HINT) {
        return ErrorClassification::InvalidCredential;
    }

    if MODEL_UNAVAILABLE_HINTS
        .iter()
        .any(|hint| lowered.contains(hint))
        || status == Some(NOT_FOUND_STATUS)
    {
        return ErrorClassification::ModelUnavailable;
    }

    ErrorClassification::UnknownProviderFailure
}

#[must_use]
pub fn classify_provider_error(error: &ProviderError) -> ErrorClassification {
    classify_message(&error.message, error.status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_hint_is_case_insensitive() {
        assert_eq!(
            classify_message("API Key not valid. Please pass a valid API key.", Some(400)),
            ErrorClassification::InvalidCredential
        );
    }

    #[test]
    fn credential_hint_beats_model_hint() {
        assert_eq!(
            classify_message("api key rejected for models/gemini-1.5-pro", Some(404)),
            ErrorClassification::InvalidCredential
        );
    }

    #[test]
    fn bare_not_found_status_means_unavailable() {
        assert_eq!(
            classify_message("Not Found", Some(404)),
            ErrorClassification::ModelUnavailable
        );
        assert_eq!(
            classify_message("[404] requested entity was missing", Some(404)),
            ErrorClassification::ModelUnavailable
        );
    }

    #[test]
    fn unrelated_failures_are_terminal() {
        let class = classify_message("connection reset by peer", None);
        assert_eq!(class, ErrorClassification::UnknownProviderFailure);
        assert!(!class.is_retryable());
    }
}
