use std::error::Error;

use briefly::errors::{
    GENERIC_FAILURE_MESSAGE, GatewayError, INVALID_CREDENTIAL_MESSAGE,
    MISSING_CREDENTIAL_MESSAGE, MODEL_CONFIGURATION_MESSAGE, NO_MODEL_AVAILABLE_MESSAGE,
    NO_TEXT_MESSAGE, ProviderError,
};

#[test]
fn test_errors_implement_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    assert_error(&ProviderError::new("boom"));
    assert_error(&GatewayError::Validation("empty".to_string()));
}

#[test]
fn test_provider_error_display_is_the_message() {
    let error = ProviderError::with_status("[503 UNAVAILABLE] The model is overloaded.", 503);
    assert_eq!(format!("{error}"), "[503 UNAVAILABLE] The model is overloaded.");
}

#[test]
fn test_status_and_message_mapping() {
    let cases = [
        (GatewayError::MissingCredential, 500, MISSING_CREDENTIAL_MESSAGE),
        (GatewayError::Configuration("GEMINI_TIMEOUT_SECS: invalid digit".into()), 500, GENERIC_FAILURE_MESSAGE),
        (GatewayError::Validation("blank".into()), 400, NO_TEXT_MESSAGE),
        (GatewayError::Credential(ProviderError::new("API key not valid")), 401, INVALID_CREDENTIAL_MESSAGE),
        (GatewayError::ModelUnavailable { last: None }, 500, NO_MODEL_AVAILABLE_MESSAGE),
        (GatewayError::Provider(ProviderError::new("socket hang up")), 500, GENERIC_FAILURE_MESSAGE),
    ];

    for (error, status, message) in cases {
        assert_eq!(error.status_code(), status, "{error}");
        assert_eq!(error.public_message(), message, "{error}");
    }
}

#[test]
fn test_unexpected_errors_use_the_same_classifier() {
    let credential = GatewayError::unexpected("Invalid API Key supplied");
    assert_eq!(credential.status_code(), 401);
    assert_eq!(credential.public_message(), INVALID_CREDENTIAL_MESSAGE);

    // Case-insensitive, unlike a plain substring check on "model".
    let model = GatewayError::unexpected("MODEL gemini-9 does not exist");
    assert_eq!(model.status_code(), 500);
    assert_eq!(model.public_message(), MODEL_CONFIGURATION_MESSAGE);

    let other = GatewayError::unexpected("stream ended early");
    assert_eq!(other.status_code(), 500);
    assert_eq!(other.public_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn test_public_messages_do_not_leak_provider_detail() {
    let error = GatewayError::Provider(ProviderError::new("secret-internal-id-123 failed"));
    assert!(!error.public_message().contains("secret-internal-id-123"));
    assert!(format!("{error}").contains("secret-internal-id-123"));
}

#[test]
fn test_exhausted_error_mentions_last_failure_in_logs() {
    let error = GatewayError::ModelUnavailable {
        last: Some(ProviderError::with_status("models/gemini-1.0-pro is not found", 404)),
    };
    assert!(format!("{error}").contains("gemini-1.0-pro"));
}
