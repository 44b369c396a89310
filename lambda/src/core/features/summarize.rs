use tracing::{error, info, warn};

use crate::ai::{ErrorClassification, GenerationProvider, classify_provider_error};
use crate::core::config::AppConfig;
use crate::core::models::{ApiResponse, EMPTY_SUMMARY, GenerationConfig, SummarizeRequest};
use crate::errors::GatewayError;
use crate::prompt::build_summary_prompt;

/// Summarizes a raw JSON request body.
///
/// Always produces exactly one of `{ summary }` or `{ error }` with its status.
pub async fn summarize<P>(config: &AppConfig, provider: &P, raw_body: &str) -> ApiResponse
where
    P: GenerationProvider + ?Sized,
{
    match summarize_body(config, provider, raw_body).await {
        Ok(summary) => ApiResponse::summary(summary),
        Err(e) => error_response(&e),
    }
}

/// Maps a gateway error onto the sanitized caller-facing response.
#[must_use]
pub fn error_response(error: &GatewayError) -> ApiResponse {
    ApiResponse::error(error.status_code(), error.public_message())
}

/// # Errors
///
/// Fails with the [`GatewayError`] variant matching the first terminal
/// condition: missing credential, invalid payload, rejected credential,
/// terminal provider failure, or every candidate unavailable.
pub async fn summarize_body<P>(
    config: &AppConfig,
    provider: &P,
    raw_body: &str,
) -> Result<String, GatewayError>
where
    P: GenerationProvider + ?Sized,
{
    let api_key = require_credential(config)?;
    let text = extract_text(raw_body)?;
    let prompt = build_summary_prompt(&text);

    #[cfg(feature = "debug-logs")]
    info!("Using summary prompt:\n{}", prompt);

    #[cfg(not(feature = "debug-logs"))]
    info!(prompt_chars = prompt.chars().count(), "Built summary prompt");

    generate_with_fallback(
        provider,
        api_key,
        &config.model_candidates,
        &prompt,
        &config.generation,
    )
    .await
}

/// Returns the configured credential. Runs before anything looks at the body.
///
/// # Errors
///
/// Returns [`GatewayError::MissingCredential`] when `GOOGLE_API_KEY` is unset.
pub fn require_credential(config: &AppConfig) -> Result<&str, GatewayError> {
    config.google_api_key.as_deref().ok_or_else(|| {
        error!("GOOGLE_API_KEY is not configured");
        GatewayError::MissingCredential
    })
}

/// Pulls a non-blank `text` out of the request body.
///
/// # Errors
///
/// Returns [`GatewayError::Validation`] for malformed JSON, a missing or
/// non-string `text`, or text that is empty after trimming.
pub fn extract_text(raw_body: &str) -> Result<String, GatewayError> {
    let request: SummarizeRequest = serde_json::from_str(raw_body).map_err(|e| {
        warn!("Rejecting request body: {}", e);
        GatewayError::Validation(format!("invalid JSON body: {e}"))
    })?;

    match request.text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => {
            warn!("Rejecting request: text is missing or blank");
            Err(GatewayError::Validation("text is missing or blank".to_string()))
        }
    }
}

/// Tries each candidate in order until one answers.
///
/// Only an unavailable model moves on to the next candidate. Attempts are
/// sequential; the next one starts only after the previous one failed.
///
/// # Errors
///
/// Returns [`GatewayError::Credential`] or [`GatewayError::Provider`] on the
/// first terminal failure, or [`GatewayError::ModelUnavailable`] once the
/// list is exhausted.
pub async fn generate_with_fallback<P>(
    provider: &P,
    api_key: &str,
    candidates: &[String],
    prompt: &str,
    generation: &GenerationConfig,
) -> Result<String, GatewayError>
where
    P: GenerationProvider + ?Sized,
{
    let mut last_error = None;

    for model in candidates {
        match provider.generate(api_key, model, prompt, generation).await {
            Ok(text) => {
                info!(model = %model, "Summary generated");
                if text.is_empty() {
                    return Ok(EMPTY_SUMMARY.to_string());
                }
                return Ok(text);
            }
            Err(e) => {
                let classification = classify_provider_error(&e);
                if classification.is_retryable() {
                    warn!(model = %model, error = %e, "Model unavailable, trying fallback");
                    last_error = Some(e);
                    continue;
                }

                if classification == ErrorClassification::InvalidCredential {
                    error!(model = %model, error = %e, "Provider rejected the API key");
                    return Err(GatewayError::Credential(e));
                }

                error!(model = %model, error = %e, "Provider call failed");
                return Err(GatewayError::Provider(e));
            }
        }
    }

    let exhausted = GatewayError::ModelUnavailable { last: last_error };
    error!(candidates = candidates.len(), "{}", exhausted);
    Err(exhausted)
}
