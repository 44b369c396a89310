//! Generation provider client module
//!
//! Wraps the Gemini `generateContent` REST call behind [`GenerationProvider`]
//! so the gateway can be exercised against a stub.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};
use url::Url;

use crate::core::models::GenerationConfig;
use crate::errors::ProviderError;

/// Extra attempts for requests that never reached the provider.
const CONNECT_RETRIES: usize = 2;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// One content-generation call against a hosted model.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Returns the generated text, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] carrying the provider's message and, when
    /// the provider answered, its HTTP status.
    async fn generate(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, ProviderError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl GenerateContentResponse {
    fn into_text(self) -> Result<String, ProviderError> {
        if self.candidates.is_empty()
            && let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason)
        {
            return Err(ProviderError::new(format!(
                "Text not available. Response was blocked due to {reason}"
            )));
        }

        let text = self
            .candidates
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
            .unwrap_or_default();

        Ok(text)
    }
}

/// Gemini REST client. The credential is supplied per call.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_base: String,
    timeout: Duration,
}

impl GeminiClient {
    #[must_use]
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_base: api_base.into(),
            timeout,
        }
    }

    fn endpoint(&self, model: &str) -> Result<Url, ProviderError> {
        let raw = format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            model
        );
        Url::parse(&raw).map_err(|e| ProviderError::new(format!("Invalid endpoint {raw}: {e}")))
    }

    async fn send_with_retry(
        &self,
        url: &Url,
        api_key: &str,
        body: &GenerateContentRequest<'_>,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let strategy = ExponentialBackoff::from_millis(10)
            .map(jitter)
            .take(CONNECT_RETRIES);

        let client: &Client = &HTTP_CLIENT;
        let timeout = self.timeout;

        RetryIf::spawn(
            strategy,
            move || async move {
                client
                    .post(url.clone())
                    .timeout(timeout)
                    .header("x-goog-api-key", api_key)
                    .json(body)
                    .send()
                    .await
            },
            |e: &reqwest::Error| {
                let retry = e.is_connect();
                if retry {
                    warn!("Provider connection failed, retrying: {}", e);
                }
                retry
            },
        )
        .await
    }
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, ProviderError> {
        let url = self.endpoint(model)?;
        let body = GenerateContentRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: config,
        };

        debug!(model = %model, "Calling generateContent");

        let response = self.send_with_retry(&url, api_key, &body).await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(provider_error_from_body(status.as_u16(), &error_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            ProviderError::new(format!("Failed to parse generateContent response: {e}"))
        })?;

        parsed.into_text()
    }
}

/// Builds a [`ProviderError`] from a non-2xx body, keeping the provider's own
/// wording so the classifier can see it.
fn provider_error_from_body(status: u16, body: &str) -> ProviderError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if envelope.error.status.is_empty() => {
            ProviderError::with_status(format!("[{status}] {}", envelope.error.message), status)
        }
        Ok(envelope) => ProviderError::with_status(
            format!(
                "[{status} {}] {}",
                envelope.error.status, envelope.error.message
            ),
            status,
        ),
        Err(_) => ProviderError::with_status(format!("[{status}] {}", body.trim()), status),
    }
}
