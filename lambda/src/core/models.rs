use serde::{Deserialize, Serialize};

/// Fallback summary when the provider answers with no text.
pub const EMPTY_SUMMARY: &str = "No summary returned.";

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Sampling parameters sent with every candidate attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 100,
        }
    }
}

/// JSON body returned to the caller: either a summary or an error, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SummarizeResponse {
    Summary { summary: String },
    Error { error: String },
}

/// Status code paired with the body it travels with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: SummarizeResponse,
}

impl ApiResponse {
    #[must_use]
    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: SummarizeResponse::Summary {
                summary: summary.into(),
            },
        }
    }

    #[must_use]
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: SummarizeResponse::Error {
                error: message.into(),
            },
        }
    }
}
