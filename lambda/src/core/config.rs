use std::env;
use std::time::Duration;

use crate::core::models::GenerationConfig;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Tried in order: newest and cheapest first, older and more widely
/// available models after.
pub const DEFAULT_MODEL_CANDIDATES: [&str; 4] = [
    "gemini-2.0-flash",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-1.0-pro",
];

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Absent is not fatal here; each request reports it as a 500.
    pub google_api_key: Option<String>,
    pub gemini_api_base: String,
    pub model_candidates: Vec<String>,
    pub generation: GenerationConfig,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let request_timeout = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| format!("GEMINI_TIMEOUT_SECS: {e}"))?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            google_api_key: api_key_from_env(),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model_candidates: env::var("GEMINI_MODEL_CANDIDATES")
                .map(|raw| parse_model_candidates(&raw))
                .unwrap_or_else(|_| default_model_candidates()),
            generation: GenerationConfig::default(),
            request_timeout,
        })
    }

    /// Configuration with the built-in defaults and the given credential.
    #[must_use]
    pub fn with_api_key(api_key: Option<String>) -> Self {
        Self {
            google_api_key: api_key,
            gemini_api_base: DEFAULT_API_BASE.to_string(),
            model_candidates: default_model_candidates(),
            generation: GenerationConfig::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// `GOOGLE_API_KEY`, with a blank value read as unset.
#[must_use]
pub fn api_key_from_env() -> Option<String> {
    env::var("GOOGLE_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
}

#[must_use]
pub fn default_model_candidates() -> Vec<String> {
    DEFAULT_MODEL_CANDIDATES
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Comma-separated override. Blank entries are dropped and an empty list
/// falls back to the defaults.
#[must_use]
pub fn parse_model_candidates(raw: &str) -> Vec<String> {
    let parsed: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect();

    if parsed.is_empty() {
        default_model_candidates()
    } else {
        parsed
    }
}
