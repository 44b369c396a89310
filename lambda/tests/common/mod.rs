#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use briefly::ai::GenerationProvider;
use briefly::core::config::AppConfig;
use briefly::core::models::GenerationConfig;
use briefly::errors::ProviderError;

/// Provider stub that replays a fixed script and records every model it was
/// asked for, in call order.
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answers every call with the same text.
    pub fn always(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string()); 16])
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationProvider for ScriptedProvider {
    async fn generate(
        &self,
        _api_key: &str,
        model: &str,
        _prompt: &str,
        _config: &GenerationConfig,
    ) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(model.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::new("script exhausted")))
    }
}

pub fn config_with_key() -> AppConfig {
    AppConfig::with_api_key(Some("test-key".to_string()))
}

pub fn config_without_key() -> AppConfig {
    AppConfig::with_api_key(None)
}

pub fn model_unavailable(model: &str) -> ProviderError {
    ProviderError::with_status(
        format!("[404 NOT_FOUND] models/{model} is not found for API version v1beta"),
        404,
    )
}

pub fn overloaded() -> ProviderError {
    ProviderError::with_status("[503 UNAVAILABLE] The model is overloaded. Please try again later.", 503)
}

pub fn bad_api_key() -> ProviderError {
    ProviderError::with_status(
        "[400 INVALID_ARGUMENT] API key not valid. Please pass a valid API key.",
        400,
    )
}
