//! API Lambda handler - routes proxy events to the summarization gateway.
//!
//! This module handles:
//! - Path and method routing for `POST /api/summarize`
//! - CORS preflight
//! - Credential check, then body extraction (plain or base64)
//! - The last-resort conversion of anything unexpected into a JSON error

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::ai::{GeminiClient, GenerationProvider};
use crate::core::config::{AppConfig, api_key_from_env};
use crate::core::features::summarize::{error_response, require_credential, summarize};
use crate::errors::GatewayError;

pub use self::function_handler as handler;

pub const SUMMARIZE_ROUTE: &str = "/api/summarize";

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns `Err` for request-level problems; every outcome, including
/// configuration errors, becomes a proxy response with a JSON body.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            let failure = if api_key_from_env().is_none() {
                GatewayError::MissingCredential
            } else {
                GatewayError::Configuration(e)
            };
            return Ok(helpers::json_response(&error_response(&failure)));
        }
    };

    let provider = GeminiClient::new(config.gemini_api_base.clone(), config.request_timeout);
    Ok(route_request(&config, &provider, &event.payload).await)
}

/// Routes one proxy event. Split out from [`function_handler`] so the
/// routing can run against any provider.
pub async fn route_request<P>(config: &AppConfig, provider: &P, payload: &Value) -> Value
where
    P: GenerationProvider + ?Sized,
{
    let correlation_id = Uuid::new_v4();
    let path = parsing::request_path(payload).unwrap_or("");
    let method = parsing::request_method(payload).unwrap_or_default();
    let span = info_span!("request", %correlation_id, %path, %method);

    async move {
        if !path.ends_with(SUMMARIZE_ROUTE) {
            info!("No route for path");
            return helpers::err_response(404, "Not found");
        }

        match method.as_str() {
            "POST" => {}
            "OPTIONS" => return helpers::preflight(),
            _ => return helpers::err_response(405, "Method not allowed"),
        }

        if let Err(e) = require_credential(config) {
            return helpers::json_response(&error_response(&e));
        }

        let body = match parsing::request_body(payload) {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read request body: {}", e);
                return helpers::json_response(&error_response(&e));
            }
        };

        let outcome = AssertUnwindSafe(summarize(config, provider, &body))
            .catch_unwind()
            .await;

        let response = match outcome {
            Ok(response) => response,
            Err(panic) => {
                let e = GatewayError::unexpected(panic_message(panic.as_ref()));
                error!("Summarize request panicked: {}", e);
                error_response(&e)
            }
        };

        info!(status = response.status, "Request complete");
        helpers::json_response(&response)
    }
    .instrument(span)
    .await
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
