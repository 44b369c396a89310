//! Response builders for proxy-integration results.

use serde_json::{Value, json};
use tracing::error;

use crate::core::models::ApiResponse;
use crate::errors::GENERIC_FAILURE_MESSAGE;

const ALLOWED_METHODS: &str = "POST, OPTIONS";

fn default_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": ALLOWED_METHODS,
        "Access-Control-Allow-Headers": "Content-Type",
    })
}

/// Wraps a gateway response in the proxy result shape.
#[must_use]
pub fn json_response(response: &ApiResponse) -> Value {
    let body = match serde_json::to_string(&response.body) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            return err_response(500, GENERIC_FAILURE_MESSAGE);
        }
    };

    json!({
        "statusCode": response.status,
        "headers": default_headers(),
        "body": body,
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": default_headers(),
        "body": json!({ "error": message }).to_string()
    })
}

/// Returns a 204 for CORS preflight requests.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 204,
        "headers": default_headers(),
        "body": ""
    })
}
