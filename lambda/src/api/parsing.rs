//! Accessors for API Gateway / Function URL proxy events (payload v1 and v2).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::GatewayError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// `rawPath` on v2 events, `path` on v1.
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Upper-cased HTTP method, from `requestContext.http.method` (v2) or
/// `httpMethod` (v1).
pub fn request_method(payload: &Value) -> Option<String> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

/// Returns the request body as text, decoding base64 when the event says so.
/// A missing or null body reads as empty.
///
/// # Errors
///
/// Returns [`GatewayError::Validation`] when a base64 body cannot be decoded
/// or is not UTF-8.
pub fn request_body(payload: &Value) -> Result<String, GatewayError> {
    let Some(body) = v_str(payload, &["body"]) else {
        return Ok(String::new());
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| GatewayError::Validation(format!("undecodable base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| GatewayError::Validation(format!("body is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_v2_and_v1_shapes() {
        let v2 = json!({"rawPath": "/api/summarize", "requestContext": {"http": {"method": "post"}}});
        assert_eq!(request_path(&v2), Some("/api/summarize"));
        assert_eq!(request_method(&v2).as_deref(), Some("POST"));

        let v1 = json!({"path": "/prod/api/summarize", "httpMethod": "POST"});
        assert_eq!(request_path(&v1), Some("/prod/api/summarize"));
        assert_eq!(request_method(&v1).as_deref(), Some("POST"));
    }

    #[test]
    fn decodes_base64_body() {
        let payload = json!({"body": "eyJ0ZXh0IjoiaGkifQ==", "isBase64Encoded": true});
        assert_eq!(request_body(&payload).unwrap(), r#"{"text":"hi"}"#);
    }

    #[test]
    fn undecodable_bodies_are_validation_errors() {
        let bad_base64 = json!({"body": "%%%", "isBase64Encoded": true});
        assert!(matches!(
            request_body(&bad_base64),
            Err(GatewayError::Validation(_))
        ));

        let not_utf8 = json!({"body": STANDARD.encode([0xff, 0xfe, 0x00]), "isBase64Encoded": true});
        assert!(matches!(
            request_body(&not_utf8),
            Err(GatewayError::Validation(_))
        ));
    }

    #[test]
    fn null_body_reads_as_empty() {
        let payload = json!({"body": null});
        assert_eq!(request_body(&payload).unwrap(), "");
    }
}
