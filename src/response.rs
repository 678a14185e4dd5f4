//! Response formatting shared by every handler.
//!
//! Every Cryptonaut Lambda answers in the API Gateway proxy shape: a status
//! code, a JSON body serialized to a string, and a header map.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::models::Response;
use crate::errors::HandlerError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Build a JSON response with the given status code and body.
///
/// The status code is passed through untouched; no range check is made.
///
/// # Errors
///
/// Returns [`HandlerError::Serialization`] if `body` cannot be represented as
/// JSON, for example a map whose keys are not strings.
///
/// # Examples
///
/// ```
/// use cryptonaut::response::format_response;
/// use serde_json::json;
///
/// let response = format_response(201, &json!({ "created": true })).unwrap();
/// assert_eq!(response.status_code, 201);
/// assert_eq!(response.body, r#"{"created":true}"#);
/// assert_eq!(response.header("Content-Type"), Some("application/json"));
/// ```
pub fn format_response<T>(status_code: i64, body: &T) -> Result<Response, HandlerError>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_string(body)?;
    let headers = BTreeMap::from([(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())]);

    Ok(Response {
        status_code,
        body,
        headers,
    })
}

/// Shorthand for a 200 response carrying `{"message": text}`.
///
/// # Errors
///
/// Never fails in practice; the signature mirrors [`format_response`].
pub fn ok_message(text: &str) -> Result<Response, HandlerError> {
    format_response(200, &serde_json::json!({ "message": text }))
}

/// Body returned by handlers that report whether their secret is wired up.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SecretStatus<'a> {
    pub message: &'a str,
    pub secret_configured: bool,
}

impl<'a> SecretStatus<'a> {
    #[must_use]
    pub fn new(message: &'a str, secret_name: Option<&str>) -> Self {
        Self {
            message,
            secret_configured: secret_name.is_some_and(|name| !name.is_empty()),
        }
    }
}
