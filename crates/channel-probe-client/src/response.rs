// crates/channel-probe-client/src/response.rs
// ============================================================================
// Module: API Responses
// Description: Status plus decoded body of a chat API response.
// Purpose: Give assertions one view over bare-string and JSON bodies.
// Dependencies: channel-probe-contract, serde, serde_json
// ============================================================================

//! ## Overview
//! Authentication failures come back as bare strings while every other
//! response is JSON. [`ResponseBody::parse`] decodes both; a JSON string
//! literal is normalized to [`ResponseBody::Text`] so the two encodings of
//! the same message compare equal.

use channel_probe_contract::ShapeError;
use channel_probe_contract::error_details;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Decoded response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResponseBody {
    /// Zero-length body.
    Empty,
    /// Plain text (or a JSON string literal).
    Text(String),
    /// Any other JSON document.
    Json(Value),
}

impl ResponseBody {
    /// Decodes raw response bytes.
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Self::Empty;
        }
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::String(text)) => Self::Text(text),
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// HTTP status code.
    status: u16,
    /// Decoded body.
    body: ResponseBody,
}

impl ApiResponse {
    /// Builds a response from its parts.
    #[must_use]
    pub const fn new(status: u16, body: ResponseBody) -> Self {
        Self {
            status,
            body,
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the decoded body.
    #[must_use]
    pub const fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the body text when the body is a string.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the JSON document when the body is not a bare string.
    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `error.details` from a JSON error body.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] when the body is not a JSON error envelope.
    pub fn error_details(&self) -> Result<Vec<String>, ShapeError> {
        match &self.body {
            ResponseBody::Json(value) => error_details(value),
            _ => Err(ShapeError::NotAnObject),
        }
    }

    /// Decodes the JSON body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the body is not JSON or does not
    /// match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        let value = self
            .json()
            .ok_or_else(|| ClientError::Decode("response body is not json".to_string()))?;
        serde_json::from_value(value.clone()).map_err(|err| ClientError::Decode(err.to_string()))
    }
}
