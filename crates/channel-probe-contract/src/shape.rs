// crates/channel-probe-contract/src/shape.rs
// ============================================================================
// Module: Response Shapes
// Description: Error envelope model and success-body shape checks.
// Purpose: Decode `error.details` and verify the created-channel envelope.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! 400 and 500 responses share `{error: {details: [..]}}`. A 201 carries
//! `{ok: true, includes, data: {channel, channelMetadata}}`; the inner objects
//! are opaque to the probe and only their presence is checked.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Wrapper object of 400/500 responses.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrorEnvelope {
    /// Error payload.
    pub error: ErrorBody,
}

/// Error payload carrying ordered details.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrorBody {
    /// Ordered human-readable failure strings.
    pub details: Vec<String>,
    /// Any additional fields the server includes.
    #[serde(default, flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorEnvelope {
    /// Builds an envelope carrying only `details`.
    #[must_use]
    pub fn from_details(details: Vec<String>) -> Self {
        Self {
            error: ErrorBody {
                details,
                extra: Map::new(),
            },
        }
    }
}

/// Shape violations in a response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Body is not a JSON object.
    #[error("response body is not a json object")]
    NotAnObject,
    /// A required key is absent.
    #[error("response body is missing `{0}`")]
    MissingField(&'static str),
    /// `ok` is present but not `true`.
    #[error("response field `ok` is not true")]
    NotOk,
    /// `error.details` is absent or not a list of strings.
    #[error("response error details are malformed: {0}")]
    MalformedDetails(String),
}

// ============================================================================
// SECTION: Checks
// ============================================================================

/// Verifies the created-channel success envelope.
///
/// # Errors
///
/// Returns [`ShapeError`] naming the first missing or wrong field.
pub fn check_created_body(body: &Value) -> Result<(), ShapeError> {
    let object = body.as_object().ok_or(ShapeError::NotAnObject)?;
    match object.get("ok") {
        None => return Err(ShapeError::MissingField("ok")),
        Some(Value::Bool(true)) => {}
        Some(_) => return Err(ShapeError::NotOk),
    }
    if !object.contains_key("includes") {
        return Err(ShapeError::MissingField("includes"));
    }
    let data = object
        .get("data")
        .and_then(Value::as_object)
        .ok_or(ShapeError::MissingField("data"))?;
    if !data.contains_key("channel") {
        return Err(ShapeError::MissingField("data.channel"));
    }
    if !data.contains_key("channelMetadata") {
        return Err(ShapeError::MissingField("data.channelMetadata"));
    }
    Ok(())
}

/// Extracts `error.details` from an error response body.
///
/// # Errors
///
/// Returns [`ShapeError`] when the body does not carry a details list.
pub fn error_details(body: &Value) -> Result<Vec<String>, ShapeError> {
    if !body.is_object() {
        return Err(ShapeError::NotAnObject);
    }
    if body.get("error").is_none() {
        return Err(ShapeError::MissingField("error"));
    }
    let envelope: ErrorEnvelope = serde_json::from_value(body.clone())
        .map_err(|err| ShapeError::MalformedDetails(err.to_string()))?;
    Ok(envelope.error.details)
}
