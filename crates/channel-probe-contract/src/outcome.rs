// crates/channel-probe-contract/src/outcome.rs
// ============================================================================
// Module: Outcome Prediction
// Description: Request classification and expected response for create-channel.
// Purpose: Walk the observed request pipeline and name its exit point.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A create-channel request passes route resolution, then the token check, then
//! the `name` trim step, then body validation. [`predict`] returns the first
//! stage that rejects the request, or [`ExpectedOutcome::Created`].
//! Invariants:
//! - Unrouted method/path pairs fail with 500 before the token is inspected.
//! - Absent and empty session headers are indistinguishable.
//! - Non-object bodies are evaluated as an empty object.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::messages::CREATE_CHANNEL_PATH;
use crate::messages::INVALID_TOKEN;
use crate::messages::TOKEN_NOT_FOUND;
use crate::messages::route_not_found_detail;
use crate::rules::normalize_body;
use crate::rules::validation_details;

// ============================================================================
// SECTION: Token Classification
// ============================================================================

/// Server-side view of the session header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenState {
    /// Header absent, empty, or whitespace.
    Missing,
    /// Header present with an unrecognized token.
    Invalid,
    /// Header carries a live session token.
    Valid,
}

impl TokenState {
    /// Returns a stable label for the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Invalid => "invalid",
            Self::Valid => "valid",
        }
    }
}

/// Classifies a raw header value against a token registry predicate.
#[must_use]
pub fn classify_token(header: Option<&str>, is_known: impl Fn(&str) -> bool) -> TokenState {
    match header.map(str::trim) {
        None | Some("") => TokenState::Missing,
        Some(token) if is_known(token) => TokenState::Valid,
        Some(_) => TokenState::Invalid,
    }
}

// ============================================================================
// SECTION: Expected Outcome
// ============================================================================

/// Response the server is expected to produce for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpectedOutcome {
    /// 403 with a bare string body.
    Forbidden {
        /// Literal body text.
        message: String,
    },
    /// 400 with `error.details`.
    BadRequest {
        /// Ordered validation details.
        details: Vec<String>,
    },
    /// 500 with `error.details` carrying an exception string.
    ServerError {
        /// Runtime failure details.
        details: Vec<String>,
    },
    /// 201 with the channel success envelope.
    Created,
}

impl ExpectedOutcome {
    /// Returns the HTTP status code for the outcome.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Forbidden {
                ..
            } => 403,
            Self::BadRequest {
                ..
            } => 400,
            Self::ServerError {
                ..
            } => 500,
            Self::Created => 201,
        }
    }

    /// Returns the `error.details` list when the outcome carries one.
    #[must_use]
    pub fn details(&self) -> Option<&[String]> {
        match self {
            Self::BadRequest {
                details,
            }
            | Self::ServerError {
                details,
            } => Some(details),
            Self::Forbidden {
                ..
            }
            | Self::Created => None,
        }
    }
}

// ============================================================================
// SECTION: Prediction
// ============================================================================

/// Inputs that decide how the server answers a create-channel request.
#[derive(Debug, Clone, Copy)]
pub struct ProbeRequest<'a> {
    /// HTTP method as sent.
    pub method: &'a str,
    /// Request path without query string.
    pub path: &'a str,
    /// Classified session header.
    pub token: TokenState,
    /// Raw JSON body (`Value::Null` when absent).
    pub body: &'a Value,
}

impl<'a> ProbeRequest<'a> {
    /// Builds a POST request against the create-channel path.
    #[must_use]
    pub const fn create_channel(token: TokenState, body: &'a Value) -> Self {
        Self {
            method: "POST",
            path: CREATE_CHANNEL_PATH,
            token,
            body,
        }
    }
}

/// Predicts the server response for a request.
#[must_use]
pub fn predict(request: &ProbeRequest<'_>) -> ExpectedOutcome {
    if request.path != CREATE_CHANNEL_PATH || !request.method.eq_ignore_ascii_case("POST") {
        return ExpectedOutcome::ServerError {
            details: vec![route_not_found_detail(request.method, request.path)],
        };
    }
    match request.token {
        TokenState::Missing => {
            return ExpectedOutcome::Forbidden {
                message: TOKEN_NOT_FOUND.to_string(),
            };
        }
        TokenState::Invalid => {
            return ExpectedOutcome::Forbidden {
                message: INVALID_TOKEN.to_string(),
            };
        }
        TokenState::Valid => {}
    }
    let empty = Map::new();
    let body = request.body.as_object().unwrap_or(&empty);
    let normalized = match normalize_body(body) {
        Ok(normalized) => normalized,
        Err(detail) => {
            return ExpectedOutcome::ServerError {
                details: vec![detail],
            };
        }
    };
    let details = validation_details(&normalized);
    if details.is_empty() {
        ExpectedOutcome::Created
    } else {
        ExpectedOutcome::BadRequest {
            details,
        }
    }
}
