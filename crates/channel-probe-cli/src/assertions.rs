// crates/channel-probe-cli/src/assertions.rs
// ============================================================================
// Module: Response Assertions
// Description: Compare an observed response with a literal expectation.
// Purpose: Produce every mismatch instead of stopping at the first one.
// Dependencies: channel-probe-client, channel-probe-contract, serde, thiserror
// ============================================================================

//! ## Overview
//! [`check_response`] compares status and body independently, so a report
//! shows both when a case fails on status and body at once.

use channel_probe_client::ApiResponse;
use channel_probe_client::ResponseBody;
use channel_probe_contract::ExpectedOutcome;
use channel_probe_contract::check_created_body;
use serde::Serialize;
use thiserror::Error;

/// One difference between an expected and an observed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mismatch {
    /// Status code differs.
    #[error("expected status {expected}, got {actual}")]
    Status {
        /// Expected status.
        expected: u16,
        /// Observed status.
        actual: u16,
    },
    /// Bare-string body differs.
    #[error("expected body \"{expected}\", got {actual}")]
    Text {
        /// Expected body text.
        expected: String,
        /// Observed body, summarized.
        actual: String,
    },
    /// `error.details` differs.
    #[error("expected details [{}], got [{}]", expected.join(", "), actual.join(", "))]
    Details {
        /// Expected details.
        expected: Vec<String>,
        /// Observed details.
        actual: Vec<String>,
    },
    /// Body does not have the expected shape.
    #[error("unexpected body shape: {message}")]
    Shape {
        /// Description of the shape problem.
        message: String,
    },
}

/// Returns every mismatch between `expected` and `response`.
#[must_use]
pub fn check_response(expected: &ExpectedOutcome, response: &ApiResponse) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    if response.status() != expected.status() {
        mismatches.push(Mismatch::Status {
            expected: expected.status(),
            actual: response.status(),
        });
    }
    match expected {
        ExpectedOutcome::Forbidden {
            message,
        } => {
            if response.text() != Some(message.as_str()) {
                mismatches.push(Mismatch::Text {
                    expected: message.clone(),
                    actual: describe_body(response.body()),
                });
            }
        }
        ExpectedOutcome::BadRequest {
            details,
        }
        | ExpectedOutcome::ServerError {
            details,
        } => match response.error_details() {
            Ok(actual) if actual == *details => {}
            Ok(actual) => mismatches.push(Mismatch::Details {
                expected: details.clone(),
                actual,
            }),
            Err(err) => mismatches.push(Mismatch::Shape {
                message: format!("{err}; body was {}", describe_body(response.body())),
            }),
        },
        ExpectedOutcome::Created => match response.json() {
            Some(body) => {
                if let Err(err) = check_created_body(body) {
                    mismatches.push(Mismatch::Shape {
                        message: err.to_string(),
                    });
                }
            }
            None => mismatches.push(Mismatch::Shape {
                message: format!(
                    "expected a json object, body was {}",
                    describe_body(response.body())
                ),
            }),
        },
    }
    mismatches
}

/// Maximum characters of an observed body quoted in a mismatch.
const MAX_BODY_EXCERPT: usize = 200;

/// Summarizes a response body for mismatch messages.
fn describe_body(body: &ResponseBody) -> String {
    let rendered = match body {
        ResponseBody::Empty => return "<empty>".to_string(),
        ResponseBody::Text(text) => format!("\"{text}\""),
        ResponseBody::Json(value) => value.to_string(),
    };
    if rendered.chars().count() <= MAX_BODY_EXCERPT {
        return rendered;
    }
    let excerpt: String = rendered.chars().take(MAX_BODY_EXCERPT).collect();
    format!("{excerpt}...")
}
