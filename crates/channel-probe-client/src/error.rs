// crates/channel-probe-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Error type for chat API requests.
// Purpose: Separate transport failures from error-status responses.
// Dependencies: thiserror
// ============================================================================

//! Error type for chat API requests.

use thiserror::Error;

use crate::response::ApiResponse;

/// Failures raised by [`crate::ChannelApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL or endpoint could not be built.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// Request never produced an HTTP response.
    #[error("http request failed: {0}")]
    Transport(String),
    /// Server answered with a non-success status.
    #[error("http status {} for {method} {path}", .response.status())]
    Status {
        /// HTTP method of the failed request.
        method: String,
        /// Request path of the failed request.
        path: String,
        /// Full response as received.
        response: ApiResponse,
    },
    /// Success body did not match the expected type.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// Mock-user provisioning returned no usable token.
    #[error("mock user response carried no token")]
    MissingToken,
}

impl ClientError {
    /// Returns the HTTP response attached to the failure, if one was received.
    #[must_use]
    pub const fn response(&self) -> Option<&ApiResponse> {
        match self {
            Self::Status {
                response, ..
            } => Some(response),
            _ => None,
        }
    }

    /// Consumes the error and returns the attached HTTP response, if any.
    #[must_use]
    pub fn into_response(self) -> Option<ApiResponse> {
        match self {
            Self::Status {
                response, ..
            } => Some(response),
            _ => None,
        }
    }
}

/// Extracts the HTTP response from a failed request.
#[must_use]
pub const fn response_of(error: &ClientError) -> Option<&ApiResponse> {
    error.response()
}
