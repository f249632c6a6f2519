// crates/channel-probe-client/src/session.rs
// ============================================================================
// Module: Session Header
// Description: What the client puts in the `x-session-token` header.
// Purpose: Express omitted, empty, and populated session credentials.
// Dependencies: std
// ============================================================================

//! What the client puts in the `x-session-token` header.

use std::fmt;

/// Session header variant attached to a request.
#[derive(Clone, PartialEq, Eq)]
pub enum SessionHeader {
    /// No header is sent.
    Omitted,
    /// The header is sent with an empty value.
    Empty,
    /// The header carries a token.
    Token(String),
}

impl SessionHeader {
    /// Builds a header carrying `token`.
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Returns the header value to send, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Omitted => None,
            Self::Empty => Some(""),
            Self::Token(token) => Some(token),
        }
    }
}

// Tokens stay out of debug output and logs.
impl fmt::Debug for SessionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Omitted => f.write_str("SessionHeader::Omitted"),
            Self::Empty => f.write_str("SessionHeader::Empty"),
            Self::Token(_) => f.write_str("SessionHeader::Token(<redacted>)"),
        }
    }
}
