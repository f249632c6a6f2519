// crates/channel-probe-contract/src/messages.rs
// ============================================================================
// Module: Contract Messages
// Description: Literal paths, headers, and response strings of the chat API.
// Purpose: Keep every literal the probe asserts on in one place.
// Dependencies: std
// ============================================================================

//! ## Overview
//! String constants observed on the wire. Authentication failures return these
//! as bare string bodies; runtime failures wrap them in `error.details`.

// ============================================================================
// SECTION: Paths and Headers
// ============================================================================

/// Path of the create-channel endpoint.
pub const CREATE_CHANNEL_PATH: &str = "/Channel/createChannel";
/// Path of the faker endpoint that provisions mock users.
pub const MOCK_USERS_PATH: &str = "/InternalFaker/MockUsers";
/// Path of the faker endpoint that deletes mock users by prefix.
pub const DELETE_MOCKED_USERS_PATH: &str = "/InternalFaker/DeleteMockedUsers";
/// Header carrying the session credential.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

// ============================================================================
// SECTION: Response Literals
// ============================================================================

/// 403 body when the session header is absent or empty.
pub const TOKEN_NOT_FOUND: &str = "Token not found";
/// 403 body when the session header carries an unknown token.
pub const INVALID_TOKEN: &str = "Invalid token";
/// 500 detail when a non-string `name` reaches the trim step.
pub const TRIM_TYPE_ERROR: &str = "TypeError: value.trim is not a function";

/// Builds the 500 detail returned for an unrouted method/path pair.
///
/// The method is upper-cased the way the framework reports it.
#[must_use]
pub fn route_not_found_detail(method: &str, path: &str) -> String {
    format!("NotFoundException: Cannot {} {path}", method.to_ascii_uppercase())
}
