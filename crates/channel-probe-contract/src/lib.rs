// crates/channel-probe-contract/src/lib.rs
// ============================================================================
// Module: Channel Probe Contract Library
// Description: Observed contract of the chat service create-channel endpoint.
// Purpose: Provide literal messages, constraint rules, and outcome prediction.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate encodes what the remote chat service is observed to do when a
//! channel is created: which literal strings it returns, in which order body
//! constraints are reported, and which status each request class receives.
//! The probe client asserts against these values and the system-test stub
//! replays them.
//! Invariants:
//! - Field rules are evaluated in declaration order and never short-circuit.
//! - Route resolution precedes token checks, which precede body checks.
//! - A non-string `name` fails in the trim step with a 500, not a 400.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod messages;
pub mod outcome;
pub mod rules;
pub mod shape;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use messages::CREATE_CHANNEL_PATH;
pub use messages::DELETE_MOCKED_USERS_PATH;
pub use messages::INVALID_TOKEN;
pub use messages::MOCK_USERS_PATH;
pub use messages::SESSION_TOKEN_HEADER;
pub use messages::TOKEN_NOT_FOUND;
pub use messages::TRIM_TYPE_ERROR;
pub use messages::route_not_found_detail;
pub use outcome::ExpectedOutcome;
pub use outcome::ProbeRequest;
pub use outcome::TokenState;
pub use outcome::classify_token;
pub use outcome::predict;
pub use rules::Constraint;
pub use rules::Field;
pub use rules::FieldRule;
pub use rules::field_rules;
pub use rules::is_js_whitespace;
pub use rules::normalize_body;
pub use rules::validation_details;
pub use shape::ErrorBody;
pub use shape::ErrorEnvelope;
pub use shape::ShapeError;
pub use shape::check_created_body;
pub use shape::error_details;
