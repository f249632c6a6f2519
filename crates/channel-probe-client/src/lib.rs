// crates/channel-probe-client/src/lib.rs
// ============================================================================
// Module: Channel Probe Client Library
// Description: Async HTTP client for the chat service create-channel API.
// Purpose: Issue faker and channel requests and expose raw responses.
// Dependencies: channel-probe-contract, reqwest, serde, thiserror, tracing, url
// ============================================================================

//! ## Overview
//! [`ChannelApiClient`] issues single-shot requests against the chat service:
//! mock-user provisioning and teardown through the internal faker, and
//! create-channel calls with a configurable session header. Error statuses
//! surface as [`ClientError::Status`], which still carries the full
//! [`ApiResponse`] so callers can assert on it.
//! Invariants:
//! - Requests are never retried.
//! - Session tokens are never logged or recorded in transcripts.
//! - Bare-string and JSON-string bodies both decode to [`ResponseBody::Text`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod channel;
pub mod client;
pub mod error;
pub mod faker;
pub mod response;
pub mod session;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use channel::CreateChannelBody;
pub use client::ChannelApiClient;
pub use client::ClientConfig;
pub use client::TranscriptEntry;
pub use error::ClientError;
pub use error::response_of;
pub use faker::MockUser;
pub use faker::MockUsersRequest;
pub use faker::MockUsersResponse;
pub use reqwest::Method;
pub use response::ApiResponse;
pub use response::ResponseBody;
pub use session::SessionHeader;
