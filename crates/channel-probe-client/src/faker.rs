// crates/channel-probe-client/src/faker.rs
// ============================================================================
// Module: Mock User Faker Types
// Description: Request and response shapes of the internal faker service.
// Purpose: Provision disposable users whose tokens authenticate probe calls.
// Dependencies: serde, serde_json
// ============================================================================

//! Request and response shapes of the internal faker service.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::ClientError;

/// Body of `POST /InternalFaker/MockUsers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockUsersRequest {
    /// Prefix shared by every created user; teardown deletes by prefix.
    pub prefix: String,
    /// Number of users to create.
    pub quantity: u32,
    /// Badge type assigned to created users.
    pub badge: u32,
}

impl MockUsersRequest {
    /// Builds a request for a single user without a badge.
    #[must_use]
    pub fn single(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            quantity: 1,
            badge: 0,
        }
    }
}

/// A provisioned mock user.
#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct MockUser {
    /// Session token for the user.
    pub token: String,
    /// Remaining user fields, kept opaque.
    #[serde(default, flatten)]
    pub profile: Map<String, Value>,
}

impl fmt::Debug for MockUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockUser")
            .field("token", &"<redacted>")
            .field("profile", &self.profile)
            .finish()
    }
}

/// Response of `POST /InternalFaker/MockUsers`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MockUsersResponse {
    /// Created users in creation order.
    pub data: Vec<MockUser>,
}

impl MockUsersResponse {
    /// Returns the token of the first created user.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingToken`] when no user was created or the
    /// first token is empty.
    pub fn first_token(&self) -> Result<&str, ClientError> {
        self.data
            .first()
            .map(|user| user.token.as_str())
            .filter(|token| !token.is_empty())
            .ok_or(ClientError::MissingToken)
    }
}
