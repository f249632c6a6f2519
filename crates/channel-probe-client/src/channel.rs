// crates/channel-probe-client/src/channel.rs
// ============================================================================
// Module: Channel Request Bodies
// Description: Typed builder for well-formed create-channel bodies.
// Purpose: Produce the JSON body for the success path.
// Dependencies: serde, serde_json
// ============================================================================

//! Typed builder for well-formed create-channel bodies.

use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;

/// Well-formed body of `POST /Channel/createChannel`.
///
/// Malformed bodies (null fields, numbers) are sent as raw [`Value`]s instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChannelBody {
    /// Workspace identifier; the service only accepts `"0"`.
    pub workspace_id: String,
    /// Channel display name.
    pub name: String,
}

impl CreateChannelBody {
    /// Builds a body for the default workspace.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            workspace_id: "0".to_string(),
            name: name.into(),
        }
    }

    /// Returns the body as a JSON value, serialized through the derive.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when serialization fails.
    pub fn to_value(&self) -> Result<Value, ClientError> {
        serde_json::to_value(self)
            .map_err(|err| ClientError::Decode(format!("create channel body: {err}")))
    }
}
