// crates/channel-probe-cli/src/cases.rs
// ============================================================================
// Module: Create-Channel Case Catalog
// Description: Named requests with literal expected responses.
// Purpose: Define the ordered catalog the suite runner executes.
// Dependencies: channel-probe-client, channel-probe-contract, serde, serde_json
// ============================================================================

//! ## Overview
//! Each [`Case`] pairs one create-channel request with the literal response
//! the service is observed to return. Expectations are spelled out in full
//! rather than derived, so the catalog doubles as a readable record of the
//! contract; unit tests check it against [`channel_probe_contract::predict`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use channel_probe_client::Method;
use channel_probe_client::SessionHeader;
use channel_probe_contract::CREATE_CHANNEL_PATH;
use channel_probe_contract::ExpectedOutcome;
use channel_probe_contract::INVALID_TOKEN;
use channel_probe_contract::ProbeRequest;
use channel_probe_contract::TOKEN_NOT_FOUND;
use channel_probe_contract::TRIM_TYPE_ERROR;
use channel_probe_contract::TokenState;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Case Types
// ============================================================================

/// Catalog grouping, mirroring how the cases are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseGroup {
    /// Authentication and routing behavior.
    Meta,
    /// Body validation behavior.
    RequestParams,
    /// Successful channel creation.
    BusinessLogic,
}

impl CaseGroup {
    /// Returns the stable group label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::RequestParams => "request_params",
            Self::BusinessLogic => "business_logic",
        }
    }
}

impl fmt::Display for CaseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseGroup {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "meta" => Ok(Self::Meta),
            "request_params" => Ok(Self::RequestParams),
            "business_logic" => Ok(Self::BusinessLogic),
            other => Err(format!("unknown case group: {other}")),
        }
    }
}

/// Session header a case sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CaseSession {
    /// No header.
    Omitted,
    /// Header with an empty value.
    Empty,
    /// Header with a fixed, unprovisioned token.
    Literal(&'static str),
    /// Header with the token provisioned during setup.
    Provisioned,
}

impl CaseSession {
    /// Builds the concrete header given the provisioned token.
    #[must_use]
    pub fn header(self, provisioned: &str) -> SessionHeader {
        match self {
            Self::Omitted => SessionHeader::Omitted,
            Self::Empty => SessionHeader::Empty,
            Self::Literal(token) => SessionHeader::token(token),
            Self::Provisioned => SessionHeader::token(provisioned),
        }
    }

    /// Returns how the server classifies this header.
    #[must_use]
    pub const fn token_state(self) -> TokenState {
        match self {
            Self::Omitted | Self::Empty => TokenState::Missing,
            Self::Literal(_) => TokenState::Invalid,
            Self::Provisioned => TokenState::Valid,
        }
    }
}

/// HTTP method a case uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaseMethod {
    /// `POST`, the supported method.
    Post,
    /// `GET`, which the route does not accept.
    Get,
}

impl CaseMethod {
    /// Returns the method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Get => "GET",
        }
    }

    /// Returns the method as an HTTP client method.
    #[must_use]
    pub const fn to_http(self) -> Method {
        match self {
            Self::Post => Method::POST,
            Self::Get => Method::GET,
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Case {
    /// Stable case identifier.
    pub name: &'static str,
    /// Catalog group.
    pub group: CaseGroup,
    /// HTTP method.
    pub method: CaseMethod,
    /// Session header to send.
    pub session: CaseSession,
    /// JSON body, absent for body-less requests.
    pub body: Option<Value>,
    /// Literal expected response.
    pub expected: ExpectedOutcome,
}

impl Case {
    /// Returns the request path.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        CREATE_CHANNEL_PATH
    }

    /// Predicts the outcome of this case from the contract model.
    #[must_use]
    pub fn predicted(&self) -> ExpectedOutcome {
        let body = self.body.clone().unwrap_or(Value::Null);
        channel_probe_contract::predict(&ProbeRequest {
            method: self.method.as_str(),
            path: self.path(),
            token: self.session.token_state(),
            body: &body,
        })
    }

    /// Returns whether the case matches a name substring and optional group.
    #[must_use]
    pub fn matches(&self, filter: Option<&str>, group: Option<CaseGroup>) -> bool {
        filter.is_none_or(|needle| self.name.contains(needle))
            && group.is_none_or(|group| self.group == group)
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Every workspaceId and name detail, in reporting order.
const ALL_FIELD_DETAILS: [&str; 9] = [
    "workspaceId should not be null or undefined",
    "workspaceId must be equal to 0",
    "workspaceId must be a string",
    "workspaceId should not be empty",
    "name should not be null or undefined",
    "name must be shorter than or equal to 255 characters",
    "name must be longer than or equal to 3 characters",
    "name must be a string",
    "name should not be empty",
];

/// Builds a 400 expectation from literal details.
fn bad_request(details: &[&str]) -> ExpectedOutcome {
    ExpectedOutcome::BadRequest {
        details: details.iter().map(|detail| (*detail).to_string()).collect(),
    }
}

/// Builds a 403 expectation with a bare-string body.
fn forbidden(message: &str) -> ExpectedOutcome {
    ExpectedOutcome::Forbidden {
        message: message.to_string(),
    }
}

/// Builds a 500 expectation with one exception detail.
fn server_error(detail: &str) -> ExpectedOutcome {
    ExpectedOutcome::ServerError {
        details: vec![detail.to_string()],
    }
}

/// Builds an authenticated POST case.
fn authenticated(name: &'static str, body: Value, expected: ExpectedOutcome) -> Case {
    Case {
        name,
        group: CaseGroup::RequestParams,
        method: CaseMethod::Post,
        session: CaseSession::Provisioned,
        body: Some(body),
        expected,
    }
}

/// Returns the ordered create-channel catalog.
#[must_use]
pub fn create_channel_cases() -> Vec<Case> {
    let missing_header = Case {
        name: "missing_session_token",
        group: CaseGroup::Meta,
        method: CaseMethod::Post,
        session: CaseSession::Omitted,
        body: Some(json!({"workspaceId": null})),
        expected: forbidden(TOKEN_NOT_FOUND),
    };
    let repeated = Case {
        name: "missing_session_token_repeated",
        ..missing_header.clone()
    };
    vec![
        missing_header,
        Case {
            name: "wrong_session_token",
            group: CaseGroup::Meta,
            method: CaseMethod::Post,
            session: CaseSession::Literal("wrong-token"),
            body: Some(json!({"workspaceId": null})),
            expected: forbidden(INVALID_TOKEN),
        },
        Case {
            name: "empty_session_token",
            group: CaseGroup::Meta,
            method: CaseMethod::Post,
            session: CaseSession::Empty,
            body: Some(json!({"workspaceId": "0", "name": "Test Channel"})),
            expected: forbidden(TOKEN_NOT_FOUND),
        },
        Case {
            name: "get_instead_of_post",
            group: CaseGroup::Meta,
            method: CaseMethod::Get,
            session: CaseSession::Provisioned,
            body: None,
            expected: server_error("NotFoundException: Cannot GET /Channel/createChannel"),
        },
        repeated,
        authenticated(
            "null_workspace_id",
            json!({"workspaceId": null}),
            bad_request(&ALL_FIELD_DETAILS),
        ),
        authenticated(
            "numeric_workspace_id",
            json!({"workspaceId": 1}),
            bad_request(&[
                "workspaceId must be equal to 0",
                "workspaceId must be a string",
                "name should not be null or undefined",
                "name must be shorter than or equal to 255 characters",
                "name must be longer than or equal to 3 characters",
                "name must be a string",
                "name should not be empty",
            ]),
        ),
        authenticated(
            "null_name",
            json!({"workspaceId": "0", "name": null}),
            bad_request(&ALL_FIELD_DETAILS[4..]),
        ),
        authenticated(
            "name_longer_than_255",
            json!({"workspaceId": "0", "name": "a".repeat(256)}),
            bad_request(&["name must be shorter than or equal to 255 characters"]),
        ),
        authenticated(
            "name_shorter_than_3",
            json!({"workspaceId": "0", "name": "a"}),
            bad_request(&["name must be longer than or equal to 3 characters"]),
        ),
        authenticated(
            "numeric_name",
            json!({"workspaceId": "0", "name": 1}),
            server_error(TRIM_TYPE_ERROR),
        ),
        authenticated(
            "empty_name",
            json!({"workspaceId": "0", "name": ""}),
            bad_request(&[
                "name must be longer than or equal to 3 characters",
                "name should not be empty",
            ]),
        ),
        authenticated("empty_body", json!({}), bad_request(&ALL_FIELD_DETAILS)),
        Case {
            name: "create_channel_success",
            group: CaseGroup::BusinessLogic,
            method: CaseMethod::Post,
            session: CaseSession::Provisioned,
            body: Some(json!({"workspaceId": "0", "name": "Test Channel"})),
            expected: ExpectedOutcome::Created,
        },
    ]
}
