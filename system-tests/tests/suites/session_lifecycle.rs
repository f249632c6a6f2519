// system-tests/tests/suites/session_lifecycle.rs
// ============================================================================
// Module: Session Lifecycle Tests
// Description: Token validity across provisioning and teardown.
// Purpose: Verify teardown invalidates tokens and unknown routes fail with 500.
// Dependencies: system-tests helpers, channel-probe-client
// ============================================================================

use channel_probe_client::Method;
use channel_probe_client::MockUsersRequest;
use channel_probe_client::SessionHeader;
use channel_probe_contract::CREATE_CHANNEL_PATH;
use channel_probe_contract::ExpectedOutcome;
use channel_probe_contract::INVALID_TOKEN;
use helpers::harness::DynError;
use helpers::harness::ProbeTarget;
use helpers::harness::expect_forbidden;
use helpers::harness::expect_outcome;
use helpers::harness::expect_server_error;
use helpers::harness::test_prefix;
use serde_json::json;
use system_tests::config::SystemTestConfig;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn teardown_invalidates_provisioned_tokens() -> Result<(), DynError> {
    let config = SystemTestConfig::load()?;
    let target = ProbeTarget::resolve(&config)?;
    let client = target.client(&config)?;
    let prefix = test_prefix("teardown_invalidates");
    let users = client.mock_users(&MockUsersRequest::single(prefix.clone())).await?;
    let header = SessionHeader::token(users.first_token()?);
    let body = json!({"workspaceId": "0", "name": "Lifecycle Channel"});

    let before =
        client.send_raw(Method::POST, CREATE_CHANNEL_PATH, &[], &header, Some(&body)).await;
    client.delete_mocked_users(&prefix).await?;
    expect_outcome(&before?, &ExpectedOutcome::Created)?;

    let after = client.send_raw(Method::POST, CREATE_CHANNEL_PATH, &[], &header, Some(&body)).await?;
    expect_forbidden(&after, INVALID_TOKEN)
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_route_is_not_found() -> Result<(), DynError> {
    let config = SystemTestConfig::load()?;
    let target = ProbeTarget::resolve(&config)?;
    let client = target.client(&config)?;
    let response = client
        .send_raw(Method::POST, "/Channel/createChannels", &[], &SessionHeader::Omitted, None)
        .await?;
    expect_server_error(&response, &["NotFoundException: Cannot POST /Channel/createChannels"])
}
