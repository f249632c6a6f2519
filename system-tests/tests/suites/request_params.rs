// system-tests/tests/suites/request_params.rs
// ============================================================================
// Module: Request Param Tests
// Description: Body validation behavior of create-channel.
// Purpose: Pin the ordered validation details for each malformed body.
// Dependencies: system-tests helpers, channel-probe-contract
// ============================================================================

use channel_probe_contract::TRIM_TYPE_ERROR;
use helpers::harness::DynError;
use helpers::harness::ProbeSession;
use helpers::harness::expect_server_error;
use helpers::harness::expect_validation;
use serde_json::Value;
use serde_json::json;

use crate::helpers;

const WORKSPACE_DETAILS: [&str; 4] = [
    "workspaceId should not be null or undefined",
    "workspaceId must be equal to 0",
    "workspaceId must be a string",
    "workspaceId should not be empty",
];

const NAME_DETAILS: [&str; 5] = [
    "name should not be null or undefined",
    "name must be shorter than or equal to 255 characters",
    "name must be longer than or equal to 3 characters",
    "name must be a string",
    "name should not be empty",
];

/// Posts `body` with the provisioned token and expects a 400 with `details`.
async fn expect_rejected(test_name: &str, body: Value, details: &[&str]) -> Result<(), DynError> {
    let session = ProbeSession::start(test_name).await?;
    let outcome = session
        .create_channel(&session.session_header(), &body)
        .await
        .and_then(|response| expect_validation(&response, details));
    session.finish(outcome).await
}

#[tokio::test(flavor = "multi_thread")]
async fn null_workspace_id_reports_every_field() -> Result<(), DynError> {
    let details: Vec<&str> = WORKSPACE_DETAILS.iter().chain(NAME_DETAILS.iter()).copied().collect();
    expect_rejected("null_workspace_id_reports_every_field", json!({"workspaceId": null}), &details)
        .await
}

#[tokio::test(flavor = "multi_thread")]
async fn numeric_workspace_id_fails_equality_and_type() -> Result<(), DynError> {
    let details: Vec<&str> =
        WORKSPACE_DETAILS[1..3].iter().chain(NAME_DETAILS.iter()).copied().collect();
    expect_rejected("numeric_workspace_id_fails_equality_and_type", json!({"workspaceId": 1}), &details)
        .await
}

#[tokio::test(flavor = "multi_thread")]
async fn null_name_reports_every_name_rule() -> Result<(), DynError> {
    expect_rejected(
        "null_name_reports_every_name_rule",
        json!({"workspaceId": "0", "name": null}),
        &NAME_DETAILS,
    )
    .await
}

#[tokio::test(flavor = "multi_thread")]
async fn name_longer_than_255_fails_max_length() -> Result<(), DynError> {
    expect_rejected(
        "name_longer_than_255_fails_max_length",
        json!({"workspaceId": "0", "name": "a".repeat(256)}),
        &["name must be shorter than or equal to 255 characters"],
    )
    .await
}

#[tokio::test(flavor = "multi_thread")]
async fn name_shorter_than_3_fails_min_length() -> Result<(), DynError> {
    expect_rejected(
        "name_shorter_than_3_fails_min_length",
        json!({"workspaceId": "0", "name": "a"}),
        &["name must be longer than or equal to 3 characters"],
    )
    .await
}

#[tokio::test(flavor = "multi_thread")]
async fn padded_name_is_trimmed_before_length_checks() -> Result<(), DynError> {
    expect_rejected(
        "padded_name_is_trimmed_before_length_checks",
        json!({"workspaceId": "0", "name": "  a  "}),
        &["name must be longer than or equal to 3 characters"],
    )
    .await
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_name_fails_min_length_and_not_empty() -> Result<(), DynError> {
    expect_rejected(
        "empty_name_fails_min_length_and_not_empty",
        json!({"workspaceId": "0", "name": ""}),
        &[
            "name must be longer than or equal to 3 characters",
            "name should not be empty",
        ],
    )
    .await
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_body_reports_every_field() -> Result<(), DynError> {
    let details: Vec<&str> = WORKSPACE_DETAILS.iter().chain(NAME_DETAILS.iter()).copied().collect();
    expect_rejected("empty_body_reports_every_field", json!({}), &details).await
}

#[tokio::test(flavor = "multi_thread")]
async fn numeric_name_fails_in_trim_with_500() -> Result<(), DynError> {
    let session = ProbeSession::start("numeric_name_fails_in_trim_with_500").await?;
    let outcome = session
        .create_channel(&session.session_header(), &json!({"workspaceId": "0", "name": 1}))
        .await
        .and_then(|response| expect_server_error(&response, &[TRIM_TYPE_ERROR]));
    session.finish(outcome).await
}
