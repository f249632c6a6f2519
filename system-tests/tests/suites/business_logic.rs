// system-tests/tests/suites/business_logic.rs
// ============================================================================
// Module: Business Logic Tests
// Description: Successful channel creation.
// Purpose: Pin the 201 success envelope.
// Dependencies: system-tests helpers, channel-probe-client, channel-probe-contract
// ============================================================================

use channel_probe_client::CreateChannelBody;
use channel_probe_contract::ExpectedOutcome;
use helpers::harness::DynError;
use helpers::harness::ProbeSession;
use helpers::harness::expect_outcome;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn valid_body_creates_channel() -> Result<(), DynError> {
    let body = CreateChannelBody::new("Test Channel").to_value()?;
    let session = ProbeSession::start("valid_body_creates_channel").await?;
    let outcome = session
        .create_channel(&session.session_header(), &body)
        .await
        .and_then(|response| expect_outcome(&response, &ExpectedOutcome::Created));
    let outcome = outcome.and_then(|()| match session.stub() {
        Some(stub) => {
            let channels = stub.channels();
            match channels.as_slice() {
                [channel] if channel["name"] == "Test Channel" => Ok(()),
                _ => Err(format!("stub recorded unexpected channels: {}", channels.len()).into()),
            }
        }
        None => Ok(()),
    });
    session.finish(outcome).await
}
