// system-tests/tests/suites/full_suite.rs
// ============================================================================
// Module: Full Suite Tests
// Description: Runs the whole create-channel catalog through the suite runner.
// Purpose: Verify setup, sequential execution, and teardown end to end.
// Dependencies: system-tests helpers, channel-probe-cli
// ============================================================================

use channel_probe_cli::CaseGroup;
use channel_probe_cli::CaseSession;
use channel_probe_cli::CaseStatus;
use channel_probe_cli::Suite;
use channel_probe_cli::SuiteOptions;
use channel_probe_cli::create_channel_cases;
use channel_probe_client::MockUsersRequest;
use channel_probe_contract::CREATE_CHANNEL_PATH;
use channel_probe_contract::DELETE_MOCKED_USERS_PATH;
use channel_probe_contract::MOCK_USERS_PATH;
use helpers::artifacts::TestReporter;
use helpers::harness::DynError;
use helpers::harness::ProbeTarget;
use helpers::harness::test_prefix;
use system_tests::config::SystemTestConfig;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn full_catalog_passes_and_tears_down() -> Result<(), DynError> {
    let config = SystemTestConfig::load()?;
    let target = ProbeTarget::resolve(&config)?;
    let mut reporter =
        TestReporter::new(&config, "full_catalog_passes_and_tears_down", &target.label())?;
    let client = target.client(&config)?;
    let prefix = test_prefix("full_catalog");
    let suite = Suite::create_channel(SuiteOptions::new(MockUsersRequest::single(prefix.clone())));

    let report = suite.run(&client).await;
    reporter.artifacts().write_json("suite_report.json", &report)?;
    reporter.artifacts().write_text("suite_report.txt", &report.render_text())?;
    reporter.artifacts().write_json("transcript.json", &client.transcript())?;

    if !report.is_success() {
        return Err(format!("suite failed:\n{}", report.render_text()).into());
    }
    if report.passed != 14 {
        return Err(format!("expected 14 passed cases, got {}", report.passed).into());
    }
    let transcript = client.transcript();
    let paths: Vec<&str> = transcript.iter().map(|entry| entry.path.as_str()).collect();
    let delete_path = format!("{DELETE_MOCKED_USERS_PATH}?prefix={prefix}");
    if paths.first() != Some(&MOCK_USERS_PATH) || paths.last() != Some(&delete_path.as_str()) {
        return Err("setup must come first and teardown last".into());
    }
    if paths[1..paths.len() - 1].iter().any(|path| *path != CREATE_CHANNEL_PATH) {
        return Err("only create-channel requests may run between setup and teardown".into());
    }
    if let Some(stub) = target.stub() {
        if stub.active_tokens() != 0 {
            return Err(format!("{} mock users survived teardown", stub.active_tokens()).into());
        }
        if stub.channels().len() != 1 {
            return Err("exactly one channel should have been created".into());
        }
        let received: Vec<(String, String, bool)> = stub
            .requests()
            .into_iter()
            .map(|request| (request.method, request.path, request.session_header))
            .collect();
        let sent: Vec<(String, String, bool)> = transcript
            .iter()
            .map(|entry| (entry.method.clone(), entry.path.clone(), entry.session_header))
            .collect();
        if received != sent {
            return Err("stub received requests that differ from the client transcript".into());
        }
        let mut expected_headers = vec![false];
        expected_headers.extend(
            create_channel_cases().iter().map(|case| case.session != CaseSession::Omitted),
        );
        expected_headers.push(false);
        let headers: Vec<bool> = received.iter().map(|(_, _, header)| *header).collect();
        if let Some(index) =
            headers.iter().zip(&expected_headers).position(|(actual, expected)| actual != expected)
        {
            return Err(format!("session header presence differs at request {index}").into());
        }
        if headers.len() != expected_headers.len() {
            return Err(format!(
                "stub saw {} requests, expected {}",
                headers.len(),
                expected_headers.len()
            )
            .into());
        }
    }

    reporter.finish(
        "pass",
        vec![format!("{} cases passed", report.passed)],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "suite_report.json".to_string(),
            "suite_report.txt".to_string(),
            "transcript.json".to_string(),
        ],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn group_filter_runs_only_meta_cases() -> Result<(), DynError> {
    let config = SystemTestConfig::load()?;
    let target = ProbeTarget::resolve(&config)?;
    let client = target.client(&config)?;
    let mut options = SuiteOptions::new(MockUsersRequest::single(test_prefix("meta_only")));
    options.group = Some(CaseGroup::Meta);

    let report = Suite::create_channel(options).run(&client).await;
    if report.cases.len() != 5 || report.cases.iter().any(|case| case.group != CaseGroup::Meta) {
        return Err("group filter selected the wrong cases".into());
    }
    if report.cases.iter().any(|case| case.status != CaseStatus::Passed) {
        return Err(format!("meta cases failed:\n{}", report.render_text()).into());
    }
    Ok(())
}
