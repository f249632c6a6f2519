// crates/channel-probe-cli/src/suite.rs
// ============================================================================
// Module: Suite Runner
// Description: Setup, sequential case execution, and teardown.
// Purpose: Run the create-channel catalog against one chat service host.
// Dependencies: channel-probe-client, tracing
// ============================================================================

//! ## Overview
//! [`Suite::run`] provisions a mock user, runs each selected case one at a
//! time with that user's token, then deletes the mock users by prefix.
//! Invariants:
//! - Teardown always runs, including after a failed setup.
//! - When setup fails every selected case is reported as skipped.
//! - A case is never retried.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Instant;

use channel_probe_client::ApiResponse;
use channel_probe_client::ChannelApiClient;
use channel_probe_client::ClientError;
use channel_probe_client::MockUsersRequest;
use tracing::info;
use tracing::warn;

use crate::assertions::check_response;
use crate::cases::Case;
use crate::cases::CaseGroup;
use crate::cases::create_channel_cases;
use crate::report::CaseReport;
use crate::report::CaseStatus;
use crate::report::PhaseReport;
use crate::report::SuiteReport;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Suite selection and provisioning options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteOptions {
    /// Faker request used during setup; its prefix drives teardown.
    pub mock_users: MockUsersRequest,
    /// Optional case-name substring filter.
    pub filter: Option<String>,
    /// Optional group filter.
    pub group: Option<CaseGroup>,
}

impl SuiteOptions {
    /// Builds options that select every case.
    #[must_use]
    pub const fn new(mock_users: MockUsersRequest) -> Self {
        Self {
            mock_users,
            filter: None,
            group: None,
        }
    }
}

// ============================================================================
// SECTION: Suite
// ============================================================================

/// An ordered case list plus the options to run it with.
#[derive(Debug, Clone)]
pub struct Suite {
    /// Full catalog in execution order.
    cases: Vec<Case>,
    /// Run options.
    options: SuiteOptions,
}

impl Suite {
    /// Builds a suite over an explicit case list.
    #[must_use]
    pub const fn new(cases: Vec<Case>, options: SuiteOptions) -> Self {
        Self {
            cases,
            options,
        }
    }

    /// Builds a suite over the create-channel catalog.
    #[must_use]
    pub fn create_channel(options: SuiteOptions) -> Self {
        Self::new(create_channel_cases(), options)
    }

    /// Returns the cases selected by the filters, in catalog order.
    #[must_use]
    pub fn selected(&self) -> Vec<&Case> {
        let filter = self.options.filter.as_deref();
        self.cases.iter().filter(|case| case.matches(filter, self.options.group)).collect()
    }

    /// Runs setup, the selected cases, and teardown.
    pub async fn run(&self, client: &ChannelApiClient) -> SuiteReport {
        let selected = self.selected();
        let prefix = self.options.mock_users.prefix.clone();
        info!(base_url = %client.base_url(), prefix = %prefix, cases = selected.len(), "suite setup");

        let started = Instant::now();
        let setup = match client.mock_users(&self.options.mock_users).await {
            Ok(users) => users.first_token().map(str::to_string),
            Err(err) => Err(err),
        };
        let (setup_report, token) = match setup {
            Ok(token) => (PhaseReport::succeeded(elapsed_ms(started)), Some(token)),
            Err(err) => {
                warn!(error = %err, "suite setup failed; skipping cases");
                (PhaseReport::failed(err.to_string(), elapsed_ms(started)), None)
            }
        };

        let mut reports = Vec::with_capacity(selected.len());
        for case in selected {
            let report = match &token {
                Some(token) => run_case(client, case, token).await,
                None => CaseReport {
                    name: case.name.to_string(),
                    group: case.group,
                    status: CaseStatus::Skipped,
                    http_status: None,
                    mismatches: Vec::new(),
                    error: Some("setup failed".to_string()),
                    duration_ms: 0,
                },
            };
            reports.push(report);
        }

        let started = Instant::now();
        let teardown = match client.delete_mocked_users(&prefix).await {
            Ok(_) => PhaseReport::succeeded(elapsed_ms(started)),
            Err(err) => {
                warn!(error = %err, prefix = %prefix, "suite teardown failed");
                PhaseReport::failed(err.to_string(), elapsed_ms(started))
            }
        };

        let report = SuiteReport::finish(
            client.base_url().to_string(),
            prefix,
            setup_report,
            reports,
            teardown,
        );
        info!(
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped,
            "suite finished"
        );
        report
    }
}

// ============================================================================
// SECTION: Case Execution
// ============================================================================

/// Executes one case and checks its response.
async fn run_case(client: &ChannelApiClient, case: &Case, token: &str) -> CaseReport {
    let started = Instant::now();
    let header = case.session.header(token);
    let result = client
        .send(case.method.to_http(), case.path(), &[], &header, case.body.as_ref())
        .await;
    let response = observed_response(result);
    let duration_ms = elapsed_ms(started);
    match response {
        Ok(response) => {
            let mismatches = check_response(&case.expected, &response);
            let status =
                if mismatches.is_empty() { CaseStatus::Passed } else { CaseStatus::Failed };
            CaseReport {
                name: case.name.to_string(),
                group: case.group,
                status,
                http_status: Some(response.status()),
                mismatches,
                error: None,
                duration_ms,
            }
        }
        Err(error) => CaseReport {
            name: case.name.to_string(),
            group: case.group,
            status: CaseStatus::Failed,
            http_status: None,
            mismatches: Vec::new(),
            error: Some(error),
            duration_ms,
        },
    }
}

/// Recovers the HTTP response from a request outcome, if one arrived.
fn observed_response(result: Result<ApiResponse, ClientError>) -> Result<ApiResponse, String> {
    match result {
        Ok(response) => Ok(response),
        Err(err) => {
            let message = err.to_string();
            err.into_response().ok_or(message)
        }
    }
}

/// Milliseconds elapsed since `started`, saturating.
fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
