// crates/channel-probe-cli/src/report.rs
// ============================================================================
// Module: Suite Reports
// Description: Per-case outcomes plus setup and teardown status.
// Purpose: Render suite results as canonical JSON or plain text.
// Dependencies: serde, serde_jcs
// ============================================================================

//! ## Overview
//! A [`SuiteReport`] is built by the suite runner and never mutated after
//! [`SuiteReport::finish`]. JSON output is RFC 8785 canonical so reports from
//! repeated runs diff cleanly apart from their timings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use serde::Serialize;

use crate::assertions::Mismatch;
use crate::cases::CaseGroup;

// ============================================================================
// SECTION: Report Types
// ============================================================================

/// Final status of one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Status and body matched.
    Passed,
    /// At least one mismatch, or no response.
    Failed,
    /// Not executed because setup failed.
    Skipped,
}

impl CaseStatus {
    /// Returns the stable status label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
        }
    }
}

/// Outcome of the setup or teardown phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseReport {
    /// Whether the phase succeeded.
    pub ok: bool,
    /// Error text when it did not.
    pub error: Option<String>,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl PhaseReport {
    /// Builds a successful phase report.
    #[must_use]
    pub const fn succeeded(duration_ms: u64) -> Self {
        Self {
            ok: true,
            error: None,
            duration_ms,
        }
    }

    /// Builds a failed phase report.
    #[must_use]
    pub const fn failed(error: String, duration_ms: u64) -> Self {
        Self {
            ok: false,
            error: Some(error),
            duration_ms,
        }
    }
}

/// Outcome of one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// Case identifier.
    pub name: String,
    /// Case group.
    pub group: CaseGroup,
    /// Final status.
    pub status: CaseStatus,
    /// Observed HTTP status, when a response arrived.
    pub http_status: Option<u16>,
    /// Every mismatch found.
    pub mismatches: Vec<Mismatch>,
    /// Transport or setup error text.
    pub error: Option<String>,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Full suite outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    /// Base URL the suite ran against.
    pub base_url: String,
    /// Mock-user prefix used for setup and teardown.
    pub prefix: String,
    /// Setup phase.
    pub setup: PhaseReport,
    /// Per-case outcomes in execution order.
    pub cases: Vec<CaseReport>,
    /// Teardown phase.
    pub teardown: PhaseReport,
    /// Number of passed cases.
    pub passed: usize,
    /// Number of failed cases.
    pub failed: usize,
    /// Number of skipped cases.
    pub skipped: usize,
}

impl SuiteReport {
    /// Assembles a report and computes its totals.
    #[must_use]
    pub fn finish(
        base_url: String,
        prefix: String,
        setup: PhaseReport,
        cases: Vec<CaseReport>,
        teardown: PhaseReport,
    ) -> Self {
        let count = |status: CaseStatus| cases.iter().filter(|case| case.status == status).count();
        let passed = count(CaseStatus::Passed);
        let failed = count(CaseStatus::Failed);
        let skipped = count(CaseStatus::Skipped);
        Self {
            base_url,
            prefix,
            setup,
            cases,
            teardown,
            passed,
            failed,
            skipped,
        }
    }

    /// Returns whether setup, every case, and teardown succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.setup.ok && self.teardown.ok && self.failed == 0 && self.skipped == 0
    }

    /// Looks up a case outcome by name.
    #[must_use]
    pub fn case(&self, name: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|case| case.name == name)
    }

    /// Serializes the report as canonical JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error text when canonicalization fails.
    pub fn to_canonical_json(&self) -> Result<Vec<u8>, String> {
        serde_jcs::to_vec(self).map_err(|err| err.to_string())
    }

    /// Renders a human-readable summary.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "channel probe against {} (prefix {})", self.base_url, self.prefix);
        let _ = writeln!(out, "setup: {}", phase_label(&self.setup));
        for case in &self.cases {
            let status = case.http_status.map_or_else(|| "-".to_string(), |code| code.to_string());
            let _ = writeln!(
                out,
                "[{}] {}/{} (http {status}, {} ms)",
                case.status.as_str(),
                case.group,
                case.name,
                case.duration_ms
            );
            for mismatch in &case.mismatches {
                let _ = writeln!(out, "    - {mismatch}");
            }
            if let Some(error) = &case.error {
                let _ = writeln!(out, "    ! {error}");
            }
        }
        let _ = writeln!(out, "teardown: {}", phase_label(&self.teardown));
        let _ = write!(
            out,
            "{} passed, {} failed, {} skipped",
            self.passed, self.failed, self.skipped
        );
        out
    }
}

/// Formats a phase outcome for text output.
fn phase_label(phase: &PhaseReport) -> String {
    match &phase.error {
        None => format!("ok ({} ms)", phase.duration_ms),
        Some(error) => format!("failed ({} ms): {error}", phase.duration_ms),
    }
}
