// crates/channel-probe-cli/src/lib.rs
// ============================================================================
// Module: Channel Probe CLI Library
// Description: Configuration, case catalog, suite runner, and reports.
// Purpose: Share the probe workflow between the binary and system tests.
// Dependencies: channel-probe-client, channel-probe-contract, serde, toml, tracing
// ============================================================================

//! ## Overview
//! Library half of the `channel-probe` binary. [`ProbeConfig`] resolves where
//! and how to probe, [`create_channel_cases`] lists what to send, and
//! [`Suite`] runs the catalog and produces a [`SuiteReport`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod assertions;
pub mod cases;
pub mod config;
pub mod report;
pub mod suite;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use assertions::Mismatch;
pub use assertions::check_response;
pub use cases::Case;
pub use cases::CaseGroup;
pub use cases::CaseMethod;
pub use cases::CaseSession;
pub use cases::create_channel_cases;
pub use config::ConfigError;
pub use config::ProbeConfig;
pub use config::ProbeOverrides;
pub use report::CaseReport;
pub use report::CaseStatus;
pub use report::PhaseReport;
pub use report::SuiteReport;
pub use suite::Suite;
pub use suite::SuiteOptions;
