// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for channel probe system-tests.
// Purpose: Provide the API stub, probe harness, and artifact utilities.
// Dependencies: system-tests, channel-probe-cli, channel-probe-client
// ============================================================================

//! ## Overview
//! Shared helpers for channel probe system-tests.
//! Invariants:
//! - Every provisioned mock user is deleted before the test returns.
//! - Each test gets its own stub, so tests share no server state.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod artifacts;
pub mod timeouts;
