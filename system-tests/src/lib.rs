// system-tests/src/lib.rs
// ============================================================================
// Module: Channel Probe System Tests Library
// Description: Shared configuration for system test scenarios.
// Purpose: Provide common utilities for the channel probe system-test binaries.
// Dependencies: channel-probe-cli
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the system-test binaries in
//! `system-tests/tests`. Without `CHANNEL_PROBE_SYSTEM_TEST_BASE_URL` the
//! binaries run against an in-process stub of the chat service.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
