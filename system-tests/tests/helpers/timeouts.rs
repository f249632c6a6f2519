// system-tests/tests/helpers/timeouts.rs
// ============================================================================
// Module: System Test Timeouts
// Description: Centralized request timeout with env overrides.
// Purpose: Keep probe request timeouts consistent across suites.
// ============================================================================

use std::time::Duration;

use system_tests::config::SystemTestConfig;

/// Default per-request timeout for probe clients.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Returns the effective timeout, honoring `CHANNEL_PROBE_SYSTEM_TEST_TIMEOUT_SEC`.
/// The override acts as a minimum so explicitly longer timeouts are kept.
pub fn resolve_timeout(config: &SystemTestConfig, requested: Duration) -> Duration {
    config.timeout.map_or(requested, |minimum| std::cmp::max(requested, minimum))
}
