//! Shared constants for the end-to-end suite.

/// Timeout for individual HTTP requests.
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// How long to wait for a spawned server to answer its stats probe.
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Poll interval while waiting for readiness.
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
