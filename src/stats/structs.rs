//! Statistics data structures.

/// Per-endpoint atomic aggregate counters.
pub mod endpoint_stat;

/// Plain-value snapshot of one endpoint's counters.
pub mod endpoint_snapshot;

/// Lazily-created per-endpoint profile block.
pub mod profile_stat;

/// Scoped acquisition of the request lifecycle.
pub mod request_guard;

/// Per-request scratch counters.
pub mod request_scope_stat;
