//! Implementation blocks for statistics types.

/// Lifecycle hooks, merge and snapshot export for the endpoint aggregate.
pub mod endpoint_stat;

/// Profile block recording and export.
pub mod profile_stat;

/// Drop-based lifecycle pairing.
pub mod request_guard;

/// Scratch counter recording and the current-request binding.
pub mod request_scope_stat;
