//! Real-time per-URI statistics tracking module.
//!
//! This module is the engine core: it maintains one atomic aggregate stat
//! block per tracked endpoint, a per-request scratch stat reachable through
//! the current-request binding, and the lifecycle hooks that tie the two
//! together.
//!
//! # Statistics Categories
//!
//! ## Request Metrics
//! - In-flight request count and historical concurrency maximum
//! - Total request count, cumulative request time, error count
//! - Last access timestamp
//!
//! ## Database Resource Metrics
//! - Fetched row count and per-request peak
//! - Execute count, per-request peak, error count and cumulative time
//! - Update count and per-request peak
//! - Commit and rollback counts
//! - Pool connection open/close counts
//! - Result-set open/close counts
//!
//! ## Profile Metrics
//! - Lazily-created per-endpoint map of named sub-operation timings
//!
//! # Thread Safety
//!
//! Endpoint aggregates are mutated with atomic read-modify-write operations
//! only, allowing safe concurrent updates from any number of request
//! threads without locking. Per-request scratch counters are exclusively
//! owned by their one in-flight request and folded into the aggregate
//! exactly once at completion.
//!
//! # Monitoring Integration
//!
//! - Typed snapshots via `EndpointStat::get_stats()`
//! - Insertion-ordered JSON maps via `EndpointStat::get_stats_data()`
//!
//! # Example
//!
//! ```rust,ignore
//! use uristat::stats::enums::stats_event::StatsEvent;
//! use uristat::stats::structs::request_scope_stat::RequestScopeStat;
//!
//! endpoint.clone().before_invoke();
//! RequestScopeStat::record_current(StatsEvent::Execute, 1);
//! endpoint.after_invoke(None, elapsed_nanos);
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Statistics data structures (atomic counters, snapshots).
pub mod structs;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Unit tests for statistics functionality.
pub mod tests;
