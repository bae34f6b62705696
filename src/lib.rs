//! # Uristat
//!
//! A high-performance, lock-free per-URI runtime statistics engine for live
//! request-serving systems.
//!
//! ## Overview
//!
//! Uristat tracks one aggregate stat block per distinct endpoint (URI):
//! in-flight concurrency, historical concurrency peaks, request counts and
//! latency, error counts, and a family of downstream database-resource
//! counters (fetch rows, executes, updates, transactions, pool connections,
//! result sets). Metrics are written from arbitrarily many concurrent
//! request-handling threads using atomic read-modify-write operations only;
//! a reporting path can snapshot every endpoint at any time without ever
//! blocking a writer.
//!
//! Fine-grained sub-events are first accumulated on a per-request scratch
//! stat that is exclusively owned by the one in-flight request, then folded
//! into the shared endpoint aggregate exactly once at request completion.
//! This keeps the high-frequency counters off the contended shared path.
//!
//! ## Features
//!
//! - **Lock-Free Hot Path**: No mutex anywhere on the request path; all
//!   shared counters are atomics updated with `fetch_add`/`fetch_max`
//! - **Exact Counting**: No lost increments or double-counted merges under
//!   arbitrary interleavings
//! - **Peak Tracking**: Per-request maxima (most rows fetched by any single
//!   request, highest concurrency ever seen) retained for the endpoint's
//!   lifetime
//! - **Bounded Registry**: Per-URI stat blocks are created on first sight
//!   and capped by configuration
//! - **Profiling Block**: Optional lazily-created per-endpoint profile map
//!   for named sub-operations
//! - **Monitoring**: Ordered JSON stat export and Prometheus plaintext
//!   rendering
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use uristat::config::structs::configuration::Configuration;
//! use uristat::registry::structs::endpoint_registry::EndpointRegistry;
//! use uristat::stats::enums::stats_event::StatsEvent;
//! use uristat::stats::structs::request_scope_stat::RequestScopeStat;
//!
//! let registry = EndpointRegistry::new(Arc::new(Configuration::default()));
//!
//! // Request dispatch layer:
//! let endpoint = registry.get_or_create("/api/users").unwrap();
//! endpoint.clone().before_invoke();
//!
//! // Anywhere inside the request (SQL layer, pool layer, ...):
//! RequestScopeStat::record_current(StatsEvent::FetchRow, 25);
//!
//! // Request completion:
//! endpoint.after_invoke(None, 1_500_000);
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Shared utilities and logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`registry`] - Bounded per-URI registry of endpoint stat blocks
//! - [`stats`] - The statistics engine core

/// Common utilities and shared functionality.
///
/// Contains the logging bootstrap and timestamp helpers used across all
/// modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and saving the engine configuration from TOML
/// files, including registry sizing and profiling switches.
pub mod config;

/// Endpoint registry module.
///
/// Maintains the process-wide, capacity-bounded map from URI to its shared
/// stat block, created on first sight and resolved lock-free afterwards.
pub mod registry;

/// Statistics engine core.
///
/// Per-endpoint atomic aggregates, per-request scratch counters with the
/// current-request binding, the request lifecycle hooks, the profile block,
/// and stat snapshot export.
pub mod stats;
