//! Endpoint registry module.
//!
//! Maintains the process-wide map from URI to its shared stat block. The
//! map is lock-free: resolution is a plain ordered-map lookup and creation
//! races are settled by the map itself, so request dispatch never takes a
//! lock to find its endpoint.
//!
//! # Capacity
//!
//! The number of distinct URIs tracked at once is bounded by
//! `max_endpoint_count` from the configuration. Once the bound is reached,
//! lookups for unseen URIs return nothing, an overflow counter is raised
//! and a warning is logged; already-tracked URIs keep resolving normally.
//!
//! # Monitoring Integration
//!
//! - Ordered JSON stat maps for every endpoint via `get_stats_data()`
//! - Prometheus plaintext exposition via `get_stats_prometheus()`
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use uristat::config::structs::configuration::Configuration;
//! use uristat::registry::structs::endpoint_registry::EndpointRegistry;
//!
//! let registry = EndpointRegistry::new(Arc::new(Configuration::default()));
//! let endpoint = registry.get_or_create("/api/users").unwrap();
//! ```

/// Registry data structures.
pub mod structs;

/// Implementation blocks for registry operations.
pub mod impls;
