//! Registry data structures.

/// Bounded per-URI registry of endpoint stat blocks.
pub mod endpoint_registry;
