//! Implementation blocks for registry types.

/// Resolution, creation, eviction and stat export.
pub mod endpoint_registry;
