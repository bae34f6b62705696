//! Configuration enumerations.

/// Error values raised while loading or saving configuration.
pub mod configuration_error;
