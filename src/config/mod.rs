//! Configuration management module.
//!
//! This module handles loading, parsing, and saving the engine configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) is flat and contains:
//! - **log_level**: Logging verbosity (off, trace, debug, info, warn, error)
//! - **max_endpoint_count**: Upper bound on distinct URIs tracked at once
//! - **profile_enabled**: Whether per-endpoint profile blocks are recorded
//! - **prometheus_id**: Metric namespace used by the Prometheus renderer
//!
//! # Features
//!
//! - TOML file parsing with typed error values
//! - Default value generation
//!
//! # Example
//!
//! ```rust,ignore
//! use uristat::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_from_file("config.toml")?;
//!
//! // Generate and persist a default configuration
//! Configuration::save_to_file("config.toml", &Configuration::default())?;
//! ```

/// Configuration enumerations (error values).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
