//! Configuration data structures for matcache.
//!
//! This module defines the schema for the library settings: solver
//! tolerances used on cache misses and the logging setup.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Inversion routine settings.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings forwarded to the inversion routine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Pivots with `|pivot| <= tolerance * max|a_ij|` are treated as zero.
    /// Must be finite and non-negative.
    /// Default: `1e-10`
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

/// Settings for logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_tolerance() -> f64 {
    crate::solver::DEFAULT_TOLERANCE
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
