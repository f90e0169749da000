// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{MatcacheError, Result};
use crate::solver::SolveOptions;
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file (`~/.matcache/config.toml`)
    /// 3. Defaults (lowest)
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_config_path())
    }

    /// Same layering as [`load`](Self::load) with an explicit config file.
    /// A missing file is not an error; an invalid solver tolerance is.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_string_lossy().to_string();
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::with_name(&path).required(false))
            // Override with environment variables (prefix: MATCACHE_)
            .add_source(
                Environment::with_prefix("MATCACHE")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| MatcacheError::Config(e.to_string()))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| MatcacheError::Config(e.to_string()))?;

        SolveOptions::from(&app_config.solver).validate()?;
        Ok(app_config)
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".matcache")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.solver.tolerance, 1e-10);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_default_config_path() {
        let path = AppConfig::default_config_path();
        assert!(path.ends_with(".matcache/config.toml"));
    }
}
