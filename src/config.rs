//! Configuration management and validation.
//!
//! Provides configuration structures for the survey processing pipeline:
//! address lookup credentials and limits, and output locations.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::debug;

use crate::constants::{
    DEFAULT_LOOKUP_CACHE_CAPACITY, DEFAULT_LOOKUP_TIMEOUT_SECS, JUSO_API_KEY_ENV,
};
use crate::{Error, Result};

/// Address lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressLookupConfig {
    /// Provider credential; lookup is disabled when absent
    pub api_key: Option<String>,

    /// Per-lookup timeout in seconds
    pub timeout_secs: u64,

    /// Capacity of the per-batch memoization cache
    pub cache_capacity: usize,
}

impl Default for AddressLookupConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
            cache_capacity: DEFAULT_LOOKUP_CACHE_CAPACITY,
        }
    }
}

impl AddressLookupConfig {
    /// Check whether canonical address lookup is enabled
    pub fn is_enabled(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// Complete processor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address lookup settings
    pub lookup: AddressLookupConfig,

    /// Directory for generated output files
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup: AddressLookupConfig::default(),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl Config {
    /// Build a configuration from explicit values with environment fallback
    ///
    /// An explicit credential wins; otherwise the `JUSO_API_KEY` environment
    /// variable is consulted. An empty credential disables lookup.
    pub fn resolve(
        api_key: Option<String>,
        timeout_secs: Option<u64>,
        cache_capacity: Option<usize>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .or_else(|| env::var(JUSO_API_KEY_ENV).ok().filter(|k| !k.is_empty()));

        let config = Self {
            lookup: AddressLookupConfig {
                api_key,
                timeout_secs: timeout_secs.unwrap_or(DEFAULT_LOOKUP_TIMEOUT_SECS),
                cache_capacity: cache_capacity.unwrap_or(DEFAULT_LOOKUP_CACHE_CAPACITY),
            },
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from("output")),
        };

        config.validate()?;
        debug!(
            "Resolved configuration: lookup enabled = {}",
            config.lookup.is_enabled()
        );
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.lookup.timeout_secs == 0 {
            return Err(Error::configuration(
                "Lookup timeout must be at least 1 second".to_string(),
            ));
        }

        if self.lookup.cache_capacity == 0 {
            return Err(Error::configuration(
                "Lookup cache capacity must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(!config.lookup.is_enabled());
    }

    #[test]
    fn test_explicit_key_enables_lookup() {
        let config = Config::resolve(Some("test-key".to_string()), None, None, None).unwrap();
        assert!(config.lookup.is_enabled());
        assert_eq!(config.lookup.timeout_secs, DEFAULT_LOOKUP_TIMEOUT_SECS);
    }

    #[test]
    fn test_blank_key_not_enabled() {
        let config = AddressLookupConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Config::resolve(None, Some(0), None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_cache_capacity_rejected() {
        let result = Config::resolve(None, None, Some(0), None);
        assert!(result.is_err());
    }
}
