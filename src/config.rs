//! Runtime configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MINICOMMERCE_DATA_DIR` - Directory for file-backed storage. Unset means in-memory storage.
//! - `MINICOMMERCE_CHANNEL_BUFFER` - Store actor channel capacity (default: 32)

use std::path::PathBuf;
use thiserror::Error;

const DATA_DIR_VAR: &str = "MINICOMMERCE_DATA_DIR";
const CHANNEL_BUFFER_VAR: &str = "MINICOMMERCE_CHANNEL_BUFFER";
const DEFAULT_CHANNEL_BUFFER: usize = 32;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Where containers are persisted. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Capacity of the store actor's request channel
    pub channel_buffer: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `MINICOMMERCE_CHANNEL_BUFFER` is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup(DATA_DIR_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let channel_buffer = match lookup(CHANNEL_BUFFER_VAR) {
            None => DEFAULT_CHANNEL_BUFFER,
            Some(raw) => parse_buffer(&raw)?,
        };

        Ok(Self {
            data_dir,
            channel_buffer,
        })
    }
}

fn parse_buffer(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::InvalidEnvVar(
            CHANNEL_BUFFER_VAR.to_string(),
            "must be greater than zero".to_string(),
        )),
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::InvalidEnvVar(
            CHANNEL_BUFFER_VAR.to_string(),
            e.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StorefrontConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(load(&[]).unwrap(), StorefrontConfig::default());
    }

    #[test]
    fn test_reads_data_dir_and_buffer() {
        let config = load(&[
            ("MINICOMMERCE_DATA_DIR", "/var/lib/minicommerce"),
            ("MINICOMMERCE_CHANNEL_BUFFER", " 64 "),
        ])
        .unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/minicommerce")));
        assert_eq!(config.channel_buffer, 64);
    }

    #[test]
    fn test_blank_data_dir_means_memory() {
        let config = load(&[("MINICOMMERCE_DATA_DIR", "  ")]).unwrap();
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_rejects_bad_buffer() {
        assert!(matches!(
            load(&[("MINICOMMERCE_CHANNEL_BUFFER", "0")]),
            Err(ConfigError::InvalidEnvVar(name, _)) if name == "MINICOMMERCE_CHANNEL_BUFFER"
        ));
        assert!(load(&[("MINICOMMERCE_CHANNEL_BUFFER", "lots")]).is_err());
    }
}
