// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Relay and collector settings.
//!
//! Every field has a literal default; an optional TOML file overrides them and
//! the command line overrides the file.
//!
//! ```toml
//! [relay]
//! endpoint = "http://10.0.0.2:3001/api/data"
//! interval_secs = 60
//!
//! [collector]
//! listen = "0.0.0.0:3001"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::sensor::iio::IIO_ROOT;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3001/api/data";
pub const DEFAULT_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_LISTEN: &str = "0.0.0.0:3001";
pub const DEFAULT_DEVICE_TAG: &str = "raspberry-pi";
pub const DEFAULT_CAPACITY: usize = 1000;

/// Sensor relay settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelayConfig {
    pub endpoint: String,
    pub interval_secs: u64,
    /// Explicit IIO device directory; discovered under `iio_root` when unset.
    pub device: Option<PathBuf>,
    pub iio_root: PathBuf,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            interval_secs: DEFAULT_INTERVAL_SECS,
            device: None,
            iio_root: PathBuf::from(IIO_ROOT),
        }
    }
}

impl RelayConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.interval_secs == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}

/// Collector service settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectorConfig {
    pub listen: String,
    /// Tag recorded with every stored reading.
    pub device_tag: String,
    /// Readings kept in memory before the oldest is evicted.
    pub capacity: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.into(),
            device_tag: DEFAULT_DEVICE_TAG.into(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CollectorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

/// Top-level settings file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub relay: RelayConfig,
    pub collector: CollectorConfig,
}

impl Settings {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
