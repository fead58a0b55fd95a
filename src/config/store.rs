//! TOML configuration store.
//!
//! Holds stored option values for both plugins, keyed by plugin name:
//!
//! ```toml
//! [check-entropy]
//! warning = 100
//! critical = 50
//! metrics = false
//! metric-scheme = "db01.entropy"
//!
//! [metrics-entropy]
//! scheme = "db01.entropy"
//! ```
//!
//! Every key is optional. Unknown keys are rejected so that typos do not
//! silently fall back to defaults.

use super::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Full configuration store format.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigStore {
    /// `[check-entropy]` table.
    #[serde(default, rename = "check-entropy")]
    pub check: CheckSection,
    /// `[metrics-entropy]` table.
    #[serde(default, rename = "metrics-entropy")]
    pub metrics: MetricsSection,
}

/// Stored values for `check-entropy`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct CheckSection {
    /// Stored `warning` threshold.
    pub warning: Option<i64>,
    /// Stored `critical` threshold.
    pub critical: Option<i64>,
    /// Stored metrics-mode switch.
    pub metrics: Option<bool>,
    /// Stored `metric-scheme`.
    pub metric_scheme: Option<String>,
    /// Stored entropy source path.
    pub entropy_file: Option<PathBuf>,
}

/// Stored values for `metrics-entropy`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct MetricsSection {
    /// Stored `scheme`.
    pub scheme: Option<String>,
    /// Stored entropy source path.
    pub entropy_file: Option<PathBuf>,
}

impl ConfigStore {
    /// Loads the store from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config store");
        Ok(store)
    }

    /// Parses the store from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the store if a path was given, otherwise returns an empty one.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
