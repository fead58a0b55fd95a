//! Plugin configuration.
//!
//! Options are resolved from layered sources, highest precedence first:
//!
//! 1. command-line argument
//! 2. environment variable
//! 3. TOML configuration store (`--config`)
//! 4. built-in default
//!
//! Arguments and environment variables are declared together with `clap`;
//! the store and defaults are applied afterwards by [`CheckConfig::resolve`]
//! and [`MetricsConfig::resolve`]. Threshold validation runs before any
//! entropy is read.

mod args;
mod resolved;
mod store;

pub use args::{unset_empty_env, CheckArgs, MetricsArgs, CHECK_ENV_VARS, METRICS_ENV_VARS};
pub use resolved::{CheckConfig, MetricsConfig};
pub use store::{CheckSection, ConfigStore, MetricsSection};

use crate::analysis::ThresholdError;
use std::path::PathBuf;

/// Configuration errors. All of them are reported as UNKNOWN.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Thresholds failed validation.
    #[error(transparent)]
    Threshold(#[from] ThresholdError),

    /// The config store could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    FileRead {
        /// Store path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The config store is not valid TOML for this schema.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Store path.
        path: PathBuf,
        /// TOML decoding failure.
        #[source]
        source: toml::de::Error,
    },
}
