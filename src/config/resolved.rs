//! Fully resolved, validated plugin configuration.
//!
//! Built once per invocation and passed by reference to the runner.

use super::args::{CheckArgs, MetricsArgs};
use super::store::ConfigStore;
use super::ConfigError;
use crate::analysis::ThresholdConfig;
use crate::metrics::default_scheme;
use crate::source::ENTROPY_AVAIL_PATH;
use std::path::PathBuf;

/// Configuration for `check-entropy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Validated thresholds.
    pub thresholds: ThresholdConfig,
    /// Emit a metric line instead of a classification.
    pub metrics: bool,
    /// Metric naming scheme.
    pub metric_scheme: String,
    /// Path of the entropy source.
    pub entropy_file: PathBuf,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdConfig::default(),
            metrics: false,
            metric_scheme: default_scheme(),
            entropy_file: PathBuf::from(ENTROPY_AVAIL_PATH),
        }
    }
}

impl CheckConfig {
    /// Merges arguments (which already include environment values) over
    /// the store and defaults, then validates the thresholds.
    pub fn resolve(args: CheckArgs, store: &ConfigStore) -> Result<Self, ConfigError> {
        let stored = &store.check;
        let defaults = ThresholdConfig::default();

        let warning = args.warning.or(stored.warning).unwrap_or(defaults.warning());
        let critical = args
            .critical
            .or(stored.critical)
            .unwrap_or(defaults.critical());
        let thresholds = ThresholdConfig::new(warning, critical)?;

        Ok(Self {
            thresholds,
            metrics: args.metrics.or(stored.metrics).unwrap_or(false),
            metric_scheme: args
                .metric_scheme
                .or_else(|| stored.metric_scheme.clone())
                .unwrap_or_else(default_scheme),
            entropy_file: args
                .entropy_file
                .or_else(|| stored.entropy_file.clone())
                .unwrap_or_else(|| PathBuf::from(ENTROPY_AVAIL_PATH)),
        })
    }

    /// Loads the store named by `--config` (if any) and resolves.
    pub fn from_args(args: CheckArgs) -> Result<Self, ConfigError> {
        let store = ConfigStore::load(args.config.as_deref())?;
        Self::resolve(args, &store)
    }
}

/// Configuration for `metrics-entropy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsConfig {
    /// Metric naming scheme.
    pub scheme: String,
    /// Path of the entropy source.
    pub entropy_file: PathBuf,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            entropy_file: PathBuf::from(ENTROPY_AVAIL_PATH),
        }
    }
}

impl MetricsConfig {
    /// Merges arguments over the store and defaults.
    pub fn resolve(args: MetricsArgs, store: &ConfigStore) -> Self {
        let stored = &store.metrics;
        Self {
            scheme: args
                .scheme
                .or_else(|| stored.scheme.clone())
                .unwrap_or_else(default_scheme),
            entropy_file: args
                .entropy_file
                .or_else(|| stored.entropy_file.clone())
                .unwrap_or_else(|| PathBuf::from(ENTROPY_AVAIL_PATH)),
        }
    }

    /// Loads the store named by `--config` (if any) and resolves.
    pub fn from_args(args: MetricsArgs) -> Result<Self, ConfigError> {
        let store = ConfigStore::load(args.config.as_deref())?;
        Ok(Self::resolve(args, &store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ThresholdError;

    fn store(toml: &str) -> ConfigStore {
        ConfigStore::from_toml(toml).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = CheckConfig::resolve(CheckArgs::default(), &ConfigStore::default()).unwrap();
        assert_eq!(config.thresholds, ThresholdConfig::default());
        assert!(!config.metrics);
        assert!(config.metric_scheme.ends_with(".entropy"));
        assert_eq!(config.entropy_file, PathBuf::from(ENTROPY_AVAIL_PATH));
    }

    #[test]
    fn test_store_fills_missing_args() {
        let store = store("[check-entropy]\nwarning = 200\ncritical = 100\nmetrics = true\n");
        let config = CheckConfig::resolve(CheckArgs::default(), &store).unwrap();

        assert_eq!(config.thresholds.warning(), 200);
        assert_eq!(config.thresholds.critical(), 100);
        assert!(config.metrics);
    }

    #[test]
    fn test_args_override_store() {
        let store = store("[check-entropy]\nwarning = 200\nmetric-scheme = \"stored.entropy\"\n");
        let args = CheckArgs {
            warning: Some(90),
            metric_scheme: Some("arg.entropy".into()),
            ..Default::default()
        };
        let config = CheckConfig::resolve(args, &store).unwrap();

        assert_eq!(config.thresholds.warning(), 90);
        assert_eq!(config.thresholds.critical(), 30);
        assert_eq!(config.metric_scheme, "arg.entropy");
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let args = CheckArgs {
            warning: Some(10),
            critical: Some(20),
            ..Default::default()
        };
        assert!(matches!(
            CheckConfig::resolve(args, &ConfigStore::default()),
            Err(ConfigError::Threshold(ThresholdError::Inverted { .. }))
        ));
    }

    #[test]
    fn test_critical_above_default_warning_rejected() {
        let args = CheckArgs {
            critical: Some(61),
            ..Default::default()
        };
        assert!(CheckConfig::resolve(args, &ConfigStore::default()).is_err());
    }

    #[test]
    fn test_negative_from_store_rejected() {
        let store = store("[check-entropy]\ncritical = -1\n");
        assert!(matches!(
            CheckConfig::resolve(CheckArgs::default(), &store),
            Err(ConfigError::Threshold(ThresholdError::Negative { .. }))
        ));
    }

    #[test]
    fn test_metrics_scheme_precedence() {
        let store = store("[metrics-entropy]\nscheme = \"stored.entropy\"\n");

        let stored = MetricsConfig::resolve(MetricsArgs::default(), &store);
        assert_eq!(stored.scheme, "stored.entropy");

        let args = MetricsArgs {
            scheme: Some("arg.entropy".into()),
            ..Default::default()
        };
        assert_eq!(MetricsConfig::resolve(args, &store).scheme, "arg.entropy");
    }

    #[test]
    fn test_from_args_missing_store() {
        let dir = tempfile::tempdir().unwrap();
        let args = MetricsArgs {
            config: Some(dir.path().join("absent.toml")),
            ..Default::default()
        };
        assert!(matches!(
            MetricsConfig::from_args(args),
            Err(ConfigError::FileRead { .. })
        ));
    }
}
