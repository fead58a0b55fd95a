//! Command-line and environment options.
//!
//! Every option is optional here; a missing value means "ask the next
//! layer". Defaults are applied during resolution, not by `clap`.
//! Environment variables that are set but empty count as unset.

use clap::builder::BoolishValueParser;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variables read by `check-entropy`.
pub const CHECK_ENV_VARS: &[&str] = &[
    "CHECK_ENTROPY_WARNING",
    "CHECK_ENTROPY_CRITICAL",
    "CHECK_ENTROPY_METRICS",
    "CHECK_ENTROPY_METRIC_SCHEME",
    "CHECK_ENTROPY_FILE",
    "CHECK_ENTROPY_CONFIG",
];

/// Environment variables read by `metrics-entropy`.
pub const METRICS_ENV_VARS: &[&str] = &[
    "METRICS_ENTROPY_SCHEME",
    "METRICS_ENTROPY_FILE",
    "METRICS_ENTROPY_CONFIG",
];

/// Removes variables that are set to an empty string.
///
/// `clap` would otherwise parse the empty value and fail, where an
/// exported-but-empty variable should fall through to the next layer.
pub fn unset_empty_env(names: &[&str]) {
    for name in names {
        if std::env::var_os(name).is_some_and(|value| value.is_empty()) {
            tracing::debug!(var = *name, "Ignoring empty environment variable");
            std::env::remove_var(name);
        }
    }
}

/// Options for the `check-entropy` plugin.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "check-entropy",
    version,
    about = "Check to monitor available system entropy"
)]
pub struct CheckArgs {
    /// Warning threshold for available entropy [default: 60]
    #[arg(short, long, env = "CHECK_ENTROPY_WARNING", allow_negative_numbers = true)]
    pub warning: Option<i64>,

    /// Critical threshold for available entropy [default: 30]
    #[arg(short, long, env = "CHECK_ENTROPY_CRITICAL", allow_negative_numbers = true)]
    pub critical: Option<i64>,

    /// Output entropy as a metric in Graphite format
    #[arg(
        short,
        long,
        env = "CHECK_ENTROPY_METRICS",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub metrics: Option<bool>,

    /// Metric naming scheme when using --metrics [default: <hostname>.entropy]
    #[arg(short = 's', long, env = "CHECK_ENTROPY_METRIC_SCHEME")]
    pub metric_scheme: Option<String>,

    /// Path of the entropy source [default: /proc/sys/kernel/random/entropy_avail]
    #[arg(long, env = "CHECK_ENTROPY_FILE")]
    pub entropy_file: Option<PathBuf>,

    /// TOML configuration store with stored option values
    #[arg(long, env = "CHECK_ENTROPY_CONFIG")]
    pub config: Option<PathBuf>,
}

impl CheckArgs {
    /// Parses arguments after dropping empty `CHECK_ENTROPY_*` variables.
    pub fn try_parse_env<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        unset_empty_env(CHECK_ENV_VARS);
        Self::try_parse_from(args)
    }
}

/// Options for the `metrics-entropy` plugin.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "metrics-entropy",
    version,
    about = "Metric plugin to collect system entropy"
)]
pub struct MetricsArgs {
    /// Metric naming scheme, text to prepend to the metric [default: <hostname>.entropy]
    #[arg(short, long, env = "METRICS_ENTROPY_SCHEME")]
    pub scheme: Option<String>,

    /// Path of the entropy source [default: /proc/sys/kernel/random/entropy_avail]
    #[arg(long, env = "METRICS_ENTROPY_FILE")]
    pub entropy_file: Option<PathBuf>,

    /// TOML configuration store with stored option values
    #[arg(long, env = "METRICS_ENTROPY_CONFIG")]
    pub config: Option<PathBuf>,
}

impl MetricsArgs {
    /// Parses arguments after dropping empty `METRICS_ENTROPY_*` variables.
    pub fn try_parse_env<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        unset_empty_env(METRICS_ENV_VARS);
        Self::try_parse_from(args)
    }
}
