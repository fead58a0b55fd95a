//! Single-shot plugin runs.
//!
//! Each run resolves configuration, reads the entropy source once and
//! produces an [`Outcome`]: a classification, a metric record, or an
//! UNKNOWN result wrapping whatever went wrong. Nothing here exits the
//! process; the binaries do that with [`Outcome::exit`].

use crate::analysis::{evaluate, CheckResult, CheckStatus, CHECK_LABEL};
use crate::config::{CheckArgs, CheckConfig, MetricsArgs, MetricsConfig};
use crate::metrics::MetricRecord;
use crate::source::{EntropySource, ProcEntropy};
use chrono::{DateTime, Utc};
use std::io::Write;

/// Label used for `metrics-entropy` UNKNOWN output.
pub const METRICS_LABEL: &str = "MetricsEntropy";

/// Result of one plugin invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Threshold classification (OK, WARNING or CRITICAL).
    Classified(CheckResult),
    /// Metric line; always reported as OK.
    Metric(MetricRecord),
    /// Data or configuration could not be used.
    Unknown(CheckResult),
}

impl Outcome {
    /// Builds an UNKNOWN outcome with the plugin's label.
    pub fn unknown(label: &str, reason: impl std::fmt::Display) -> Self {
        let status = CheckStatus::Unknown;
        Outcome::Unknown(CheckResult::new(status, format!("{label} {status}: {reason}")))
    }

    /// Returns the severity reported to the scheduler.
    pub fn status(&self) -> CheckStatus {
        match self {
            Outcome::Classified(result) | Outcome::Unknown(result) => result.status,
            Outcome::Metric(_) => CheckStatus::Ok,
        }
    }

    /// Returns the process exit code.
    pub fn exit_code(&self) -> i32 {
        self.status().exit_code()
    }

    /// Returns the single output line, LF-terminated.
    pub fn line(&self) -> String {
        match self {
            Outcome::Classified(result) | Outcome::Unknown(result) => {
                format!("{}\n", result.message)
            }
            Outcome::Metric(record) => record.to_line(),
        }
    }

    /// Writes the output line.
    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        out.write_all(self.line().as_bytes())?;
        out.flush()
    }

    /// Prints the output line to stdout and exits with the status code.
    pub fn exit(self) -> ! {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            tracing::error!(error = %e, "Failed to write check output");
            std::process::exit(CheckStatus::Unknown.exit_code());
        }
        std::process::exit(self.exit_code())
    }
}

/// Runs the check against an already resolved configuration.
///
/// `now` is only called in metrics mode, right before formatting.
pub fn run_check(
    config: &CheckConfig,
    source: &impl EntropySource,
    now: impl FnOnce() -> DateTime<Utc>,
) -> Outcome {
    let reading = match source.read() {
        Ok(reading) => reading,
        Err(e) => {
            tracing::debug!(error = %e, "Entropy read failed");
            return Outcome::unknown(CHECK_LABEL, format_args!("failed to read entropy: {e}"));
        }
    };

    if config.metrics {
        return Outcome::Metric(MetricRecord::new(
            config.metric_scheme.as_str(),
            reading.into(),
            now(),
        ));
    }

    Outcome::Classified(evaluate(reading, &config.thresholds))
}

/// Runs the metric plugin against an already resolved configuration.
pub fn run_metrics(
    config: &MetricsConfig,
    source: &impl EntropySource,
    now: impl FnOnce() -> DateTime<Utc>,
) -> Outcome {
    match source.read() {
        Ok(reading) => Outcome::Metric(MetricRecord::new(
            config.scheme.as_str(),
            reading.into(),
            now(),
        )),
        Err(e) => Outcome::unknown(METRICS_LABEL, format_args!("failed to read entropy: {e}")),
    }
}

/// Full `check-entropy` run: resolve, validate, read, classify.
pub fn check(args: CheckArgs, now: impl FnOnce() -> DateTime<Utc>) -> Outcome {
    let config = match CheckConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            return Outcome::unknown(CHECK_LABEL, format_args!("invalid configuration: {e}"));
        }
    };
    tracing::debug!(?config, "Resolved configuration");

    let source = ProcEntropy::with_path(&config.entropy_file);
    run_check(&config, &source, now)
}

/// Full `metrics-entropy` run: resolve, read, format.
pub fn metrics(args: MetricsArgs, now: impl FnOnce() -> DateTime<Utc>) -> Outcome {
    let config = match MetricsConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            return Outcome::unknown(METRICS_LABEL, format_args!("invalid configuration: {e}"));
        }
    };
    tracing::debug!(?config, "Resolved configuration");

    let source = ProcEntropy::with_path(&config.entropy_file);
    run_metrics(&config, &source, now)
}

/// Returns true for `--help` and `--version`, which are not failures.
///
/// Callers print these and exit 0 instead of building an [`Outcome`].
pub fn is_informational(error: &clap::Error) -> bool {
    use clap::error::ErrorKind;

    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

/// Turns an argument parsing failure into an UNKNOWN outcome.
///
/// Schedulers read clap's usual exit code 2 as CRITICAL, so bad
/// arguments are reported like any other unusable configuration.
pub fn argument_error(label: &str, error: clap::Error) -> Outcome {
    let rendered = error.to_string();
    let reason = rendered
        .lines()
        .next()
        .unwrap_or("")
        .trim_start_matches("error: ");
    Outcome::unknown(label, format_args!("invalid arguments: {reason}"))
}
