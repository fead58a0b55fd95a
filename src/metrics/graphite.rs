//! Graphite plaintext line formatting.

use chrono::{DateTime, Utc};
use std::fmt;

/// A single metric sample, serialized immediately and not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRecord {
    /// Metric path, e.g. `host1.entropy`.
    pub scheme: String,
    /// Sample value. Not range-checked.
    pub value: i64,
    /// Whole seconds since the Unix epoch.
    pub timestamp: i64,
}

impl MetricRecord {
    /// Creates a record stamped with `now`, truncated to whole seconds.
    pub fn new(scheme: impl Into<String>, value: i64, now: DateTime<Utc>) -> Self {
        Self {
            scheme: scheme.into(),
            value,
            timestamp: now.timestamp(),
        }
    }

    /// Returns the record as one LF-terminated protocol line.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for MetricRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.scheme, self.value, self.timestamp)
    }
}

/// Formats a sample as `<scheme> <value> <unix_timestamp>\n`.
pub fn format(scheme: &str, value: i64, now: DateTime<Utc>) -> String {
    MetricRecord::new(scheme, value, now).to_line()
}
