//! Check severities and their exit codes.

use std::fmt;

/// Severity reported back to the monitoring scheduler.
///
/// The discriminants are the exit codes schedulers expect from a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    /// Value is above both thresholds.
    Ok = 0,
    /// Value is at or below the warning threshold.
    Warning = 1,
    /// Value is at or below the critical threshold.
    Critical = 2,
    /// Data could not be obtained or the configuration is invalid.
    Unknown = 3,
}

impl CheckStatus {
    /// Returns the process exit code for this status.
    #[inline]
    pub fn exit_code(self) -> i32 {
        self as i32
    }

    /// Returns the upper-case label used in check output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A severity paired with the line shown to operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Severity of the result.
    pub status: CheckStatus,
    /// Human-readable message, without line terminator.
    pub message: String,
}

impl CheckResult {
    /// Pairs a status with its message.
    pub fn new(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CheckStatus::Ok.exit_code(), 0);
        assert_eq!(CheckStatus::Warning.exit_code(), 1);
        assert_eq!(CheckStatus::Critical.exit_code(), 2);
        assert_eq!(CheckStatus::Unknown.exit_code(), 3);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(CheckStatus::Critical.to_string(), "CRITICAL");
        assert_eq!(CheckStatus::Unknown.to_string(), "UNKNOWN");
    }
}
