//! Warning and critical thresholds.
//!
//! Lower entropy is worse, so both thresholds are upper bounds of a
//! severity band and equality falls into the more severe band.

use super::status::{CheckResult, CheckStatus};
use crate::source::EntropyReading;

/// Label prefixed to every classification message.
pub const CHECK_LABEL: &str = "CheckEntropy";

/// Validated pair of entropy thresholds.
///
/// Invariant: `0 <= critical <= warning`. The only way to build one is
/// through [`ThresholdConfig::new`], so [`evaluate`] never sees an
/// inverted or negative pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdConfig {
    warning: i64,
    critical: i64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            warning: 60,
            critical: 30,
        }
    }
}

impl ThresholdConfig {
    /// Validates and builds a threshold pair.
    pub fn new(warning: i64, critical: i64) -> Result<Self, ThresholdError> {
        if critical < 0 || warning < 0 {
            return Err(ThresholdError::Negative { warning, critical });
        }
        if critical > warning {
            return Err(ThresholdError::Inverted { warning, critical });
        }
        Ok(Self { warning, critical })
    }

    /// Upper bound of the WARNING band.
    #[inline]
    pub fn warning(&self) -> i64 {
        self.warning
    }

    /// Upper bound of the CRITICAL band.
    #[inline]
    pub fn critical(&self) -> i64 {
        self.critical
    }

    /// Returns the severity band a value falls into.
    pub fn classify(&self, value: i64) -> CheckStatus {
        if value <= self.critical {
            CheckStatus::Critical
        } else if value <= self.warning {
            CheckStatus::Warning
        } else {
            CheckStatus::Ok
        }
    }
}

/// Threshold validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdError {
    /// A threshold is below zero.
    #[error("invalid entropy threshold (warning {warning}, critical {critical})")]
    Negative {
        /// Configured warning threshold.
        warning: i64,
        /// Configured critical threshold.
        critical: i64,
    },

    /// Critical is above warning.
    #[error("critical threshold must be less than or equal to warning threshold (warning {warning}, critical {critical})")]
    Inverted {
        /// Configured warning threshold.
        warning: i64,
        /// Configured critical threshold.
        critical: i64,
    },
}

/// Classifies a reading against the thresholds.
///
/// Never returns [`CheckStatus::Unknown`].
pub fn evaluate(reading: EntropyReading, thresholds: &ThresholdConfig) -> CheckResult {
    let value = i64::from(reading);
    let status = thresholds.classify(value);

    tracing::debug!(
        entropy = value,
        warning = thresholds.warning,
        critical = thresholds.critical,
        %status,
        "Classified entropy"
    );

    CheckResult::new(status, format!("{CHECK_LABEL} {status}: entropy is {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn eval(value: u32, warning: i64, critical: i64) -> CheckResult {
        let thresholds = ThresholdConfig::new(warning, critical).unwrap();
        evaluate(EntropyReading::new(value), &thresholds)
    }

    #[test]
    fn test_defaults() {
        let thresholds = ThresholdConfig::default();
        assert_eq!(thresholds.warning(), 60);
        assert_eq!(thresholds.critical(), 30);
    }

    #[test]
    fn test_warning_message() {
        let result = eval(45, 60, 30);
        assert_eq!(result.status, CheckStatus::Warning);
        assert_eq!(result.message, "CheckEntropy WARNING: entropy is 45");
    }

    #[test]
    fn test_critical_message() {
        let result = eval(20, 60, 30);
        assert_eq!(result.status, CheckStatus::Critical);
        assert_eq!(result.message, "CheckEntropy CRITICAL: entropy is 20");
    }

    #[test]
    fn test_ok_message() {
        let result = eval(150, 60, 30);
        assert_eq!(result.status, CheckStatus::Ok);
        assert_eq!(result.message, "CheckEntropy OK: entropy is 150");
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(eval(30, 60, 30).status, CheckStatus::Critical);
        assert_eq!(eval(60, 60, 30).status, CheckStatus::Warning);
        assert_eq!(eval(61, 60, 30).status, CheckStatus::Ok);
    }

    #[test]
    fn test_equal_thresholds_skip_warning() {
        assert_eq!(eval(40, 40, 40).status, CheckStatus::Critical);
        assert_eq!(eval(41, 40, 40).status, CheckStatus::Ok);
    }

    #[test]
    fn test_zero_thresholds() {
        assert_eq!(eval(0, 0, 0).status, CheckStatus::Critical);
        assert_eq!(eval(1, 0, 0).status, CheckStatus::Ok);
    }

    #[test]
    fn test_inverted_rejected() {
        assert!(matches!(
            ThresholdConfig::new(30, 60),
            Err(ThresholdError::Inverted { .. })
        ));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            ThresholdConfig::new(-1, -5),
            Err(ThresholdError::Negative { .. })
        ));
        assert!(matches!(
            ThresholdConfig::new(60, -1),
            Err(ThresholdError::Negative { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_exactly_one_band(v in 0u32..10_000, c in 0i64..5_000, spread in 0i64..5_000) {
            let w = c + spread;
            let status = eval(v, w, c).status;
            let v = i64::from(v);

            prop_assert_eq!(status == CheckStatus::Critical, v <= c);
            prop_assert_eq!(status == CheckStatus::Warning, c < v && v <= w);
            prop_assert_eq!(status == CheckStatus::Ok, v > w);
            prop_assert_ne!(status, CheckStatus::Unknown);
        }

        #[test]
        fn prop_inverted_always_rejected(c in 0i64..10_000, gap in 1i64..10_000) {
            prop_assert!(ThresholdConfig::new(c + gap, c).is_ok());
            prop_assert!(ThresholdConfig::new(c, c + gap).is_err());
        }

        #[test]
        fn prop_negative_always_rejected(n in i64::MIN..0, other in 0i64..10_000) {
            prop_assert!(ThresholdConfig::new(n, other).is_err());
            prop_assert!(ThresholdConfig::new(other, n).is_err());
        }
    }
}
