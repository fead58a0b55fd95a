//! Threshold classification of entropy readings.
//!
//! Maps a single reading onto a scheduler severity using two ordered,
//! inclusive cutoffs.

mod status;
mod threshold;

pub use status::{CheckResult, CheckStatus};
pub use threshold::{evaluate, ThresholdConfig, ThresholdError, CHECK_LABEL};
